//! # Entity Encoding
//!
//! Builds the Siren entity tree for each model shape by composing the link converter, the
//! affordance converter, the class strategy and the title resolver.
//!
//! | Model | `class` | `properties` | `entities` |
//! |---|---|---|---|
//! | representation | none | none | none |
//! | entity | class strategy | the content | none |
//! | collection | `collection` | `{"size": n}` | one per element, `rel: ["item"]` |
//! | paged | `page` | page metadata | one per element, `rel: ["item"]` |
//!
//! Collection elements go through [`Embeddable`], so anything that is not an
//! [`EntityModel`] is rejected with [`SirenError::InvalidElementShape`].

use crate::model::{
    iana, CollectionModel, EntityModel, ModelShape, PagedModel, Representation, RepresentationModel,
};
use crate::siren::affordance::SirenAffordanceConverter;
use crate::siren::class::EntityClassProvider;
use crate::siren::config::SirenConfiguration;
use crate::siren::error::SirenError;
use crate::siren::link::SirenLinkConverter;
use crate::siren::message::{MessageResolver, TitleResolvable};
use crate::siren::wire::SirenEntity;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

const COLLECTION_CLASS: &str = "collection";
const PAGE_CLASS: &str = "page";

#[derive(Clone)]
pub struct SirenEntityConverter {
    links: SirenLinkConverter,
    affordances: SirenAffordanceConverter,
    class_provider: Arc<dyn EntityClassProvider>,
    message_resolver: Arc<dyn MessageResolver>,
}

impl SirenEntityConverter {
    pub fn new(
        configuration: SirenConfiguration,
        message_resolver: Arc<dyn MessageResolver>,
        class_provider: Arc<dyn EntityClassProvider>,
    ) -> Self {
        Self {
            links: SirenLinkConverter::new(configuration, message_resolver.clone()),
            affordances: SirenAffordanceConverter::new(configuration, message_resolver.clone()),
            class_provider,
            message_resolver,
        }
    }

    pub fn link_converter(&self) -> &SirenLinkConverter {
        &self.links
    }

    /// Links, actions and title; shared by every shape.
    fn base(&self, model: &dyn Representation) -> Result<SirenEntity, SirenError> {
        Ok(SirenEntity {
            links: self.links.to_siren(model.links())?,
            actions: self.affordances.to_siren(model.links())?,
            title: self
                .message_resolver
                .resolve(&TitleResolvable::entity(model.declared_type())),
            ..SirenEntity::default()
        })
    }

    pub fn encode_representation(
        &self,
        model: &RepresentationModel,
    ) -> Result<SirenEntity, SirenError> {
        let entity = self.base(model)?;
        trace_encoded(model.shape(), &entity);
        Ok(entity)
    }

    pub fn encode_entity<T: Serialize>(
        &self,
        model: &EntityModel<T>,
    ) -> Result<SirenEntity, SirenError> {
        let mut entity = self.base(model)?;
        entity.classes = self.class_provider.classes(model);
        entity.properties = match serde_json::to_value(model.content())? {
            Value::Null => None,
            value => Some(value),
        };
        trace_encoded(model.shape(), &entity);
        Ok(entity)
    }

    /// Same as [`encode_entity`](Self::encode_entity), plus the relations the entity has
    /// to its parent.
    pub fn encode_embedded<T: Serialize>(
        &self,
        model: &EntityModel<T>,
        rels: &[&str],
    ) -> Result<SirenEntity, SirenError> {
        let mut entity = self.encode_entity(model)?;
        entity.rels = rels.iter().map(|rel| rel.to_string()).collect();
        Ok(entity)
    }

    pub fn encode_collection<E: Embeddable>(
        &self,
        model: &CollectionModel<E>,
    ) -> Result<SirenEntity, SirenError> {
        let mut entity = self.base(model)?;
        entity.classes = vec![COLLECTION_CLASS.to_string()];
        entity.properties = Some(json!({ "size": model.len() }));
        entity.entities = self.embed(model.content())?;
        trace_encoded(model.shape(), &entity);
        Ok(entity)
    }

    pub fn encode_paged<E: Embeddable>(
        &self,
        model: &PagedModel<E>,
    ) -> Result<SirenEntity, SirenError> {
        let mut entity = self.base(model)?;
        entity.classes = vec![PAGE_CLASS.to_string()];
        entity.properties = model.metadata().map(serde_json::to_value).transpose()?;
        entity.entities = self.embed(model.content())?;
        trace_encoded(model.shape(), &entity);
        Ok(entity)
    }

    fn embed<E: Embeddable>(&self, elements: &[E]) -> Result<Vec<SirenEntity>, SirenError> {
        elements
            .iter()
            .map(|element| element.encode_embedded(self, &[iana::ITEM]))
            .collect()
    }
}

fn trace_encoded(shape: ModelShape, entity: &SirenEntity) {
    debug!(
        %shape,
        links = entity.links.len(),
        actions = entity.actions.len(),
        entities = entity.entities.len(),
        "Encoded"
    );
}

/// An element of a collection or page.
///
/// Only [`EntityModel`] can be embedded; the other implementations exist so that a collection
/// of the wrong shape fails at encode time with a descriptive error.
pub trait Embeddable {
    fn encode_embedded(
        &self,
        converter: &SirenEntityConverter,
        rels: &[&str],
    ) -> Result<SirenEntity, SirenError>;
}

fn reject(actual: ModelShape) -> Result<SirenEntity, SirenError> {
    warn!(expected = %ModelShape::Entity, %actual, "Rejected sub-entity");
    Err(SirenError::InvalidElementShape {
        expected: ModelShape::Entity,
        actual,
    })
}

impl<T: Serialize> Embeddable for EntityModel<T> {
    fn encode_embedded(
        &self,
        converter: &SirenEntityConverter,
        rels: &[&str],
    ) -> Result<SirenEntity, SirenError> {
        converter.encode_embedded(self, rels)
    }
}

impl Embeddable for RepresentationModel {
    fn encode_embedded(
        &self,
        _: &SirenEntityConverter,
        _: &[&str],
    ) -> Result<SirenEntity, SirenError> {
        reject(ModelShape::Representation)
    }
}

impl<T> Embeddable for CollectionModel<T> {
    fn encode_embedded(
        &self,
        _: &SirenEntityConverter,
        _: &[&str],
    ) -> Result<SirenEntity, SirenError> {
        reject(ModelShape::Collection)
    }
}

impl<T> Embeddable for PagedModel<T> {
    fn encode_embedded(
        &self,
        _: &SirenEntityConverter,
        _: &[&str],
    ) -> Result<SirenEntity, SirenError> {
        reject(ModelShape::Paged)
    }
}

impl Embeddable for Value {
    fn encode_embedded(
        &self,
        _: &SirenEntityConverter,
        _: &[&str],
    ) -> Result<SirenEntity, SirenError> {
        reject(ModelShape::Plain)
    }
}

impl Embeddable for String {
    fn encode_embedded(
        &self,
        _: &SirenEntityConverter,
        _: &[&str],
    ) -> Result<SirenEntity, SirenError> {
        reject(ModelShape::Plain)
    }
}

impl<E: Embeddable + ?Sized> Embeddable for Box<E> {
    fn encode_embedded(
        &self,
        converter: &SirenEntityConverter,
        rels: &[&str],
    ) -> Result<SirenEntity, SirenError> {
        (**self).encode_embedded(converter, rels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Affordance, HttpMethod, Link, PageMetadata};
    use crate::siren::class::SimpleEntityClassProvider;
    use crate::siren::config::RenderTemplatedLinks;
    use crate::siren::message::{DefaultsOnly, MapMessageResolver};
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Person {
        name: String,
        age: u32,
    }

    fn converter() -> SirenEntityConverter {
        SirenEntityConverter::new(
            SirenConfiguration::default(),
            Arc::new(DefaultsOnly),
            Arc::new(SimpleEntityClassProvider),
        )
    }

    fn person(name: &str, age: u32) -> EntityModel<Person> {
        EntityModel::new(Person {
            name: name.into(),
            age,
        })
    }

    #[test]
    fn representation_has_links_but_no_class() {
        let model = RepresentationModel::new().add_link(Link::self_link("/"));
        let entity = converter().encode_representation(&model).expect("encodes");

        assert!(entity.classes.is_empty());
        assert!(entity.properties.is_none());
        assert_eq!(entity.links.len(), 1);
    }

    #[test]
    fn entity_content_becomes_properties() {
        let entity = converter()
            .encode_entity(&EntityModel::new("test".to_string()))
            .expect("encodes");
        assert_eq!(entity.classes, ["string"]);
        assert_eq!(entity.properties, Some(json!("test")));

        let entity = converter().encode_entity(&EntityModel::new(24)).expect("encodes");
        assert_eq!(entity.properties, Some(json!(24)));

        let entity = converter().encode_entity(&person("Peter", 42)).expect("encodes");
        assert_eq!(entity.classes, ["person"]);
        assert_eq!(entity.properties, Some(json!({"name": "Peter", "age": 42})));
        assert!(entity.rels.is_empty());
    }

    #[test]
    fn null_content_is_omitted() {
        let entity = converter()
            .encode_entity(&EntityModel::new(Option::<String>::None))
            .expect("encodes");
        assert!(entity.properties.is_none());
    }

    #[test]
    fn entity_title_is_keyed_on_the_content_type() {
        let resolver = MapMessageResolver::new()
            .with("_entity.Person.title", "A person")
            .with("_entity.default.title", "Something");
        let converter = SirenEntityConverter::new(
            SirenConfiguration::default(),
            Arc::new(resolver),
            Arc::new(SimpleEntityClassProvider),
        );

        let entity = converter.encode_entity(&person("Peter", 42)).expect("encodes");
        assert_eq!(entity.title.as_deref(), Some("A person"));

        let entity = converter
            .encode_representation(&RepresentationModel::new())
            .expect("encodes");
        assert_eq!(entity.title.as_deref(), Some("Something"));
    }

    #[test]
    fn collection_embeds_items_and_reports_its_size() {
        let model = CollectionModel::new(vec![person("Peter", 42), person("Paul", 36)])
            .add_link(Link::self_link("/persons"));
        let entity = converter().encode_collection(&model).expect("encodes");

        assert_eq!(entity.classes, ["collection"]);
        assert_eq!(entity.properties, Some(json!({"size": 2})));
        assert_eq!(entity.entities.len(), 2);
        assert!(entity.entities.iter().all(|e| e.rels == ["item"]));
        assert_eq!(entity.entities[1].properties, Some(json!({"name": "Paul", "age": 36})));
    }

    #[test]
    fn empty_collection_still_reports_size() {
        let model: CollectionModel<EntityModel<Person>> = CollectionModel::empty();
        let entity = converter().encode_collection(&model).expect("encodes");

        assert_eq!(entity.classes, ["collection"]);
        assert_eq!(entity.properties, Some(json!({"size": 0})));
        assert!(entity.entities.is_empty());
    }

    #[test]
    fn paged_model_carries_page_metadata() {
        let model = PagedModel::new(vec![person("Peter", 42)], Some(PageMetadata::new(1, 0, 3)));
        let entity = converter().encode_paged(&model).expect("encodes");

        assert_eq!(entity.classes, ["page"]);
        assert_eq!(
            entity.properties,
            Some(json!({"size": 1, "totalElements": 3, "totalPages": 3, "number": 0}))
        );
        assert_eq!(entity.entities[0].rels, ["item"]);
    }

    #[test]
    fn paged_model_without_metadata_has_no_properties() {
        let model: PagedModel<EntityModel<Person>> = PagedModel::new(Vec::new(), None);
        let entity = converter().encode_paged(&model).expect("encodes");
        assert!(entity.properties.is_none());
    }

    #[test]
    fn non_entity_elements_are_rejected() {
        let model = CollectionModel::new(vec![json!({"name": "Peter"})]);
        let error = converter().encode_collection(&model).expect_err("must fail");
        assert!(matches!(
            error,
            SirenError::InvalidElementShape {
                expected: ModelShape::Entity,
                actual: ModelShape::Plain
            }
        ));

        let mixed: CollectionModel<Box<dyn Embeddable>> = CollectionModel::new(vec![
            Box::new(person("Peter", 42)) as Box<dyn Embeddable>,
            Box::new(RepresentationModel::new()),
        ]);
        let error = converter().encode_collection(&mixed).expect_err("must fail");
        assert_eq!(
            error.to_string(),
            "Sub-entities must be of shape 'entity' [but is of shape 'representation']"
        );
    }

    #[test]
    fn affordances_and_templated_links_become_actions() {
        let model = person("Peter", 42)
            .add_link(
                Link::self_link("/persons/1")
                    .and_affordance(Affordance::new("deletePerson", HttpMethod::Delete)),
            )
            .add_link(Link::new("/persons/{id}", "person"));

        let entity = converter().encode_entity(&model).expect("encodes");
        assert_eq!(entity.links.len(), 1);
        let names: Vec<&str> = entity.actions.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["deletePerson", "person"]);

        let as_link = SirenEntityConverter::new(
            SirenConfiguration::new(RenderTemplatedLinks::AsLink),
            Arc::new(DefaultsOnly),
            Arc::new(SimpleEntityClassProvider),
        );
        let entity = as_link.encode_entity(&model).expect("encodes");
        assert_eq!(entity.links.len(), 2);
        assert_eq!(entity.actions.len(), 1);
    }
}
