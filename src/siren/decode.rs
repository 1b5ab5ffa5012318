//! # Entity Decoding
//!
//! Rebuilds models from Siren entities. Links are recovered from both `links` and `actions`;
//! content is mapped from `properties` onto the caller's target type with serde.

use crate::model::{
    CollectionModel, EntityModel, Links, PageMetadata, PagedModel, RepresentationModel,
};
use crate::siren::error::SirenError;
use crate::siren::link::SirenLinkConverter;
use crate::siren::wire::SirenEntity;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct SirenEntityDecoder {
    links: SirenLinkConverter,
}

impl SirenEntityDecoder {
    pub fn new(links: SirenLinkConverter) -> Self {
        Self { links }
    }

    fn links(&self, entity: &SirenEntity) -> Result<Links, SirenError> {
        let mut links = self.links.from_siren(&entity.links)?;
        links.extend(self.links.from_siren_actions(&entity.actions)?);
        Ok(links)
    }

    pub fn decode_representation(
        &self,
        entity: &SirenEntity,
    ) -> Result<RepresentationModel, SirenError> {
        Ok(RepresentationModel::with_links(self.links(entity)?))
    }

    pub fn decode_entity<T: DeserializeOwned>(
        &self,
        entity: &SirenEntity,
    ) -> Result<EntityModel<T>, SirenError> {
        let content = content(entity.properties.as_ref())?;
        Ok(EntityModel::with_links(content, self.links(entity)?))
    }

    /// Every nested entity is decoded as an [`EntityModel<T>`]. A `size` property that disagrees
    /// with the number of nested entities is logged, not rejected.
    pub fn decode_collection<T: DeserializeOwned>(
        &self,
        entity: &SirenEntity,
    ) -> Result<CollectionModel<EntityModel<T>>, SirenError> {
        let items = self.items(entity)?;

        let declared = entity
            .properties
            .as_ref()
            .and_then(|properties| properties.get("size"))
            .and_then(Value::as_u64);
        if let Some(size) = declared {
            if size != items.len() as u64 {
                warn!(size, actual = items.len(), "Collection size mismatch");
            }
        }

        Ok(CollectionModel::with_links(items, self.links(entity)?))
    }

    /// Page metadata is read from `properties` when present.
    pub fn decode_paged<T: DeserializeOwned>(
        &self,
        entity: &SirenEntity,
    ) -> Result<PagedModel<EntityModel<T>>, SirenError> {
        let items = self.items(entity)?;
        let metadata = match &entity.properties {
            Some(properties @ Value::Object(_)) => {
                Some(PageMetadata::deserialize(properties).map_err(SirenError::ContentMapping)?)
            }
            _ => None,
        };

        Ok(PagedModel::with_links(items, metadata, self.links(entity)?))
    }

    fn items<T: DeserializeOwned>(
        &self,
        entity: &SirenEntity,
    ) -> Result<Vec<EntityModel<T>>, SirenError> {
        let items = entity
            .entities
            .iter()
            .map(|item| self.decode_entity(item))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(entities = items.len(), "Decoded sub-entities");
        Ok(items)
    }
}

/// Primitives pass through, maps are assigned field by field. Missing or `null` properties
/// and arrays are errors.
fn content<T: DeserializeOwned>(properties: Option<&Value>) -> Result<T, SirenError> {
    match properties {
        None | Some(Value::Null) => Err(SirenError::MissingContent),
        Some(Value::Array(_)) => Err(SirenError::UnsupportedProperties("array")),
        Some(value) => T::deserialize(value).map_err(SirenError::ContentMapping),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Representation;
    use crate::siren::config::SirenConfiguration;
    use crate::siren::message::DefaultsOnly;
    use crate::siren::wire::{SirenAction, SirenLink};
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Person {
        name: String,
        age: u32,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Name(String);

    fn decoder() -> SirenEntityDecoder {
        SirenEntityDecoder::new(SirenLinkConverter::new(
            SirenConfiguration::default(),
            Arc::new(DefaultsOnly),
        ))
    }

    fn entity(properties: Value) -> SirenEntity {
        SirenEntity {
            properties: Some(properties),
            ..SirenEntity::default()
        }
    }

    #[test]
    fn primitives_pass_through() {
        let model: EntityModel<String> = decoder()
            .decode_entity(&entity(json!("test")))
            .expect("decodes");
        assert_eq!(model.content(), "test");

        let model: EntityModel<i32> = decoder().decode_entity(&entity(json!(24))).expect("decodes");
        assert_eq!(*model.content(), 24);

        let model: EntityModel<Name> = decoder()
            .decode_entity(&entity(json!("Peter")))
            .expect("decodes");
        assert_eq!(model.into_content(), Name("Peter".into()));
    }

    #[test]
    fn maps_are_assigned_to_fields() {
        let model: EntityModel<Person> = decoder()
            .decode_entity(&entity(json!({"name": "Peter", "age": 42})))
            .expect("decodes");
        assert_eq!(
            model.into_content(),
            Person {
                name: "Peter".into(),
                age: 42
            }
        );
    }

    #[test]
    fn missing_required_field_fails() {
        let result = decoder().decode_entity::<Person>(&entity(json!({"name": "Peter"})));
        assert!(matches!(result, Err(SirenError::ContentMapping(_))));
    }

    #[test]
    fn mismatched_primitive_fails() {
        let result = decoder().decode_entity::<i32>(&entity(json!("test")));
        assert!(matches!(result, Err(SirenError::ContentMapping(_))));
    }

    #[test]
    fn unusable_properties_fail() {
        let result = decoder().decode_entity::<String>(&SirenEntity::default());
        assert!(matches!(result, Err(SirenError::MissingContent)));

        let result = decoder().decode_entity::<String>(&entity(Value::Null));
        assert!(matches!(result, Err(SirenError::MissingContent)));

        let result = decoder().decode_entity::<Vec<String>>(&entity(json!(["a"])));
        assert!(matches!(result, Err(SirenError::UnsupportedProperties("array"))));
    }

    #[test]
    fn links_and_actions_are_merged() {
        let source = SirenEntity {
            links: vec![SirenLink::new("self", "/persons/1")],
            actions: vec![SirenAction {
                name: "deletePerson".into(),
                href: "/persons/1".into(),
                ..SirenAction::default()
            }],
            ..SirenEntity::default()
        };

        let model = decoder().decode_representation(&source).expect("decodes");
        let links = model.links();
        assert_eq!(links.len(), 2);
        assert!(links.has_link("self"));
        assert!(links.has_link("deletePerson"));
    }

    #[test]
    fn collections_decode_each_item() {
        let item = |name: &str, age: u32| SirenEntity {
            rels: vec!["item".into()],
            ..entity(json!({"name": name, "age": age}))
        };
        let source = SirenEntity {
            entities: vec![item("Peter", 42), item("Paul", 36)],
            links: vec![SirenLink::new("self", "/persons")],
            ..entity(json!({"size": 2}))
        };

        let model = decoder().decode_collection::<Person>(&source).expect("decodes");
        assert_eq!(model.len(), 2);
        assert_eq!(model.content()[1].content().name, "Paul");
        assert!(model.links().has_link("self"));
    }

    #[test]
    fn paged_metadata_is_recovered() {
        let source = SirenEntity {
            entities: vec![entity(json!({"name": "Peter", "age": 42}))],
            ..entity(json!({"size": 1, "totalElements": 3, "totalPages": 3, "number": 0}))
        };

        let model = decoder().decode_paged::<Person>(&source).expect("decodes");
        assert_eq!(model.metadata(), Some(&PageMetadata::new(1, 0, 3)));
        assert_eq!(model.len(), 1);

        let without = decoder()
            .decode_paged::<Person>(&SirenEntity::default())
            .expect("decodes");
        assert_eq!(without.metadata(), None);
        assert!(without.is_empty());
    }

    #[test]
    fn broken_item_fails_the_whole_collection() {
        let source = SirenEntity {
            entities: vec![entity(json!({"name": "Peter"}))],
            ..SirenEntity::default()
        };
        assert!(decoder().decode_collection::<Person>(&source).is_err());
    }
}
