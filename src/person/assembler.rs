//! # Person Model Assembler
//!
//! Wraps persons into representation models with their links and affordances:
//!
//! * a person: `self` link to `/persons/{id}` affording `update` (PUT) and `delete` (DELETE)
//! * all persons: `self` link to `/persons` affording `insert` (POST), plus the templated
//!   `/persons/{id}` link
//! * a page: `first`/`prev`/`self`/`next`/`last` links, `self` affording `insert`
//! * the root: links to the collection and the templated lookups

use crate::model::{
    iana, Affordance, CollectionModel, EntityModel, HttpMethod, Link, PageMetadata, PagedModel,
    PayloadMetadata, RepresentationModel, UriTemplate,
};
use crate::person::error::PersonError;
use crate::person::model::{Page, PageRequest, Person, PersonInput};
use crate::siren::SirenError;
use std::collections::HashMap;

pub const PATH_FIND_ALL: &str = "/persons";
pub const PATH_FIND_ONE: &str = "/persons/{id}";
pub const PATH_FIND_PAGE: &str = "/persons{?page,size}";

pub const REL_PERSON: &str = "person";
pub const REL_PERSONS: &str = "persons";

#[derive(Debug, Clone)]
pub struct PersonModelAssembler {
    input: PayloadMetadata,
}

impl PersonModelAssembler {
    pub fn new() -> Result<Self, PersonError> {
        let input = PayloadMetadata::from_sample(&PersonInput::default())
            .map_err(SirenError::from)?
            .with_media_type("application/json");
        Ok(Self { input })
    }

    fn affordance(&self, name: &str, method: HttpMethod) -> Affordance {
        Affordance::new(name, method).with_input(self.input.clone())
    }

    fn person_link(&self, id: u64) -> Link {
        let values = HashMap::from([("id".to_string(), id.to_string())]);
        Link::self_link(UriTemplate::new(PATH_FIND_ONE).expand(&values))
            .and_affordance(self.affordance("update", HttpMethod::Put))
            .and_affordance(Affordance::new("delete", HttpMethod::Delete))
    }

    fn insert_link(&self, href: impl Into<String>) -> Link {
        Link::self_link(href).and_affordance(self.affordance("insert", HttpMethod::Post))
    }

    pub fn to_model(&self, person: Person) -> EntityModel<Person> {
        let link = self.person_link(person.id);
        EntityModel::new(person).add_link(link)
    }

    pub fn to_collection_model(
        &self,
        persons: Vec<Person>,
    ) -> CollectionModel<EntityModel<Person>> {
        let models = persons.into_iter().map(|person| self.to_model(person));
        CollectionModel::new(models)
            .add_link(self.insert_link(PATH_FIND_ALL))
            .add_link(Link::new(PATH_FIND_ONE, REL_PERSON).with_name("findOne"))
    }

    pub fn to_paged_model(&self, page: Page<Person>) -> PagedModel<EntityModel<Person>> {
        let PageRequest { number, size } = page.request;
        let metadata = PageMetadata::new(size, number, page.total_elements);
        let href = |number: u64| {
            let values = HashMap::from([
                ("page".to_string(), number.to_string()),
                ("size".to_string(), size.to_string()),
            ]);
            UriTemplate::new(PATH_FIND_PAGE).expand(&values)
        };

        let mut links = Vec::new();
        if metadata.total_pages > 0 {
            links.push(Link::new(href(0), iana::FIRST));
        }
        if number > 0 {
            links.push(Link::new(href(number - 1), iana::PREV));
        }
        links.push(self.insert_link(href(number)));
        if number.saturating_add(1) < metadata.total_pages {
            links.push(Link::new(href(number + 1), iana::NEXT));
        }
        if metadata.total_pages > 0 {
            links.push(Link::new(href(metadata.total_pages - 1), iana::LAST));
        }

        let models = page.content.into_iter().map(|person| self.to_model(person));
        PagedModel::with_links(models, Some(metadata), links)
    }

    pub fn root(&self) -> RepresentationModel {
        RepresentationModel::new()
            .add_link(Link::self_link("/"))
            .add_link(Link::new(PATH_FIND_ALL, REL_PERSONS))
            .add_link(Link::new(PATH_FIND_PAGE, REL_PERSONS).with_name("findPage"))
            .add_link(Link::new(PATH_FIND_ONE, REL_PERSON).with_name("findOne"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PropertyMetadata, Representation, ValueType};

    fn assembler() -> PersonModelAssembler {
        PersonModelAssembler::new().expect("sample serializes")
    }

    fn peter() -> Person {
        Person {
            id: 1,
            name: "Peter".into(),
            age: 42,
        }
    }

    #[test]
    fn person_self_link_affords_update_and_delete() {
        let model = assembler().to_model(peter());
        let link = model.links().get_link("self").expect("self link");

        assert_eq!(link.href(), "/persons/1");
        let affordances: Vec<(&str, HttpMethod)> = link
            .affordances()
            .iter()
            .map(|a| (a.name(), a.method()))
            .collect();
        assert_eq!(
            affordances,
            [("update", HttpMethod::Put), ("delete", HttpMethod::Delete)]
        );
        assert_eq!(
            link.affordances()[0].input().properties,
            vec![
                PropertyMetadata::new("name", ValueType::Text),
                PropertyMetadata::new("age", ValueType::Integer),
            ]
        );
    }

    #[test]
    fn collection_affords_insert_and_offers_lookup() {
        let model = assembler().to_collection_model(vec![peter()]);

        let self_link = model.links().get_link("self").expect("self link");
        assert_eq!(self_link.affordances()[0].method(), HttpMethod::Post);
        assert!(model.links().get_link(REL_PERSON).expect("lookup").is_templated());
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn page_links_depend_on_position() {
        let page = Page {
            content: vec![peter()],
            request: PageRequest::new(1, 1),
            total_elements: 3,
        };
        let model = assembler().to_paged_model(page);
        let links = model.links();

        assert_eq!(links.get_link("first").map(Link::href), Some("/persons?page=0&size=1"));
        assert_eq!(links.get_link("prev").map(Link::href), Some("/persons?page=0&size=1"));
        assert_eq!(links.get_link("self").map(Link::href), Some("/persons?page=1&size=1"));
        assert_eq!(links.get_link("next").map(Link::href), Some("/persons?page=2&size=1"));
        assert_eq!(links.get_link("last").map(Link::href), Some("/persons?page=2&size=1"));
        assert_eq!(model.metadata(), Some(&PageMetadata::new(1, 1, 3)));
    }

    #[test]
    fn empty_page_has_only_a_self_link() {
        let page = Page {
            content: Vec::new(),
            request: PageRequest::new(0, 10),
            total_elements: 0,
        };
        let model = assembler().to_paged_model(page);
        assert_eq!(model.links().len(), 1);
        assert!(model.links().has_link("self"));
    }

    #[test]
    fn page_past_the_end_has_no_next_link() {
        let page = Page {
            content: Vec::new(),
            request: PageRequest::new(u64::MAX, 1),
            total_elements: 3,
        };
        let model = assembler().to_paged_model(page);
        let links = model.links();

        assert!(!links.has_link("next"));
        assert_eq!(links.get_link("last").map(Link::href), Some("/persons?page=2&size=1"));
        assert_eq!(
            links.get_link("prev").map(Link::href),
            Some(format!("/persons?page={}&size=1", u64::MAX - 1).as_str())
        );
    }
}
