//! # Representation Models
//!
//! The four resource shapes the codec understands:
//!
//! | Model | Payload |
//! |---|---|
//! | [`RepresentationModel`] | links only |
//! | [`EntityModel<T>`] | one content value |
//! | [`CollectionModel<T>`] | an ordered list of elements |
//! | [`PagedModel<T>`] | a list of elements plus [`PageMetadata`] |
//!
//! All of them implement [`Representation`], which is the only view the encoders have of a
//! model's runtime shape.

use crate::model::link::{Link, Links};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The runtime shape of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelShape {
    Representation,
    Entity,
    Collection,
    Paged,
    /// Anything that is not a model at all (raw JSON, strings, ...).
    Plain,
}

impl fmt::Display for ModelShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Representation => "representation",
            Self::Entity => "entity",
            Self::Collection => "collection",
            Self::Paged => "paged",
            Self::Plain => "plain",
        };
        f.write_str(name)
    }
}

/// Fully-qualified and simple name of a Rust type, generic arguments removed.
///
/// `TypeIdentity::of::<EntityModel<Person>>()` yields
/// `hateoas_siren::model::representation::EntityModel` and `EntityModel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeIdentity {
    qualified: &'static str,
    simple: &'static str,
}

impl TypeIdentity {
    pub fn of<T: ?Sized>() -> Self {
        let full = std::any::type_name::<T>().trim_start_matches('&');
        let qualified = full.split('<').next().unwrap_or(full);
        let simple = qualified.split("::").last().unwrap_or(qualified);
        Self { qualified, simple }
    }

    pub fn qualified(&self) -> &'static str {
        self.qualified
    }

    pub fn simple(&self) -> &'static str {
        self.simple
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualified)
    }
}

/// Common view over all model shapes.
pub trait Representation {
    fn shape(&self) -> ModelShape;

    fn links(&self) -> &Links;

    /// The type that identifies this model for titles and class names: the content type
    /// for an [`EntityModel`], the model's own type otherwise.
    fn declared_type(&self) -> TypeIdentity;
}

/// A resource with links and no payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepresentationModel {
    links: Links,
}

impl RepresentationModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_links(links: impl Into<Links>) -> Self {
        Self {
            links: links.into(),
        }
    }

    pub fn add_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }
}

impl Representation for RepresentationModel {
    fn shape(&self) -> ModelShape {
        ModelShape::Representation
    }

    fn links(&self) -> &Links {
        &self.links
    }

    fn declared_type(&self) -> TypeIdentity {
        TypeIdentity::of::<Self>()
    }
}

/// A single resource wrapping one content value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityModel<T> {
    content: T,
    links: Links,
}

impl<T> EntityModel<T> {
    pub fn new(content: T) -> Self {
        Self {
            content,
            links: Links::new(),
        }
    }

    pub fn with_links(content: T, links: impl Into<Links>) -> Self {
        Self {
            content,
            links: links.into(),
        }
    }

    pub fn add_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    pub fn into_content(self) -> T {
        self.content
    }
}

impl<T> Representation for EntityModel<T> {
    fn shape(&self) -> ModelShape {
        ModelShape::Entity
    }

    fn links(&self) -> &Links {
        &self.links
    }

    fn declared_type(&self) -> TypeIdentity {
        TypeIdentity::of::<T>()
    }
}

/// An ordered list of elements. Only [`EntityModel`] elements can be encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionModel<T> {
    content: Vec<T>,
    links: Links,
}

impl<T> Default for CollectionModel<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            links: Links::new(),
        }
    }
}

impl<T> CollectionModel<T> {
    pub fn new(content: impl IntoIterator<Item = T>) -> Self {
        Self {
            content: content.into_iter().collect(),
            links: Links::new(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_links(content: impl IntoIterator<Item = T>, links: impl Into<Links>) -> Self {
        Self {
            content: content.into_iter().collect(),
            links: links.into(),
        }
    }

    pub fn add_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl<T> Representation for CollectionModel<T> {
    fn shape(&self) -> ModelShape {
        ModelShape::Collection
    }

    fn links(&self) -> &Links {
        &self.links
    }

    fn declared_type(&self) -> TypeIdentity {
        TypeIdentity::of::<Self>()
    }
}

/// Paging information of a [`PagedModel`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
}

impl PageMetadata {
    /// Computes the page count from the page size and the total element count.
    pub fn new(size: u64, number: u64, total_elements: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(size)
        };
        Self {
            size,
            total_elements,
            total_pages,
            number,
        }
    }

    pub fn with_total_pages(size: u64, number: u64, total_elements: u64, total_pages: u64) -> Self {
        Self {
            size,
            total_elements,
            total_pages,
            number,
        }
    }
}

/// One page of a larger collection.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedModel<T> {
    content: Vec<T>,
    links: Links,
    metadata: Option<PageMetadata>,
}

impl<T> PagedModel<T> {
    pub fn new(content: impl IntoIterator<Item = T>, metadata: Option<PageMetadata>) -> Self {
        Self {
            content: content.into_iter().collect(),
            links: Links::new(),
            metadata,
        }
    }

    pub fn with_links(
        content: impl IntoIterator<Item = T>,
        metadata: Option<PageMetadata>,
        links: impl Into<Links>,
    ) -> Self {
        Self {
            content: content.into_iter().collect(),
            links: links.into(),
            metadata,
        }
    }

    pub fn add_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn metadata(&self) -> Option<&PageMetadata> {
        self.metadata.as_ref()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl<T> Representation for PagedModel<T> {
    fn shape(&self) -> ModelShape {
        ModelShape::Paged
    }

    fn links(&self) -> &Links {
        &self.links
    }

    fn declared_type(&self) -> TypeIdentity {
        TypeIdentity::of::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct PersonModel;

    #[test]
    fn type_identity_strips_generics_and_paths() {
        let identity = TypeIdentity::of::<EntityModel<String>>();
        assert_eq!(
            identity.qualified(),
            "hateoas_siren::model::representation::EntityModel"
        );
        assert_eq!(identity.simple(), "EntityModel");

        assert_eq!(TypeIdentity::of::<i32>().simple(), "i32");
        assert_eq!(TypeIdentity::of::<String>().simple(), "String");
    }

    #[test]
    fn entity_declares_its_content_type() {
        let model = EntityModel::new(PersonModel);
        assert_eq!(model.shape(), ModelShape::Entity);
        assert_eq!(model.declared_type().simple(), "PersonModel");
    }

    #[test]
    fn other_shapes_declare_their_own_type() {
        let collection: CollectionModel<EntityModel<String>> = CollectionModel::empty();
        assert_eq!(collection.declared_type().simple(), "CollectionModel");
        assert_eq!(
            RepresentationModel::new().declared_type().simple(),
            "RepresentationModel"
        );
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(PageMetadata::new(10, 0, 21).total_pages, 3);
        assert_eq!(PageMetadata::new(10, 0, 20).total_pages, 2);
        assert_eq!(PageMetadata::new(0, 0, 5).total_pages, 0);
    }

    #[test]
    fn page_metadata_serializes_in_camel_case() {
        let json = serde_json::to_string(&PageMetadata::new(2, 1, 5)).expect("serializes");
        assert_eq!(
            json,
            r#"{"size":2,"totalElements":5,"totalPages":3,"number":1}"#
        );
    }
}
