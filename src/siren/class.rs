//! # Entity Class Strategies
//!
//! Siren's `class` labels an entity's kind for client-side dispatch. The encoders ask an
//! injected [`EntityClassProvider`] for the labels and never derive them on their own.

use crate::model::{ModelShape, Representation, TypeIdentity};

/// Derives the `class` labels of an encoded model.
pub trait EntityClassProvider: Send + Sync {
    fn classes(&self, model: &dyn Representation) -> Vec<String>;
}

/// Derives the class from the model's runtime shape:
///
/// * paged → `page`
/// * collection → `collection`
/// * entity → the content type's simple name, uncapitalized, with a trailing `Model` removed
/// * anything else → `representation`
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleEntityClassProvider;

impl EntityClassProvider for SimpleEntityClassProvider {
    fn classes(&self, model: &dyn Representation) -> Vec<String> {
        let class = match model.shape() {
            ModelShape::Paged => "page".to_string(),
            ModelShape::Collection => "collection".to_string(),
            ModelShape::Entity => {
                let simple = model.declared_type().simple();
                let name = match simple.strip_suffix("Model") {
                    Some(stripped) if !stripped.is_empty() => stripped,
                    _ => simple,
                };
                uncapitalize(name)
            }
            ModelShape::Representation | ModelShape::Plain => "representation".to_string(),
        };
        vec![class]
    }
}

/// Names relations for item and collection resources of a type.
pub trait LinkRelationProvider: Send + Sync {
    fn item_resource_rel_for(&self, identity: TypeIdentity) -> String;

    fn collection_resource_rel_for(&self, identity: TypeIdentity) -> String;
}

/// `Person` → `person` for items and `personList` for collections.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLinkRelationProvider;

impl LinkRelationProvider for DefaultLinkRelationProvider {
    fn item_resource_rel_for(&self, identity: TypeIdentity) -> String {
        uncapitalize(identity.simple())
    }

    fn collection_resource_rel_for(&self, identity: TypeIdentity) -> String {
        format!("{}List", uncapitalize(identity.simple()))
    }
}

/// Uses the item relation of the model's declared type as its only class.
pub struct LinkRelationProviderBackedEntityClassProvider<P> {
    provider: P,
}

impl<P: LinkRelationProvider> LinkRelationProviderBackedEntityClassProvider<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: LinkRelationProvider> EntityClassProvider
    for LinkRelationProviderBackedEntityClassProvider<P>
{
    fn classes(&self, model: &dyn Representation) -> Vec<String> {
        vec![self.provider.item_resource_rel_for(model.declared_type())]
    }
}

fn uncapitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
