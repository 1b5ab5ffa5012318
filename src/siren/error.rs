//! # Codec Errors
//!
//! Every encode or decode call either completes or fails with one [`SirenError`]. Nothing is
//! retried; all failures are local to the call that produced them.

use crate::model::ModelShape;

#[derive(Debug, thiserror::Error)]
pub enum SirenError {
    /// A collection or page contained an element that is not an entity.
    #[error("Sub-entities must be of shape '{expected}' [but is of shape '{actual}']")]
    InvalidElementShape {
        expected: ModelShape,
        actual: ModelShape,
    },
    /// An input was present but unusable, e.g. a link without a relation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The document carries no `properties` to rebuild content from.
    #[error("Siren entity has no properties to read content from")]
    MissingContent,
    /// `properties` is neither a primitive nor a key/value map.
    #[error("Unsupported properties shape: {0}")]
    UnsupportedProperties(&'static str),
    /// The properties could not be mapped onto the target content type.
    #[error("Cannot map properties to content: {0}")]
    ContentMapping(#[source] serde_json::Error),
    /// A wire link or action whose first relation is missing or blank.
    #[error("Siren link '{0}' has no relation")]
    MissingRelation(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
