//! Error types for the person domain.

use crate::siren::SirenError;
use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersonError {
    #[error("Person validation error: {0}")]
    ValidationError(String),

    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),

    #[error("Rendering failed: {0}")]
    Rendering(#[from] SirenError),

    #[error("Shutdown failed: {0}")]
    Shutdown(String),
}

impl From<StoreError> for PersonError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::EntityError(inner) => match inner.downcast::<PersonError>() {
                Ok(person_error) => *person_error,
                Err(other) => PersonError::StoreCommunicationError(other.to_string()),
            },
            other => PersonError::StoreCommunicationError(other.to_string()),
        }
    }
}
