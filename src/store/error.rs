//! # Store Errors
//!
//! Failures of the store actor itself, as opposed to the entity errors raised by the hooks
//! (which are boxed into [`StoreError::EntityError`]).

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
