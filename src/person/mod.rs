//! # Person Domain
//!
//! The sample resource rendered through the Siren codec.
//!
//! - [`model`] - [`Person`], [`PersonInput`] and paging types
//! - [`entity`] - [`StoredEntity`](crate::store::StoredEntity) impl for [`Person`]
//! - [`service`] - [`PersonService`], CRUD and paging over the store
//! - [`assembler`] - [`PersonModelAssembler`], builds the resource graph
//! - [`error`] - [`PersonError`]
//! - [`new()`] - creates the store and its service

pub mod assembler;
pub mod entity;
pub mod error;
pub mod model;
pub mod service;

pub use assembler::PersonModelAssembler;
pub use error::PersonError;
pub use model::*;
pub use service::PersonService;

use crate::store::ResourceStore;

/// Creates the person store and a service talking to it. The store still has to be run.
pub fn new() -> (ResourceStore<Person>, PersonService) {
    let (store, client) = ResourceStore::new(32);
    (store, PersonService::new(client))
}
