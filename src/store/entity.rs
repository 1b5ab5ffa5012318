//! # StoredEntity Trait
//!
//! The contract a resource must satisfy to live in a [`ResourceStore`](crate::store::ResourceStore).
//! Associated types pin down the id and the create/update payloads, so a store for `Person`
//! only ever accepts person payloads.
//!
//! The lifecycle hooks are async and default to doing nothing, except [`StoredEntity::on_update`]
//! which every entity has to implement.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

#[async_trait]
pub trait StoredEntity: Clone + Send + Sync + 'static {
    /// Identifier generated by the store from a running `u64` counter.
    /// `Ord` keeps listings in id order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u64>;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload required to update an existing instance.
    type Update: Send + Sync + Debug;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its new id and the payload. Called before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity is stored. Failing here discards it.
    async fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Called before the entity is removed. Failing here keeps it.
    async fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
