//! # In-Memory Resource Store
//!
//! A generic CRUD store built on the actor model: each [`ResourceStore`] runs in its own
//! Tokio task and owns its entities exclusively, while any number of [`StoreClient`] clones
//! send it requests over an mpsc channel and receive answers over oneshot channels.
//!
//! 1. **Entity layer** ([`StoredEntity`]) - payload types and lifecycle hooks
//! 2. **Runtime layer** ([`ResourceStore`]) - sequential request processing
//! 3. **Interface layer** ([`StoreClient`]) - typed async calls
//!
//! The store shuts down once every client has been dropped.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;

pub use actor::ResourceStore;
pub use client::StoreClient;
pub use entity::StoredEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
