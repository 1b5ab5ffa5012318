//! # Resource Store Actor
//!
//! The server half of the store. A `ResourceStore<T>` owns its entities and processes
//! [`StoreRequest`]s one at a time in its own Tokio task, so the map needs no locking.
//!
//! ```rust
//! use hateoas_siren::person::{Person, PersonInput};
//! use hateoas_siren::store::ResourceStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (store, client) = ResourceStore::<Person>::new(8);
//!     let handle = tokio::spawn(store.run());
//!
//!     let peter = client.create(PersonInput::new("Peter", 42)).await.unwrap();
//!     assert_eq!(client.list().await.unwrap(), vec![peter]);
//!
//!     drop(client);
//!     handle.await.unwrap();
//! }
//! ```

use crate::store::client::StoreClient;
use crate::store::entity::StoredEntity;
use crate::store::error::StoreError;
use crate::store::message::StoreRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct ResourceStore<T: StoredEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    entities: BTreeMap<T::Id, T>,
    next_id: u64,
}

impl<T: StoredEntity> ResourceStore<T> {
    /// Creates the store and a client for it. `buffer_size` bounds the request channel;
    /// clients wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            entities: BTreeMap::new(),
            next_id: 1,
        };
        (store, StoreClient::new(sender))
    }

    /// Processes requests until every client is dropped.
    pub async fn run(mut self) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(request) = self.receiver.recv().await {
            match request {
                StoreRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    let result = match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => match item.on_create().await {
                            Ok(()) => {
                                self.entities.insert(id.clone(), item.clone());
                                info!(entity_type, %id, size = self.entities.len(), "Created");
                                Ok(item)
                            }
                            Err(e) => {
                                warn!(entity_type, error = %e, "on_create failed");
                                Err(StoreError::EntityError(Box::new(e)))
                            }
                        },
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            Err(StoreError::EntityError(Box::new(e)))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.entities.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::List { respond_to } => {
                    debug!(entity_type, size = self.entities.len(), "List");
                    let _ = respond_to.send(Ok(self.entities.values().cloned().collect()));
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.entities.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };

                    // Hooks mutate a copy so a failed update leaves the stored entity untouched.
                    let mut updated = item.clone();
                    match updated.on_update(update).await {
                        Ok(()) => {
                            *item = updated.clone();
                            info!(entity_type, %id, "Updated");
                            let _ = respond_to.send(Ok(updated));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.entities.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };

                    if let Err(e) = item.on_delete().await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.entities.remove(&id);
                    info!(entity_type, %id, size = self.entities.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.entities.len(), "Shutdown");
    }
}
