//! Requests sent from a [`StoreClient`](crate::store::StoreClient) to its
//! [`ResourceStore`](crate::store::ResourceStore).

use crate::store::entity::StoredEntity;
use crate::store::error::StoreError;
use tokio::sync::oneshot;

/// One-shot channel the store answers on.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// CRUD operations plus a listing of all entities in id order.
#[derive(Debug)]
pub enum StoreRequest<T: StoredEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
