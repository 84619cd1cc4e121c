//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::RestEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Scopes a `List` request under a parent resource, e.g. `/posts/1/comments`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRef {
    pub collection: &'static str,
    pub id: String,
}

impl ParentRef {
    /// Builds a parent scope from a parent entity type and one of its ids.
    pub fn of<P: RestEntity>(id: &P::Id) -> Self {
        Self {
            collection: P::COLLECTION,
            id: id.to_string(),
        }
    }
}

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// The variants map directly onto the REST verbs the backend exposes for a collection.
/// Each variant is answered by exactly one HTTP call; nothing is cached between requests.
///
/// - **List**: `GET` the collection, optionally scoped under a [`ParentRef`].
/// - **Get**: `GET` one resource by id; a `null` body yields `None`.
/// - **Create**: `POST` a [`RestEntity::Create`] payload.
/// - **Update**: `PATCH` a [`RestEntity::Update`] payload.
/// - **Delete**: `DELETE` one resource; an empty response body yields `None`.
#[derive(Debug)]
pub enum ResourceRequest<T: RestEntity> {
    List {
        parent: Option<ParentRef>,
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
}

impl<T: RestEntity> ResourceRequest<T> {
    /// Short verb name used in logs.
    pub fn verb(&self) -> &'static str {
        match self {
            ResourceRequest::List { .. } => "List",
            ResourceRequest::Get { .. } => "Get",
            ResourceRequest::Create { .. } => "Create",
            ResourceRequest::Update { .. } => "Update",
            ResourceRequest::Delete { .. } => "Delete",
        }
    }
}
