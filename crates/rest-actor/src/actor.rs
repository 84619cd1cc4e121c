//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the server side of the framework. It owns a
//! [`Backend`] and the receiving end of the request channel, and turns every typed
//! [`ResourceRequest`] into exactly one HTTP call.

use crate::backend::Backend;
use crate::client::ResourceClient;
use crate::entity::RestEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// The generic actor that serves one REST collection.
///
/// # Architecture Note
/// The actor holds no entity state: the backend is the only source of truth. What it owns
/// is the receiver and the backend handle, so clients never touch HTTP directly and tests
/// can swap the actor for a mock by handing out a different sender.
///
/// **Concurrency Model**:
/// The receive loop is sequential, but each request is spawned onto its own task. Two
/// resolvers asking for a post's author and its comments therefore hit the backend
/// concurrently instead of queueing behind each other. Nothing is shared between those
/// tasks except the cloned `Backend`.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Shutdown**: Drop every client clone; the loop drains in-flight requests and exits.
///
/// ```rust,no_run
/// use rest_actor::{Backend, ResourceActor, RestEntity};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Deserialize)]
/// struct Tag { id: String, label: String }
///
/// #[derive(Debug, Serialize)]
/// struct TagCreate { label: String }
///
/// impl RestEntity for Tag {
///     type Id = String;
///     type Create = TagCreate;
///     type Update = TagCreate;
///     const COLLECTION: &'static str = "tags";
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let backend = Backend::new("http://localhost:3300", None).unwrap();
///     let (actor, client) = ResourceActor::<Tag>::new(32, backend);
///     tokio::spawn(actor.run());
///
///     let tag = client.create(TagCreate { label: "rust".into() }).await.unwrap();
///     let tags = client.list().await.unwrap();
///     assert!(tags.iter().any(|t| t.id == tag.id));
/// }
/// ```
pub struct ResourceActor<T: RestEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    backend: Backend,
}

impl<T: RestEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    ///
    /// # Panics
    ///
    /// Panics if `buffer_size` is zero, like [`mpsc::channel`].
    /// * `backend` - The REST backend this actor forwards requests to.
    pub fn new(buffer_size: usize, backend: Backend) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, backend };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// Requests still in flight when the channel closes are awaited before returning.
    pub async fn run(mut self) {
        let entity_type = T::COLLECTION;
        info!(entity_type, base_url = %self.backend.base_url(), "Actor started");

        let mut in_flight = JoinSet::new();
        while let Some(request) = self.receiver.recv().await {
            debug!(entity_type, verb = request.verb(), "Dispatch");
            in_flight.spawn(dispatch(self.backend.clone(), request));

            while let Some(finished) = in_flight.try_join_next() {
                if let Err(e) = finished {
                    warn!(entity_type, error = %e, "Request task failed");
                }
            }
        }

        while let Some(finished) = in_flight.join_next().await {
            if let Err(e) = finished {
                warn!(entity_type, error = %e, "Request task failed");
            }
        }
        info!(entity_type, "Shutdown");
    }
}

/// Performs one request against the backend and answers on its response channel.
async fn dispatch<T: RestEntity>(backend: Backend, request: ResourceRequest<T>) {
    let entity_type = T::COLLECTION;
    match request {
        ResourceRequest::List { parent, respond_to } => {
            let result: Result<Vec<T>, FrameworkError> = match &parent {
                Some(parent) => {
                    backend
                        .get(&[parent.collection, parent.id.as_str(), entity_type])
                        .await
                }
                None => backend.get(&[entity_type]).await,
            };
            if let Ok(items) = &result {
                info!(entity_type, parent = ?parent, count = items.len(), "Listed");
            }
            reply(respond_to, result, "List");
        }
        ResourceRequest::Get { id, respond_to } => {
            let id = id.to_string();
            let result: Result<Option<T>, FrameworkError> =
                backend.get(&[entity_type, id.as_str()]).await;
            if let Ok(found) = &result {
                info!(entity_type, %id, found = found.is_some(), "Fetched");
            }
            reply(respond_to, result, "Get");
        }
        ResourceRequest::Create { params, respond_to } => {
            debug!(entity_type, ?params, "Create");
            let result = backend.post(&[entity_type], &params).await;
            if result.is_ok() {
                info!(entity_type, "Created");
            }
            reply(respond_to, result, "Create");
        }
        ResourceRequest::Update {
            id,
            update,
            respond_to,
        } => {
            debug!(entity_type, %id, ?update, "Update");
            let id = id.to_string();
            let result = backend.patch(&[entity_type, id.as_str()], &update).await;
            if result.is_ok() {
                info!(entity_type, %id, "Updated");
            }
            reply(respond_to, result, "Update");
        }
        ResourceRequest::Delete { id, respond_to } => {
            let id = id.to_string();
            let result = backend.delete(&[entity_type, id.as_str()]).await;
            if let Ok(body) = &result {
                info!(entity_type, %id, empty = body.is_none(), "Deleted");
            }
            reply(respond_to, result, "Delete");
        }
    }
}

fn reply<R>(respond_to: Response<R>, result: Result<R, FrameworkError>, verb: &'static str) {
    if let Err(e) = &result {
        warn!(verb, error = %e, "Request failed");
    }
    if respond_to.send(result).is_err() {
        debug!(verb, "Caller went away before the response");
    }
}
