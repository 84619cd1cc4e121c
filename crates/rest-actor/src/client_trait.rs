//! # EntityClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `get`, `list`
//! and `delete` methods built on top of a generic `ResourceClient`.
use crate::{FrameworkError, ResourceClient, RestEntity};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard REST operations.
///
/// A resource client only has to say where its `ResourceClient` lives and how framework
/// errors map onto its own error type.
///
/// # Example
///
/// ```rust
/// use rest_actor::{EntityClient, FrameworkError, ResourceClient, RestEntity};
/// use async_trait::async_trait;
/// use serde::Deserialize;
///
/// #[derive(Clone, Debug, Deserialize)]
/// struct Tag { id: String }
///
/// impl RestEntity for Tag {
///     type Id = String;
///     type Create = ();
///     type Update = ();
///     const COLLECTION: &'static str = "tags";
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("tag error: {0}")]
/// struct TagError(String);
///
/// struct TagClient {
///     inner: ResourceClient<Tag>,
/// }
///
/// #[async_trait]
/// impl EntityClient<Tag> for TagClient {
///     type Error = TagError;
///
///     fn inner(&self) -> &ResourceClient<Tag> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         TagError(e.to_string())
///     }
/// }
///
/// async fn usage(client: TagClient) {
///     // get(), list() and delete() are provided automatically!
///     let _ = client.get("rust".to_string()).await;
///     let _ = client.list().await;
///     let _ = client.delete("rust".to_string()).await;
/// }
/// ```
#[async_trait]
pub trait EntityClient<T: RestEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID. `None` when the backend answered `null`.
    #[tracing::instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch the whole collection.
    #[tracing::instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID, returning whatever the backend echoed back.
    #[tracing::instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn delete(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
