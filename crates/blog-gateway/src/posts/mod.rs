//! # Posts Resource
//!
//! The `posts` collection: listed and fetched by the query root, created, patched and
//! deleted by the mutation root.
//!
//! ## Structure
//!
//! - [`entity`] - [`RestEntity`](rest_actor::RestEntity) implementation for [`Post`]
//! - [`error`] - [`PostError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,no_run
//! use blog_gateway::model::{PostCreate, PostUpdate};
//! use blog_gateway::posts;
//! use rest_actor::Backend;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = Backend::new("http://localhost:3300", None)?;
//!     let (actor, client) = posts::new(backend, 32);
//!     tokio::spawn(actor.run());
//!
//!     // POST /posts
//!     let post = client
//!         .create_post(PostCreate {
//!             title: "Hello".to_string(),
//!             content: "First!".to_string(),
//!             author: "u1".to_string(),
//!         })
//!         .await?;
//!
//!     // PATCH /posts/{id} with body {"id": ..., "title": "Hello again"}
//!     if let Some(id) = post.id {
//!         let update = PostUpdate {
//!             title: Some(Some("Hello again".to_string())),
//!             ..PostUpdate::new(id)
//!         };
//!         client.update_post(update).await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Partial updates**: only supplied fields are sent, see [`PostUpdate`](crate::model::PostUpdate)
//! - **Empty deletes**: a delete answered with no body resolves to `None`

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PostClient;
use crate::model::Post;
use rest_actor::{Backend, ResourceActor};

/// Creates a new Post actor and its client.
pub fn new(backend: Backend, capacity: usize) -> (ResourceActor<Post>, PostClient) {
    let (actor, generic_client) = ResourceActor::new(capacity, backend);
    (actor, PostClient::new(generic_client))
}
