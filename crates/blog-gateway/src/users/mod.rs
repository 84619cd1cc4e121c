//! # Users Resource
//!
//! The `users` collection, read one user at a time to resolve `author` fields.
//!
//! ## Structure
//!
//! - [`entity`] - [`RestEntity`](rest_actor::RestEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,no_run
//! use blog_gateway::users;
//! use rest_actor::Backend;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = Backend::new("http://localhost:3300", None)?;
//!     let (actor, client) = users::new(backend, 32);
//!     tokio::spawn(actor.run());
//!
//!     // GET /users/u1
//!     let user = client.fetch_user("u1").await?;
//!     println!("{:?}", user.and_then(|u| u.name));
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use rest_actor::{Backend, ResourceActor};

/// Creates a new User actor and its client.
pub fn new(backend: Backend, capacity: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(capacity, backend);
    (actor, UserClient::new(generic_client))
}
