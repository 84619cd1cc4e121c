//! # Comments Resource
//!
//! The `comments` collection, nested under posts. See [`CommentClient`] for the one
//! operation the gateway needs.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CommentClient;
use crate::model::Comment;
use rest_actor::{Backend, ResourceActor};

/// Creates a new Comment actor and its client.
pub fn new(backend: Backend, capacity: usize) -> (ResourceActor<Comment>, CommentClient) {
    let (actor, generic_client) = ResourceActor::new(capacity, backend);
    (actor, CommentClient::new(generic_client))
}
