//! RestEntity implementation for the [`Post`] domain type.
//!
//! Posts are the only writable collection: `createPost` sends a [`PostCreate`] and
//! `updatePost` a [`PostUpdate`].

use crate::model::{Post, PostCreate, PostUpdate};
use rest_actor::RestEntity;

impl RestEntity for Post {
    type Id = String;
    type Create = PostCreate;
    type Update = PostUpdate;
    const COLLECTION: &'static str = "posts";
}
