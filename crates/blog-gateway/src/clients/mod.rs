//! Type-safe wrappers around [`ResourceClient`](rest_actor::ResourceClient), one per
//! collection.

pub mod comment_client;
pub mod post_client;
pub mod user_client;

pub use comment_client::*;
pub use post_client::*;
pub use user_client::*;
