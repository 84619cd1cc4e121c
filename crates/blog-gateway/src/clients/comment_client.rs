//! # Comment Client
//!
//! Comments are only reachable through their post, so the client exposes a single
//! nested listing.
use crate::comments::CommentError;
use crate::model::{Comment, Post};
use async_trait::async_trait;
use rest_actor::{EntityClient, FrameworkError, ParentRef, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Comment actor.
#[derive(Clone)]
pub struct CommentClient {
    inner: ResourceClient<Comment>,
}

impl CommentClient {
    pub fn new(inner: ResourceClient<Comment>) -> Self {
        Self { inner }
    }

    /// `GET /posts/{post_id}/comments`, in backend order.
    #[instrument(skip(self))]
    pub async fn comments_for_post(&self, post_id: &str) -> Result<Vec<Comment>, CommentError> {
        debug!("Sending request");
        self.inner
            .list_under(ParentRef::of::<Post>(&post_id.to_string()))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl EntityClient<Comment> for CommentClient {
    type Error = CommentError;

    fn inner(&self) -> &ResourceClient<Comment> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CommentError::from(e)
    }
}
