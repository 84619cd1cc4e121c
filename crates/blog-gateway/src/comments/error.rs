//! Error types for comment listings.

use rest_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur while listing a post's comments.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommentError {
    /// The backend answered 404.
    #[error("Comments not found: {0}")]
    NotFound(String),

    /// The backend answered with an error status or an unreadable body.
    #[error("Comment backend error: {0}")]
    Backend(String),

    /// The backend (or the comment actor) could not be reached.
    #[error("Comment service unavailable: {0}")]
    Unavailable(String),

    /// The parent post carried no id to list comments under.
    #[error("Cannot list comments: post has no `{0}`")]
    MissingField(&'static str),
}

impl From<FrameworkError> for CommentError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Status { status: 404, body } => CommentError::NotFound(body),
            e @ (FrameworkError::Status { .. } | FrameworkError::Decode(_)) => {
                CommentError::Backend(e.to_string())
            }
            e => CommentError::Unavailable(e.to_string()),
        }
    }
}
