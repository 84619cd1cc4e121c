//! Error types for the Post resource.

use rest_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during post queries and mutations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PostError {
    /// The backend answered 404.
    #[error("Post not found: {0}")]
    NotFound(String),

    /// The backend answered with an error status or an unreadable body.
    #[error("Post backend error: {0}")]
    Backend(String),

    /// The backend (or the post actor) could not be reached.
    #[error("Post service unavailable: {0}")]
    Unavailable(String),

    /// A field was asked for without an argument it cannot do without.
    #[error("post requires an {0}")]
    MissingArgument(&'static str),
}

impl From<FrameworkError> for PostError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Status { status: 404, body } => PostError::NotFound(body),
            e @ (FrameworkError::Status { .. } | FrameworkError::Decode(_)) => {
                PostError::Backend(e.to_string())
            }
            e => PostError::Unavailable(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            PostError::MissingArgument("id").to_string(),
            "post requires an id"
        );

        let error = PostError::from(FrameworkError::Status {
            status: 500,
            body: "boom".to_string(),
        });
        assert_eq!(
            error.to_string(),
            "Post backend error: Backend responded with status 500: boom"
        );

        let error = PostError::from(FrameworkError::Transport("connection refused".to_string()));
        assert!(matches!(error, PostError::Unavailable(_)));
    }
}
