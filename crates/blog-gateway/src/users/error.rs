//! Error types for user lookups.

use rest_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur while resolving a user.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The backend answered 404.
    #[error("User not found: {0}")]
    NotFound(String),

    /// The backend answered with an error status or an unreadable body.
    #[error("User backend error: {0}")]
    Backend(String),

    /// The backend (or the user actor) could not be reached.
    #[error("User service unavailable: {0}")]
    Unavailable(String),

    /// The parent object carried no user id to look up.
    #[error("Cannot resolve user: parent has no `{0}`")]
    MissingField(&'static str),
}

impl From<FrameworkError> for UserError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Status { status: 404, body } => UserError::NotFound(body),
            e @ (FrameworkError::Status { .. } | FrameworkError::Decode(_)) => {
                UserError::Backend(e.to_string())
            }
            e => UserError::Unavailable(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_errors_map_by_kind() {
        let not_found = FrameworkError::Status {
            status: 404,
            body: "{}".to_string(),
        };
        assert_eq!(UserError::from(not_found), UserError::NotFound("{}".to_string()));

        let server = FrameworkError::Status {
            status: 502,
            body: String::new(),
        };
        assert!(matches!(UserError::from(server), UserError::Backend(_)));

        let closed = FrameworkError::ActorClosed;
        assert!(matches!(UserError::from(closed), UserError::Unavailable(_)));
    }
}
