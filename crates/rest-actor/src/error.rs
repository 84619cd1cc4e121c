//! # Framework Errors
//!
//! This module defines the common error types used throughout the framework.
//! Every failure a resource request can hit (the actor going away, the backend being
//! unreachable, a non-2xx status, an undecodable body) surfaces as one
//! [`FrameworkError`], so resource-specific error enums only need a single conversion.

/// Errors that can occur while a resource request travels client -> actor -> backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Invalid backend url: {0}")]
    InvalidUrl(String),
    #[error("Backend unreachable: {0}")]
    Transport(String),
    #[error("Backend responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Could not decode backend response: {0}")]
    Decode(String),
}

impl FrameworkError {
    /// The HTTP status the backend answered with, if the failure was a status error.
    pub fn status(&self) -> Option<u16> {
        match self {
            FrameworkError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for FrameworkError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            FrameworkError::Decode(error.to_string())
        } else {
            FrameworkError::Transport(error.to_string())
        }
    }
}

impl From<serde_json::Error> for FrameworkError {
    fn from(error: serde_json::Error) -> Self {
        FrameworkError::Decode(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_helpers() {
        let error = FrameworkError::Status {
            status: 404,
            body: "{}".to_string(),
        };
        assert_eq!(error.status(), Some(404));
        assert!(error.is_not_found());
        assert_eq!(
            error.to_string(),
            "Backend responded with status 404: {}"
        );

        assert_eq!(FrameworkError::ActorClosed.status(), None);
        assert!(!FrameworkError::Transport("refused".into()).is_not_found());
    }
}
