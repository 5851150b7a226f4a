//! Contract error types for room service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;

/// Room service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    /// Malformed or out-of-range caller-supplied value
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Validation error message
        message: String,
    },
    /// No record matches a validated key
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (room, room_status)
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// Storage failure
    #[error("Internal error: {message}")]
    Internal {
        /// Error details, not exposed over HTTP
        message: String,
    },
}

impl RoomError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn room_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            resource: "room".to_string(),
            id: id.to_string(),
        }
    }

    pub fn status_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            resource: "room_status".to_string(),
            id: id.to_string(),
        }
    }

    /// Collapse a repository failure, logging the full error chain
    pub fn internal(error: anyhow::Error) -> Self {
        tracing::error!(error = ?error, "room storage failure");
        Self::Internal {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            RoomError::room_not_found(42).to_string(),
            "room not found: 42"
        );
        assert_eq!(
            RoomError::invalid_input("id must be positive").to_string(),
            "Invalid input: id must be positive"
        );
    }
}
