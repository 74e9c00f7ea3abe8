//! Domain-specific error types and error handling.
//!
//! The error taxonomy is deliberately small: every authentication failure
//! surfaces as one of three terminal, user-visible outcomes. Credential and
//! OTP failures are folded into generic messages that do not distinguish
//! "user not found" from "wrong password" or "wrong code".

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// A resource that must be unique already exists (duplicate registration)
    #[error("{message}")]
    Conflict { message: String },

    /// Identity could not be established (bad credentials, bad/expired token or OTP)
    #[error("{message}")]
    Unauthorized { message: String },

    /// The request is malformed (e.g. missing identifier for the OTP channel)
    #[error("{message}")]
    BadRequest { message: String },

    /// Unexpected lower-level failure (store unavailable, signing failure)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this is an unauthorized error
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DomainError::unauthorized("Invalid email or password");
        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_internal_error_prefix() {
        let err = DomainError::internal("connection refused");
        assert_eq!(err.to_string(), "Internal error: connection refused");
        assert!(!err.is_unauthorized());
    }
}
