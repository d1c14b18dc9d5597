//! Domain-specific error types and error handling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token-related errors
///
/// These cover verification failures and the rotation protocol's reuse
/// signal. Store outages never surface through this type; the revocation and
/// grace paths degrade softly instead (see `services::token`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,

    #[error("Revoked token reuse detected")]
    RevokedReuse,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("User not found")]
    UserNotFound,

    #[error("Store unavailable: {message}")]
    Store { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Unified error response structure for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let code = match err {
            DomainError::Token(TokenError::Expired) => "TOKEN_EXPIRED",
            DomainError::Token(TokenError::Invalid) => "TOKEN_INVALID",
            DomainError::Token(TokenError::RevokedReuse) => "REVOKED_TOKEN_REUSE",
            DomainError::Token(TokenError::GenerationFailed) => "TOKEN_GENERATION_FAILED",
            DomainError::UserNotFound => "USER_NOT_FOUND",
            DomainError::Store { .. } => "STORE_UNAVAILABLE",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
        };

        ErrorResponse::new(code, err.to_string())
    }
}
