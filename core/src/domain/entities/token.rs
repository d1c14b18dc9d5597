//! Token entities for JWT-based session management.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of token, embedded in the `type` claim.
///
/// Access tokens are short-lived and authorize requests; refresh tokens are
/// long-lived and are only good for rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenType::Access => write!(f, "access"),
            TokenType::Refresh => write!(f, "refresh"),
        }
    }
}

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Token type (access or refresh)
    #[serde(rename = "type")]
    pub token_type: TokenType,

    /// JWT ID, unique per issued token; the revocation and grace cache key
    pub jti: String,

    /// Issued at timestamp (unix seconds)
    pub iat: i64,

    /// Expiration timestamp (unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a token of the given type
    ///
    /// # Arguments
    ///
    /// * `subject` - The user's ID
    /// * `token_type` - Access or refresh
    /// * `lifetime` - Token lifetime from now
    pub fn new(subject: i64, token_type: TokenType, lifetime: Duration) -> Self {
        let now = Utc::now();
        let expiry = now + lifetime;

        Self {
            sub: subject.to_string(),
            token_type,
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Gets the subject as a user ID
    pub fn subject(&self) -> Result<i64, std::num::ParseIntError> {
        self.sub.parse()
    }

    /// Remaining lifetime in whole seconds; zero once expired
    pub fn remaining_seconds(&self) -> u64 {
        let remaining = self.exp - Utc::now().timestamp();
        remaining.max(0) as u64
    }
}

/// Freshly minted token bundle returned to the client
///
/// This is also the value stored in the grace cache: every caller that
/// presents the superseded refresh token within the grace window receives
/// this exact bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotatedTokens {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Double-submit anti-CSRF value bound to the access token
    pub csrf_access_token: String,

    /// Double-submit anti-CSRF value bound to the refresh token
    pub csrf_refresh_token: String,

    /// Access token expiry (unix seconds)
    pub access_token_exp: i64,

    /// Refresh token expiry (unix seconds)
    pub refresh_token_exp: i64,
}
