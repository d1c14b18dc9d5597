//! Token service configuration

use ripple_shared::config::auth::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HS256 signing secret, also keys the CSRF HMAC
    pub secret: String,

    /// Access token lifetime in seconds
    pub access_expiry_seconds: i64,

    /// Refresh token lifetime in seconds
    pub refresh_expiry_seconds: i64,

    /// Rotation grace window in seconds
    pub grace_window_seconds: u64,
}

impl TokenServiceConfig {
    /// Build from the application's JWT configuration
    pub fn from_jwt(jwt: &JwtConfig) -> Self {
        Self {
            secret: jwt.secret.clone(),
            access_expiry_seconds: jwt.access_token_expiry,
            refresh_expiry_seconds: jwt.refresh_token_expiry,
            grace_window_seconds: jwt.grace_window_seconds,
        }
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from_jwt(&JwtConfig::default())
    }
}
