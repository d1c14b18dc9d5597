//! Authentication and token lifecycle configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,

    /// Rotation grace window in seconds
    ///
    /// After a refresh token is rotated, any caller presenting the superseded
    /// token within this window receives the already-minted replacement pair
    /// instead of a reuse rejection.
    #[serde(default = "default_grace_window")]
    pub grace_window_seconds: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            access_token_expiry: 900,      // 15 minutes
            refresh_token_expiry: 604800,  // 7 days
            grace_window_seconds: default_grace_window(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86400;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }
}

/// Auth cookie configuration
///
/// Access and refresh tokens travel in HTTP-only cookies; the matching CSRF
/// values are returned in response bodies for the double-submit check.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Name of the access token cookie
    pub access_cookie_name: String,

    /// Name of the refresh token cookie
    pub refresh_cookie_name: String,

    /// Cookie secure flag (HTTPS only)
    pub secure: bool,

    /// Cookie SameSite attribute
    pub same_site: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            access_cookie_name: String::from("access_token_cookie"),
            refresh_cookie_name: String::from("refresh_token_cookie"),
            secure: false, // Set to true in production
            same_site: String::from("Lax"),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Cookie configuration
    #[serde(default)]
    pub cookies: CookieConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "development-secret-please-change-in-production".to_string());
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "900".to_string())
            .parse()
            .unwrap_or(900);
        let refresh_token_expiry = std::env::var("JWT_REFRESH_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "604800".to_string())
            .parse()
            .unwrap_or(604800);
        let grace_window_seconds = std::env::var("JWT_ROTATION_GRACE_WINDOW")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or_else(|_| default_grace_window());

        Self {
            jwt: JwtConfig {
                secret: jwt_secret,
                access_token_expiry,
                refresh_token_expiry,
                grace_window_seconds,
            },
            cookies: CookieConfig::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            cookies: CookieConfig::default(),
        }
    }
}

fn default_grace_window() -> u64 {
    10
}
