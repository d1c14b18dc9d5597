//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing, token lifetimes, grace window, cookie settings
//! - `cache` - Redis connection configuration
//! - `database` - Database connection and pool configuration
//! - `server` - HTTP server configuration

pub mod auth;
pub mod cache;
pub mod database;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, CookieConfig, JwtConfig};
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Redis cache configuration
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            cache: CacheConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}
