//! Shared configuration and common types for the Ripple backend
//!
//! This crate holds configuration structures used across all layers of the
//! application. Everything here is loadable from environment variables and
//! carries sensible development defaults.

pub mod config;

// Re-export commonly used types for convenience
pub use config::{AuthConfig, CacheConfig, CookieConfig, DatabaseConfig, JwtConfig, ServerConfig};
