//! # Infrastructure Layer
//!
//! Concrete implementations of the core collaborator traits:
//! - **Cache**: Redis-backed expiring store for revocation and grace entries
//! - **Database**: MySQL repositories for users and notifications, via SQLx

use ripple_core::errors::DomainError;

pub mod cache;
pub mod database;

pub use cache::RedisClient;
pub use database::{MySqlNotificationStore, MySqlUserLookup};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Store {
            message: err.to_string(),
        }
    }
}
