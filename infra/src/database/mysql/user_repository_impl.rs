//! MySQL implementation of the UserLookup trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use ripple_core::domain::entities::UserProfile;
use ripple_core::errors::DomainError;
use ripple_core::repositories::UserLookup;

/// MySQL implementation of UserLookup
#[derive(Clone)]
pub struct MySqlUserLookup {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserLookup {
    /// Create a new MySQL user lookup
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to UserProfile entity
    fn row_to_profile(row: &sqlx::mysql::MySqlRow) -> Result<UserProfile, DomainError> {
        Ok(UserProfile {
            id: row.try_get("id").map_err(|e| DomainError::Store {
                message: format!("Failed to get id: {}", e),
            })?,
            username: row.try_get("username").map_err(|e| DomainError::Store {
                message: format!("Failed to get username: {}", e),
            })?,
            display_name: row
                .try_get("display_name")
                .map_err(|e| DomainError::Store {
                    message: format!("Failed to get display_name: {}", e),
                })?,
            avatar_url: row.try_get("avatar_url").map_err(|e| DomainError::Store {
                message: format!("Failed to get avatar_url: {}", e),
            })?,
        })
    }
}

#[async_trait]
impl UserLookup for MySqlUserLookup {
    async fn find_profile(&self, user_id: i64) -> Result<Option<UserProfile>, DomainError> {
        let query = r#"
            SELECT id, username, display_name, avatar_url
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("Failed to find user: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_profile(&row)?)),
            None => Ok(None),
        }
    }
}
