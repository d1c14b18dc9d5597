//! MySQL implementation of the NotificationStore trait.
//!
//! Rows are written with a generated public UUID alongside the
//! auto-increment primary key; external surfaces only ever see the UUID.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ripple_core::domain::entities::notification::{NewNotification, Notification};
use ripple_core::errors::DomainError;
use ripple_core::repositories::NotificationStore;

/// MySQL implementation of NotificationStore
#[derive(Clone)]
pub struct MySqlNotificationStore {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlNotificationStore {
    /// Create a new MySQL notification store
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationStore for MySqlNotificationStore {
    async fn persist(&self, notification: NewNotification) -> Result<Notification, DomainError> {
        let public_id = Uuid::new_v4();
        let created_at = Utc::now();

        let query = r#"
            INSERT INTO notifications (
                public_id, recipient_user_id, actor_user_id,
                action_type, target_type, target_id, is_read, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(public_id.to_string())
            .bind(notification.recipient_user_id)
            .bind(notification.actor_user_id)
            .bind(notification.action_type.as_str())
            .bind(notification.target_type.map(|t| t.as_str()))
            .bind(notification.target_id)
            .bind(false)
            .bind(created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("Failed to save notification: {}", e),
            })?;

        Ok(Notification {
            id: result.last_insert_id() as i64,
            public_id,
            recipient_user_id: notification.recipient_user_id,
            actor_user_id: notification.actor_user_id,
            action_type: notification.action_type,
            target_type: notification.target_type,
            target_id: notification.target_id,
            is_read: false,
            created_at,
        })
    }

    async fn mark_read(&self, recipient_id: i64, public_ids: &[Uuid]) -> Result<u64, DomainError> {
        if public_ids.is_empty() {
            return Ok(0);
        }

        let placeholders = vec!["?"; public_ids.len()].join(", ");
        let query = format!(
            r#"
            UPDATE notifications
            SET is_read = TRUE
            WHERE recipient_user_id = ? AND is_read = FALSE AND public_id IN ({})
            "#,
            placeholders
        );

        let mut q = sqlx::query(&query).bind(recipient_id);
        for public_id in public_ids {
            q = q.bind(public_id.to_string());
        }

        let result = q
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("Failed to mark notifications read: {}", e),
            })?;

        Ok(result.rows_affected())
    }

    async fn mark_all_read(&self, recipient_id: i64) -> Result<u64, DomainError> {
        let query = r#"
            UPDATE notifications
            SET is_read = TRUE
            WHERE recipient_user_id = ? AND is_read = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(recipient_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("Failed to mark all notifications read: {}", e),
            })?;

        Ok(result.rows_affected())
    }

    async fn unread_count(&self, recipient_id: i64) -> Result<u64, DomainError> {
        let query = r#"
            SELECT COUNT(*) AS unread
            FROM notifications
            WHERE recipient_user_id = ? AND is_read = FALSE
        "#;

        let row = sqlx::query(query)
            .bind(recipient_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("Failed to count unread notifications: {}", e),
            })?;

        let count: i64 = row.try_get("unread").map_err(|e| DomainError::Store {
            message: format!("Failed to get unread count: {}", e),
        })?;

        Ok(count as u64)
    }
}
