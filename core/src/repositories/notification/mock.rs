//! Mock implementation of NotificationStore for testing

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::notification::{NewNotification, Notification};
use crate::errors::DomainError;

use super::r#trait::NotificationStore;

/// Mock notification store for testing
#[derive(Clone, Default)]
pub struct MockNotificationStore {
    rows: Arc<RwLock<Vec<Notification>>>,
}

impl MockNotificationStore {
    /// Create a new empty mock store
    pub fn new() -> Self {
        Self::default()
    }

    /// All persisted rows, in insertion order
    pub async fn rows(&self) -> Vec<Notification> {
        self.rows.read().await.clone()
    }

    /// Number of persisted rows
    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl NotificationStore for MockNotificationStore {
    async fn persist(&self, notification: NewNotification) -> Result<Notification, DomainError> {
        let mut rows = self.rows.write().await;
        let record = Notification {
            id: rows.len() as i64 + 1,
            public_id: Uuid::new_v4(),
            recipient_user_id: notification.recipient_user_id,
            actor_user_id: notification.actor_user_id,
            action_type: notification.action_type,
            target_type: notification.target_type,
            target_id: notification.target_id,
            is_read: false,
            created_at: Utc::now(),
        };
        rows.push(record.clone());
        Ok(record)
    }

    async fn mark_read(&self, recipient_id: i64, public_ids: &[Uuid]) -> Result<u64, DomainError> {
        let mut rows = self.rows.write().await;
        let mut updated = 0;
        for row in rows.iter_mut() {
            if row.recipient_user_id == recipient_id
                && public_ids.contains(&row.public_id)
                && !row.is_read
            {
                row.is_read = true;
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn mark_all_read(&self, recipient_id: i64) -> Result<u64, DomainError> {
        let mut rows = self.rows.write().await;
        let mut updated = 0;
        for row in rows.iter_mut() {
            if row.recipient_user_id == recipient_id && !row.is_read {
                row.is_read = true;
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn unread_count(&self, recipient_id: i64) -> Result<u64, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|r| r.recipient_user_id == recipient_id && !r.is_read)
            .count() as u64)
    }
}
