//! Notification store trait defining the persistence interface.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::notification::{NewNotification, Notification};
use crate::errors::DomainError;

/// Repository trait for Notification persistence
///
/// The persisted row is the durable record of truth; the realtime push layered
/// on top is best-effort and purely additive.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Persist a new notification
    ///
    /// # Arguments
    /// * `notification` - The notification to persist
    ///
    /// # Returns
    /// * `Ok(Notification)` - The saved record with store-assigned fields
    /// * `Err(DomainError)` - Persistence failed
    async fn persist(&self, notification: NewNotification) -> Result<Notification, DomainError>;

    /// Mark specific notifications as read for a recipient
    ///
    /// # Arguments
    /// * `recipient_id` - The recipient; rows belonging to other users are untouched
    /// * `public_ids` - Public IDs of the notifications to mark
    ///
    /// # Returns
    /// * `Ok(count)` - Number of rows updated
    async fn mark_read(&self, recipient_id: i64, public_ids: &[Uuid]) -> Result<u64, DomainError>;

    /// Mark all of a recipient's notifications as read
    async fn mark_all_read(&self, recipient_id: i64) -> Result<u64, DomainError>;

    /// Count a recipient's unread notifications
    async fn unread_count(&self, recipient_id: i64) -> Result<u64, DomainError>;
}
