//! Channel emitter trait for realtime delivery.

use async_trait::async_trait;

use crate::domain::entities::notification::RealtimeMessage;

/// Outbound push channel for live events
///
/// Delivery is best-effort: a user with no live connections simply receives
/// nothing, and callers never treat that as a failure.
#[async_trait]
pub trait ChannelEmitter: Send + Sync {
    /// Emit a message to every live connection of the given user
    ///
    /// # Returns
    /// Number of connections the message was delivered to. Zero when the
    /// user has no live connections.
    async fn emit_to_user(&self, user_id: i64, message: &RealtimeMessage) -> usize;
}
