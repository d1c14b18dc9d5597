//! Notification persistence and live fan-out

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::entities::notification::{
    ActionType, NewNotification, Notification, NotificationPayload, RealtimeMessage, TargetType,
};
use crate::errors::DomainResult;
use crate::repositories::{ChannelEmitter, NotificationStore, UserLookup};

/// A notification-worthy action, as reported by the interaction layer
#[derive(Debug, Clone)]
pub struct NotifyRequest {
    /// The user who should be notified
    pub recipient_id: i64,

    /// The user who performed the action
    pub actor_id: i64,

    /// The action performed
    pub action_type: ActionType,

    /// Kind of object the action targeted
    pub target_type: Option<TargetType>,

    /// Internal ID of the target
    pub target_id: Option<i64>,

    /// Public ID of the target, for the event payload
    pub target_public_id: Option<Uuid>,

    /// Full content of the target, truncated for the event preview
    pub target_preview: Option<String>,
}

/// Notification dispatcher
///
/// Persists notifications and pushes them to the recipient's live
/// connections. The persisted row is the source of truth; the push is
/// best-effort on top of it and never rolls the row back.
pub struct NotificationService<N, U, E> {
    store: N,
    users: U,
    emitter: E,
}

impl<N, U, E> NotificationService<N, U, E>
where
    N: NotificationStore,
    U: UserLookup,
    E: ChannelEmitter,
{
    pub fn new(store: N, users: U, emitter: E) -> Self {
        Self {
            store,
            users,
            emitter,
        }
    }

    /// Record an action and notify the recipient
    ///
    /// Users acting on their own content are not notified: no row is
    /// written and nothing is emitted.
    ///
    /// # Returns
    /// * `Ok(Some(notification))` - The persisted record
    /// * `Ok(None)` - Self-action, suppressed
    /// * `Err(DomainError)` - Persistence failed; nothing was emitted
    pub async fn notify(&self, request: NotifyRequest) -> DomainResult<Option<Notification>> {
        if request.recipient_id == request.actor_id {
            debug!(user_id = request.actor_id, "self-action, notification suppressed");
            return Ok(None);
        }

        let notification = self
            .store
            .persist(NewNotification {
                recipient_user_id: request.recipient_id,
                actor_user_id: Some(request.actor_id),
                action_type: request.action_type,
                target_type: request.target_type,
                target_id: request.target_id,
            })
            .await?;

        let actor = match self.users.find_profile(request.actor_id).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(actor_id = request.actor_id, error = %e, "actor lookup failed, emitting placeholder");
                None
            }
        };

        let payload = NotificationPayload::from_parts(
            &notification,
            actor.as_ref(),
            request.target_public_id,
            request.target_preview.as_deref(),
        );
        let message = RealtimeMessage::new_notification(payload);

        let delivered = self
            .emitter
            .emit_to_user(request.recipient_id, &message)
            .await;
        debug!(
            recipient_id = request.recipient_id,
            delivered, "notification dispatched"
        );

        Ok(Some(notification))
    }

    /// Mark specific notifications as read for their recipient
    pub async fn mark_read(&self, recipient_id: i64, public_ids: &[Uuid]) -> DomainResult<u64> {
        self.store.mark_read(recipient_id, public_ids).await
    }

    /// Mark all of a recipient's notifications as read
    pub async fn mark_all_read(&self, recipient_id: i64) -> DomainResult<u64> {
        self.store.mark_all_read(recipient_id).await
    }

    /// Count a recipient's unread notifications
    pub async fn unread_count(&self, recipient_id: i64) -> DomainResult<u64> {
        self.store.unread_count(recipient_id).await
    }
}
