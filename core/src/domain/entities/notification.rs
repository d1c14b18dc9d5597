//! Notification entities and the realtime event payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserProfile;

/// Maximum length of the content preview embedded in an event payload
const PREVIEW_MAX_CHARS: usize = 75;

/// Action that generated a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Like,
    Follow,
    Mention,
}

impl ActionType {
    /// String form used in storage and payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Like => "like",
            ActionType::Follow => "follow",
            ActionType::Mention => "mention",
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of object an action was performed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Post,
    User,
}

impl TargetType {
    /// String form used in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Post => "post",
            TargetType::User => "user",
        }
    }
}

/// Notification to be persisted
///
/// The store assigns `id`, `public_id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    /// The user who should receive the notification
    pub recipient_user_id: i64,

    /// The user who triggered it
    pub actor_user_id: Option<i64>,

    /// The action that generated it
    pub action_type: ActionType,

    /// The kind of object the action was performed on
    pub target_type: Option<TargetType>,

    /// Internal ID of the target object
    pub target_id: Option<i64>,
}

/// Persisted notification record
///
/// Created by a triggering action, mutated only by mark-read operations,
/// removed only when the recipient account is deleted (database cascade).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Internal database ID
    pub id: i64,

    /// Opaque external identifier
    pub public_id: Uuid,

    /// The user who should receive the notification
    pub recipient_user_id: i64,

    /// The user who triggered it; None once the actor deletes their account
    pub actor_user_id: Option<i64>,

    /// The action that generated it
    pub action_type: ActionType,

    /// The kind of object the action was performed on
    pub target_type: Option<TargetType>,

    /// Internal ID of the target object
    pub target_id: Option<i64>,

    /// Whether the recipient has read it
    pub is_read: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// `fromUser` section of the event payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventActor {
    pub username: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub is_deleted: bool,
}

impl EventActor {
    /// Build from a live actor profile
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            username: profile.username.clone(),
            display_name: profile.display_name.clone(),
            avatar_url: profile.avatar_url.clone(),
            is_deleted: false,
        }
    }

    /// Placeholder for actors whose account no longer exists
    pub fn ghost() -> Self {
        Self {
            username: "deleted_user".to_string(),
            display_name: "A deleted user".to_string(),
            avatar_url: None,
            is_deleted: true,
        }
    }
}

/// `post` section of the event payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPost {
    /// Public ID of the post
    pub id: String,

    /// Truncated content preview
    pub content: Option<String>,
}

/// Payload of a `new_notification` realtime event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    /// Public ID of the notification
    pub id: String,

    /// Action type
    #[serde(rename = "type")]
    pub kind: ActionType,

    pub is_read: bool,

    /// ISO-8601 creation timestamp
    pub created_at: String,

    pub from_user: EventActor,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<EventPost>,
}

impl NotificationPayload {
    /// Assemble the payload for a persisted notification
    ///
    /// # Arguments
    ///
    /// * `notification` - The persisted record
    /// * `actor` - The actor's profile, or None for a deleted actor
    /// * `post_public_id` - Public ID of the target post, when the target is a post
    /// * `post_content` - Full post content; truncated here for the preview
    pub fn from_parts(
        notification: &Notification,
        actor: Option<&UserProfile>,
        post_public_id: Option<Uuid>,
        post_content: Option<&str>,
    ) -> Self {
        let from_user = actor.map(EventActor::from_profile).unwrap_or_else(EventActor::ghost);

        let post = match (notification.target_type, post_public_id) {
            (Some(TargetType::Post), Some(public_id)) => Some(EventPost {
                id: public_id.to_string(),
                content: post_content.map(truncate_preview),
            }),
            _ => None,
        };

        Self {
            id: notification.public_id.to_string(),
            kind: notification.action_type,
            is_read: notification.is_read,
            created_at: notification.created_at.to_rfc3339(),
            from_user,
            post,
        }
    }
}

/// Envelope written to a realtime connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealtimeMessage {
    /// Event name
    pub event: String,

    /// Event payload
    pub data: NotificationPayload,
}

impl RealtimeMessage {
    /// Wrap a notification payload in the `new_notification` event
    pub fn new_notification(data: NotificationPayload) -> Self {
        Self {
            event: "new_notification".to_string(),
            data,
        }
    }
}

/// Truncate content for the notification preview
fn truncate_preview(content: &str) -> String {
    if content.chars().count() > PREVIEW_MAX_CHARS {
        let preview: String = content.chars().take(PREVIEW_MAX_CHARS).collect();
        format!("{}...", preview)
    } else {
        content.to_string()
    }
}
