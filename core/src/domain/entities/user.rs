//! Minimal user projection used by the notification fan-out.

use serde::{Deserialize, Serialize};

/// Public profile fields of a user
///
/// This is the slice of the user record the notification payload needs;
/// account management itself lives outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable user ID, never reused
    pub id: i64,

    /// Unique handle
    pub username: String,

    /// Display name shown in clients
    pub display_name: String,

    /// Avatar URL, if the user uploaded one
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// Create a new profile
    pub fn new(id: i64, username: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            display_name: display_name.into(),
            avatar_url: None,
        }
    }

    /// Set the avatar URL
    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }
}
