//! Notification DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for POST /api/v1/notifications/mark-read
#[derive(Debug, Deserialize)]
pub struct MarkReadRequest {
    /// Public IDs of the notifications to mark as read
    pub ids: Vec<Uuid>,
}

/// Response body for the mark-read endpoints
#[derive(Debug, Serialize)]
pub struct MarkReadResponse {
    /// Number of notifications updated
    pub updated: u64,
}

/// Response body for GET /api/v1/notifications/unread-count
#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub unread: u64,
}
