//! Mock implementation of ChannelEmitter for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::notification::RealtimeMessage;

use super::r#trait::ChannelEmitter;

/// Recording mock emitter for testing
///
/// Captures every emitted message together with its target user. The number
/// of simulated live connections per user is fixed at construction.
#[derive(Clone)]
pub struct MockChannelEmitter {
    emitted: Arc<RwLock<Vec<(i64, RealtimeMessage)>>>,
    connections_per_user: usize,
}

impl MockChannelEmitter {
    /// Create a mock where every user has one live connection
    pub fn new() -> Self {
        Self::with_connections(1)
    }

    /// Create a mock where every user has `count` live connections
    pub fn with_connections(count: usize) -> Self {
        Self {
            emitted: Arc::new(RwLock::new(Vec::new())),
            connections_per_user: count,
        }
    }

    /// All emitted messages, in emission order
    pub async fn emitted(&self) -> Vec<(i64, RealtimeMessage)> {
        self.emitted.read().await.clone()
    }

    /// Number of emitted messages
    pub async fn emitted_count(&self) -> usize {
        self.emitted.read().await.len()
    }
}

impl Default for MockChannelEmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChannelEmitter for MockChannelEmitter {
    async fn emit_to_user(&self, user_id: i64, message: &RealtimeMessage) -> usize {
        let mut emitted = self.emitted.write().await;
        emitted.push((user_id, message.clone()));
        self.connections_per_user
    }
}
