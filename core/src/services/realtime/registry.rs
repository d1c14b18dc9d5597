//! Process-local connection registry

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::RwLock;
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::entities::notification::RealtimeMessage;
use crate::repositories::ChannelEmitter;

struct ConnectionEntry {
    user_id: i64,
    sender: UnboundedSender<String>,
}

#[derive(Default)]
struct RegistryInner {
    connections: HashMap<Uuid, ConnectionEntry>,
    users: HashMap<i64, HashSet<Uuid>>,
}

/// Process-local registry of live realtime connections
///
/// One user may hold several connections (multiple tabs or devices); an
/// emitted event reaches all of them. Senders that have gone away are
/// dropped from the registry on the next emission that touches them.
#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    inner: Arc<RwLock<RegistryInner>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an authenticated connection to its user
    pub async fn bind(&self, connection_id: Uuid, user_id: i64, sender: UnboundedSender<String>) {
        let mut inner = self.inner.write().await;
        inner
            .connections
            .insert(connection_id, ConnectionEntry { user_id, sender });
        inner.users.entry(user_id).or_default().insert(connection_id);
        debug!(%connection_id, user_id, "connection bound");
    }

    /// Remove a connection
    ///
    /// Idempotent; unbinding an unknown or already-removed connection is a
    /// no-op.
    pub async fn unbind(&self, connection_id: Uuid) {
        let mut inner = self.inner.write().await;
        if let Some(entry) = inner.connections.remove(&connection_id) {
            if let Some(set) = inner.users.get_mut(&entry.user_id) {
                set.remove(&connection_id);
                if set.is_empty() {
                    inner.users.remove(&entry.user_id);
                }
            }
            debug!(%connection_id, user_id = entry.user_id, "connection unbound");
        }
    }

    /// Number of live connections held by a user
    pub async fn connection_count(&self, user_id: i64) -> usize {
        let inner = self.inner.read().await;
        inner.users.get(&user_id).map_or(0, HashSet::len)
    }
}

#[async_trait]
impl ChannelEmitter for ConnectionRegistry {
    async fn emit_to_user(&self, user_id: i64, message: &RealtimeMessage) -> usize {
        let text = match serde_json::to_string(message) {
            Ok(t) => t,
            Err(e) => {
                error!(user_id, error = %e, "failed to serialize realtime message");
                return 0;
            }
        };

        let mut inner = self.inner.write().await;
        let Some(connection_ids) = inner.users.get(&user_id).cloned() else {
            return 0;
        };

        let mut delivered = 0;
        let mut dead = Vec::new();
        for connection_id in connection_ids {
            match inner.connections.get(&connection_id) {
                Some(entry) if entry.sender.send(text.clone()).is_ok() => delivered += 1,
                _ => dead.push(connection_id),
            }
        }

        for connection_id in dead {
            if let Some(entry) = inner.connections.remove(&connection_id) {
                if let Some(set) = inner.users.get_mut(&entry.user_id) {
                    set.remove(&connection_id);
                    if set.is_empty() {
                        inner.users.remove(&entry.user_id);
                    }
                }
            }
        }

        delivered
    }
}
