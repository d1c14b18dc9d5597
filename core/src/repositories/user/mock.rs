//! Mock implementation of UserLookup for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::UserProfile;
use crate::errors::DomainError;

use super::r#trait::UserLookup;

/// Mock user lookup for testing
#[derive(Clone, Default)]
pub struct MockUserLookup {
    users: Arc<RwLock<HashMap<i64, UserProfile>>>,
}

impl MockUserLookup {
    /// Create a new empty mock
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user
    pub async fn insert(&self, profile: UserProfile) {
        let mut users = self.users.write().await;
        users.insert(profile.id, profile);
    }

    /// Remove a user (simulates account deletion)
    pub async fn remove(&self, user_id: i64) {
        let mut users = self.users.write().await;
        users.remove(&user_id);
    }
}

#[async_trait]
impl UserLookup for MockUserLookup {
    async fn find_profile(&self, user_id: i64) -> Result<Option<UserProfile>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&user_id).cloned())
    }
}
