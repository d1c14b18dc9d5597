//! User lookup trait.

use async_trait::async_trait;

use crate::domain::entities::user::UserProfile;
use crate::errors::DomainError;

/// Read-only user lookup
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Find a user's public profile by ID
    ///
    /// # Returns
    /// * `Ok(Some(profile))` - User exists
    /// * `Ok(None)` - No such user (or account deleted)
    /// * `Err(DomainError)` - Lookup failed
    async fn find_profile(&self, user_id: i64) -> Result<Option<UserProfile>, DomainError>;

    /// Check whether a user still exists
    async fn exists(&self, user_id: i64) -> Result<bool, DomainError> {
        Ok(self.find_profile(user_id).await?.is_some())
    }
}
