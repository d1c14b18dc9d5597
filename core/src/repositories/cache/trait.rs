//! Expiring cache trait defining the interface to the shared key-value store.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Shared expiring key-value store
///
/// Keys self-expire after their TTL; there is no explicit sweep. The store is
/// shared by every worker process, so implementations must be safe under
/// concurrent access from independent processes.
#[async_trait]
pub trait ExpiringCache: Send + Sync {
    /// Set a value with a TTL, atomically
    ///
    /// # Arguments
    /// * `key` - Cache key
    /// * `value` - Value to store
    /// * `ttl_seconds` - Time to live in seconds
    ///
    /// # Returns
    /// * `Ok(())` - Value stored
    /// * `Err(DomainError)` - Store unreachable or write failed
    async fn set_with_ttl(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), DomainError>;

    /// Get a value if it exists and has not expired
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Key present
    /// * `Ok(None)` - Key absent or expired
    /// * `Err(DomainError)` - Store unreachable
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Delete a key
    ///
    /// # Returns
    /// * `Ok(true)` - Key existed and was removed
    /// * `Ok(false)` - Key was absent
    /// * `Err(DomainError)` - Store unreachable
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;
}
