//! Mock implementation of ExpiringCache for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{Duration, Instant};

use crate::errors::DomainError;

use super::r#trait::ExpiringCache;

/// In-memory expiring cache for tests
///
/// Deadlines use `tokio::time::Instant`, so tests running under a paused
/// tokio clock can advance time past TTLs deterministically.
#[derive(Clone, Default)]
pub struct MockExpiringCache {
    entries: Arc<RwLock<HashMap<String, (String, Instant)>>>,
    unavailable: Arc<AtomicBool>,
}

impl MockExpiringCache {
    /// Create a new empty mock cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a store outage; all operations fail until cleared
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::Store {
                message: "mock cache unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ExpiringCache for MockExpiringCache {
    async fn set_with_ttl(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), DomainError> {
        self.check_available()?;

        let deadline = Instant::now() + Duration::from_secs(ttl_seconds);
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), (value.to_string(), deadline));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.check_available()?;

        let now = Instant::now();
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some((value, deadline)) if *deadline > now => Ok(Some(value.clone())),
            Some(_) => {
                // Lazily evict like a real store would on read
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        self.check_available()?;

        let mut entries = self.entries.write().await;
        Ok(entries.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_after_ttl() {
        let cache = MockExpiringCache::new();
        cache.set_with_ttl("k", "v", 5).await.unwrap();

        assert_eq!(cache.get("k").await.unwrap(), Some("v".to_string()));

        tokio::time::advance(Duration::from_secs(6)).await;
        assert_eq!(cache.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_missing_key() {
        let cache = MockExpiringCache::new();
        assert!(!cache.delete("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_unavailable_store_errors() {
        let cache = MockExpiringCache::new();
        cache.set_unavailable(true);

        assert!(cache.get("k").await.is_err());
        assert!(cache.set_with_ttl("k", "v", 1).await.is_err());

        cache.set_unavailable(false);
        assert!(cache.get("k").await.is_ok());
    }
}
