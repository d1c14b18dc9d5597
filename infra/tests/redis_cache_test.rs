//! Integration tests for the Redis-backed expiring cache
//!
//! These require a running Redis instance and are ignored by default.
//! Run with: `REDIS_URL=redis://localhost:6379 cargo test -- --ignored`

use ripple_core::repositories::ExpiringCache;
use ripple_infra::RedisClient;
use ripple_shared::config::cache::CacheConfig;

fn config() -> CacheConfig {
    CacheConfig::new(
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
    )
}

#[tokio::test]
async fn test_client_creation_with_invalid_url() {
    let result = RedisClient::new(&CacheConfig::new("invalid://url")).await;
    assert!(result.is_err());
}

#[tokio::test]
#[ignore] // Requires actual Redis server
async fn test_set_get_delete_roundtrip() {
    let client = RedisClient::new(&config()).await.unwrap();

    let key = "test:revoked:integration";
    client.set_with_ttl(key, "revoked", 60).await.unwrap();

    assert_eq!(client.get(key).await.unwrap(), Some("revoked".to_string()));
    assert!(client.delete(key).await.unwrap());
    assert_eq!(client.get(key).await.unwrap(), None);
    assert!(!client.delete(key).await.unwrap());
}

#[tokio::test]
#[ignore] // Requires actual Redis server
async fn test_entry_expires() {
    let client = RedisClient::new(&config()).await.unwrap();

    let key = "test:grace:integration";
    client.set_with_ttl(key, "{}", 1).await.unwrap();
    assert!(client.get(key).await.unwrap().is_some());

    tokio::time::sleep(std::time::Duration::from_millis(1500)).await;
    assert_eq!(client.get(key).await.unwrap(), None);
}

#[tokio::test]
#[ignore] // Requires actual Redis server
async fn test_health_check() {
    let client = RedisClient::new(&config()).await.unwrap();
    assert!(client.health_check().await.unwrap());
}
