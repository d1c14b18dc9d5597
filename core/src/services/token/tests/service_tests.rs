//! Rotation protocol tests

use std::time::Duration;

use crate::domain::entities::token::TokenType;
use crate::errors::{DomainError, TokenError};
use crate::repositories::MockExpiringCache;
use crate::services::token::{TokenService, TokenServiceConfig};

fn config() -> TokenServiceConfig {
    TokenServiceConfig {
        secret: "rotation-test-secret".to_string(),
        grace_window_seconds: 10,
        ..Default::default()
    }
}

fn service(cache: MockExpiringCache) -> TokenService<MockExpiringCache> {
    TokenService::new(config(), cache).unwrap()
}

#[tokio::test]
async fn test_rotation_mints_distinct_pair() {
    let svc = service(MockExpiringCache::new());
    let initial = svc.issue_for(42).unwrap();

    let rotated = svc.rotate(&initial.refresh_token).await.unwrap();

    assert_ne!(rotated.access_token, initial.access_token);
    assert_ne!(rotated.refresh_token, initial.refresh_token);
}

#[tokio::test]
async fn test_in_window_replays_return_identical_bundle() {
    let svc = service(MockExpiringCache::new());
    let initial = svc.issue_for(42).unwrap();

    let first = svc.rotate(&initial.refresh_token).await.unwrap();
    let second = svc.rotate(&initial.refresh_token).await.unwrap();
    let third = svc.rotate(&initial.refresh_token).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first, third);
}

#[tokio::test(start_paused = true)]
async fn test_replay_after_window_is_reuse() {
    let svc = service(MockExpiringCache::new());
    let initial = svc.issue_for(42).unwrap();

    let first = svc.rotate(&initial.refresh_token).await.unwrap();
    assert_eq!(
        svc.rotate(&initial.refresh_token).await.unwrap(),
        first
    );

    tokio::time::advance(Duration::from_secs(11)).await;

    let result = svc.rotate(&initial.refresh_token).await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::RevokedReuse))
    ));
}

#[tokio::test]
async fn test_rotated_pair_is_usable() {
    let svc = service(MockExpiringCache::new());
    let initial = svc.issue_for(42).unwrap();

    let rotated = svc.rotate(&initial.refresh_token).await.unwrap();

    let claims = svc.verify_access(&rotated.access_token).await.unwrap();
    assert_eq!(claims.subject().unwrap(), 42);
    assert_eq!(claims.token_type, TokenType::Access);

    // And the new refresh token rotates in turn
    svc.rotate(&rotated.refresh_token).await.unwrap();
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let svc = service(MockExpiringCache::new());

    let result = svc.rotate("not-a-jwt").await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Invalid))
    ));
}

#[tokio::test]
async fn test_access_token_refused_for_rotation() {
    let svc = service(MockExpiringCache::new());
    let initial = svc.issue_for(42).unwrap();

    let result = svc.rotate(&initial.access_token).await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Invalid))
    ));
}

#[tokio::test]
async fn test_rotation_survives_store_outage() {
    let cache = MockExpiringCache::new();
    let svc = service(cache.clone());
    let initial = svc.issue_for(42).unwrap();

    cache.set_unavailable(true);

    // Grace and revocation degrade softly; rotation itself still succeeds
    let rotated = svc.rotate(&initial.refresh_token).await.unwrap();
    assert_ne!(rotated.refresh_token, initial.refresh_token);

    // With the store down nothing was recorded, so the old token rotates
    // again instead of being rejected. Documented availability tradeoff.
    let again = svc.rotate(&initial.refresh_token).await.unwrap();
    assert_ne!(again.refresh_token, rotated.refresh_token);
}

#[tokio::test]
async fn test_logout_revokes_both_tokens() {
    let svc = service(MockExpiringCache::new());
    let pair = svc.issue_for(42).unwrap();

    svc.logout(Some(&pair.access_token), Some(&pair.refresh_token))
        .await;

    let access = svc.verify_access(&pair.access_token).await;
    assert!(matches!(
        access,
        Err(DomainError::Token(TokenError::RevokedReuse))
    ));

    let refresh = svc.rotate(&pair.refresh_token).await;
    assert!(matches!(
        refresh,
        Err(DomainError::Token(TokenError::RevokedReuse))
    ));
}

#[tokio::test]
async fn test_logout_with_missing_tokens_is_noop() {
    let svc = service(MockExpiringCache::new());
    svc.logout(None, None).await;
    svc.logout(Some("garbage"), None).await;
}

#[tokio::test]
async fn test_csrf_values_match_tokens() {
    let svc = service(MockExpiringCache::new());
    let pair = svc.issue_for(42).unwrap();

    assert_eq!(
        svc.csrf_token(&pair.access_token).unwrap(),
        pair.csrf_access_token
    );
    assert_eq!(
        svc.csrf_token(&pair.refresh_token).unwrap(),
        pair.csrf_refresh_token
    );
    assert_ne!(pair.csrf_access_token, pair.csrf_refresh_token);
}
