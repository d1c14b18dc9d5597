//! Notification dispatch tests

use uuid::Uuid;

use crate::domain::entities::notification::{ActionType, TargetType};
use crate::domain::entities::UserProfile;
use crate::repositories::{MockChannelEmitter, MockNotificationStore, MockUserLookup};
use crate::services::notification::{NotificationService, NotifyRequest};

type TestService = NotificationService<MockNotificationStore, MockUserLookup, MockChannelEmitter>;

async fn service_with_actor(
    actor: UserProfile,
) -> (TestService, MockNotificationStore, MockChannelEmitter) {
    let store = MockNotificationStore::new();
    let users = MockUserLookup::new();
    users.insert(actor).await;
    let emitter = MockChannelEmitter::new();
    let service = NotificationService::new(store.clone(), users, emitter.clone());
    (service, store, emitter)
}

fn like_request(recipient_id: i64, actor_id: i64) -> NotifyRequest {
    NotifyRequest {
        recipient_id,
        actor_id,
        action_type: ActionType::Like,
        target_type: Some(TargetType::Post),
        target_id: Some(42),
        target_public_id: Some(Uuid::new_v4()),
        target_preview: Some("hello world".to_string()),
    }
}

#[tokio::test]
async fn test_like_persists_and_pushes() {
    let actor = UserProfile::new(9, "ada", "Ada L.");
    let (service, store, emitter) = service_with_actor(actor).await;

    let request = like_request(7, 9);
    let post_public_id = request.target_public_id.unwrap();
    let saved = service.notify(request).await.unwrap().unwrap();

    assert_eq!(saved.recipient_user_id, 7);
    assert_eq!(saved.actor_user_id, Some(9));
    assert!(!saved.is_read);
    assert_eq!(store.count().await, 1);

    let emitted = emitter.emitted().await;
    assert_eq!(emitted.len(), 1);
    let (target_user, message) = &emitted[0];
    assert_eq!(*target_user, 7);
    assert_eq!(message.event, "new_notification");
    assert_eq!(message.data.id, saved.public_id.to_string());
    assert_eq!(message.data.from_user.username, "ada");
    assert!(!message.data.from_user.is_deleted);

    let post = message.data.post.as_ref().unwrap();
    assert_eq!(post.id, post_public_id.to_string());
    assert_eq!(post.content.as_deref(), Some("hello world"));
}

#[tokio::test]
async fn test_self_action_suppressed() {
    let actor = UserProfile::new(9, "ada", "Ada L.");
    let (service, store, emitter) = service_with_actor(actor).await;

    let result = service.notify(like_request(9, 9)).await.unwrap();

    assert!(result.is_none());
    assert_eq!(store.count().await, 0);
    assert_eq!(emitter.emitted_count().await, 0);
}

#[tokio::test]
async fn test_deleted_actor_gets_placeholder() {
    let store = MockNotificationStore::new();
    let users = MockUserLookup::new();
    let emitter = MockChannelEmitter::new();
    let service = NotificationService::new(store.clone(), users, emitter.clone());

    // Actor 9 does not exist in the lookup
    service.notify(like_request(7, 9)).await.unwrap().unwrap();

    let emitted = emitter.emitted().await;
    assert_eq!(emitted.len(), 1);
    assert!(emitted[0].1.data.from_user.is_deleted);
    assert_eq!(emitted[0].1.data.from_user.username, "deleted_user");
    assert_eq!(emitted[0].1.data.from_user.display_name, "A deleted user");
}

#[tokio::test]
async fn test_offline_recipient_still_persisted() {
    let actor = UserProfile::new(9, "ada", "Ada L.");
    let store = MockNotificationStore::new();
    let users = MockUserLookup::new();
    users.insert(actor).await;
    let emitter = MockChannelEmitter::with_connections(0);
    let service = NotificationService::new(store.clone(), users, emitter);

    let saved = service.notify(like_request(7, 9)).await.unwrap();

    assert!(saved.is_some());
    assert_eq!(store.count().await, 1);
}

#[tokio::test]
async fn test_follow_has_no_post_section() {
    let actor = UserProfile::new(9, "ada", "Ada L.");
    let (service, _store, emitter) = service_with_actor(actor).await;

    let request = NotifyRequest {
        recipient_id: 7,
        actor_id: 9,
        action_type: ActionType::Follow,
        target_type: Some(TargetType::User),
        target_id: Some(7),
        target_public_id: None,
        target_preview: None,
    };
    service.notify(request).await.unwrap().unwrap();

    let emitted = emitter.emitted().await;
    assert!(emitted[0].1.data.post.is_none());
    assert_eq!(
        serde_json::to_value(&emitted[0].1).unwrap()["data"]["type"],
        "follow"
    );
}

#[tokio::test]
async fn test_mark_read_scoped_to_recipient() {
    let actor = UserProfile::new(9, "ada", "Ada L.");
    let (service, _store, _emitter) = service_with_actor(actor).await;

    let a = service.notify(like_request(7, 9)).await.unwrap().unwrap();
    service.notify(like_request(8, 9)).await.unwrap().unwrap();

    assert_eq!(service.unread_count(7).await.unwrap(), 1);

    // Recipient 8 cannot mark recipient 7's notification
    let updated = service.mark_read(8, &[a.public_id]).await.unwrap();
    assert_eq!(updated, 0);

    let updated = service.mark_read(7, &[a.public_id]).await.unwrap();
    assert_eq!(updated, 1);
    assert_eq!(service.unread_count(7).await.unwrap(), 0);
    assert_eq!(service.unread_count(8).await.unwrap(), 1);

    let updated = service.mark_all_read(8).await.unwrap();
    assert_eq!(updated, 1);
}
