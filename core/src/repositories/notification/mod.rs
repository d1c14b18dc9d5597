//! Notification persistence collaborator

mod mock;
mod r#trait;

pub use mock::MockNotificationStore;
pub use r#trait::NotificationStore;
