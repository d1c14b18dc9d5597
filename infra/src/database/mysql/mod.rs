//! MySQL repository implementations

pub mod notification_repository_impl;
pub mod user_repository_impl;

pub use notification_repository_impl::MySqlNotificationStore;
pub use user_repository_impl::MySqlUserLookup;
