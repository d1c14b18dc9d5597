//! Collaborator interfaces consumed by the core services
//!
//! Each collaborator is a trait with an in-memory mock implementation so the
//! services can be tested without external infrastructure. Concrete
//! implementations (Redis, MySQL) live in the infrastructure crate.

pub mod cache;
pub mod emitter;
pub mod notification;
pub mod user;

pub use cache::{ExpiringCache, MockExpiringCache};
pub use emitter::{ChannelEmitter, MockChannelEmitter};
pub use notification::{MockNotificationStore, NotificationStore};
pub use user::{MockUserLookup, UserLookup};
