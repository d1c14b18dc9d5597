//! Expiring key-value store abstraction
//!
//! Backs the revocation list and the rotation grace cache. All cross-request
//! coordination goes through the store's own atomic set-with-TTL primitive;
//! the services never do client-side read-modify-write against it.

mod mock;
mod r#trait;

pub use mock::MockExpiringCache;
pub use r#trait::ExpiringCache;
