//! User lookup collaborator
//!
//! The session and notification core never manages user accounts; it only
//! needs to confirm a subject still exists and to read the public profile
//! fields that go into event payloads.

mod mock;
mod r#trait;

pub use mock::MockUserLookup;
pub use r#trait::UserLookup;
