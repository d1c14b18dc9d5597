//! Realtime channel emitter collaborator

mod mock;
mod r#trait;

pub use mock::MockChannelEmitter;
pub use r#trait::ChannelEmitter;
