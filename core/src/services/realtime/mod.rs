//! Realtime connection handling
//!
//! The registry tracks live connections per user and fans events out to
//! them; the gateway authenticates connections before they are registered.

mod gateway;
mod registry;

pub use gateway::{ConnectionRefused, RealtimeGateway};
pub use registry::ConnectionRegistry;
