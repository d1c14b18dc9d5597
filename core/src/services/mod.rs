//! Business logic services
//!
//! Services orchestrate domain entities and repository traits. They hold no
//! transport concerns; HTTP and WebSocket surfaces live in the api crate.

pub mod notification;
pub mod realtime;
pub mod token;

pub use notification::{NotificationService, NotifyRequest};
pub use realtime::{ConnectionRefused, ConnectionRegistry, RealtimeGateway};
pub use token::{TokenIssuer, TokenService, TokenServiceConfig};
