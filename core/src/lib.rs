//! # Ripple Core
//!
//! Core business logic and domain layer for the Ripple backend.
//! This crate contains the session/token lifecycle (issuance, rotation with a
//! grace window, revocation) and the realtime notification fan-out, together
//! with the collaborator traits and error types they are built on.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    ActionType, Claims, EventActor, EventPost, NewNotification, Notification,
    NotificationPayload, RealtimeMessage, RotatedTokens, TargetType, TokenType, UserProfile,
};
pub use errors::{DomainError, DomainResult, ErrorResponse, TokenError};
pub use repositories::{
    ChannelEmitter, ExpiringCache, MockChannelEmitter, MockExpiringCache, MockNotificationStore,
    MockUserLookup, NotificationStore, UserLookup,
};
pub use services::{
    ConnectionRefused, ConnectionRegistry, NotificationService, NotifyRequest, RealtimeGateway,
    TokenIssuer, TokenService, TokenServiceConfig,
};
