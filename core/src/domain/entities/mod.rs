//! Domain entities representing core business objects.

pub mod notification;
pub mod token;
pub mod user;

pub use notification::{
    ActionType, EventActor, EventPost, NewNotification, Notification, NotificationPayload,
    RealtimeMessage, TargetType,
};
pub use token::{Claims, RotatedTokens, TokenType};
pub use user::UserProfile;
