//! Shared application state

use ripple_core::repositories::{ExpiringCache, NotificationStore, UserLookup};
use ripple_core::services::notification::NotificationService;
use ripple_core::services::realtime::{ConnectionRegistry, RealtimeGateway};
use ripple_core::services::token::TokenService;
use ripple_shared::config::auth::CookieConfig;

/// Application state that holds the shared services
///
/// Generic over the collaborator implementations so route handlers can be
/// exercised against the in-memory mocks in tests.
pub struct AppState<C, U, N>
where
    C: ExpiringCache + Clone,
    U: UserLookup,
    N: NotificationStore,
{
    pub tokens: TokenService<C>,
    pub gateway: RealtimeGateway<U>,
    pub notifications: NotificationService<N, U, ConnectionRegistry>,
    pub cookies: CookieConfig,
}
