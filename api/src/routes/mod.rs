//! Route registration

pub mod auth;
pub mod notifications;
pub mod realtime;

use actix_web::web;

use ripple_core::repositories::{ExpiringCache, NotificationStore, UserLookup};

/// Register all routes for the given collaborator implementations
pub fn configure<C, U, N>(cfg: &mut web::ServiceConfig)
where
    C: ExpiringCache + Clone + 'static,
    U: UserLookup + 'static,
    N: NotificationStore + 'static,
{
    cfg.service(
        web::scope("/api/v1")
            .service(
                web::scope("/auth")
                    .route("/refresh", web::post().to(auth::refresh::refresh_token::<C, U, N>))
                    .route("/logout", web::post().to(auth::logout::logout::<C, U, N>)),
            )
            .service(
                web::scope("/notifications")
                    .route("/mark-read", web::post().to(notifications::mark_read::<C, U, N>))
                    .route(
                        "/mark-all-read",
                        web::post().to(notifications::mark_all_read::<C, U, N>),
                    )
                    .route(
                        "/unread-count",
                        web::get().to(notifications::unread_count::<C, U, N>),
                    ),
            ),
    )
    .route("/ws", web::get().to(realtime::websocket::<C, U, N>));
}
