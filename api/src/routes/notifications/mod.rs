//! Notification route handlers
//!
//! All routes operate on the authenticated user's own notifications; the
//! recipient scope comes from the access token, never from the request body.

use actix_web::{web, HttpRequest, HttpResponse};

use ripple_core::repositories::{ExpiringCache, NotificationStore, UserLookup};

use crate::dto::notification_dto::{MarkReadRequest, MarkReadResponse, UnreadCountResponse};
use crate::handlers::access_guard::require_user;
use crate::handlers::error_handler::handle_domain_error;
use crate::state::AppState;

/// Handler for POST /api/v1/notifications/mark-read
///
/// Marks the listed notifications as read. IDs belonging to other users
/// are silently skipped; the response reports how many rows changed.
pub async fn mark_read<C, U, N>(
    req: HttpRequest,
    state: web::Data<AppState<C, U, N>>,
    request: web::Json<MarkReadRequest>,
) -> HttpResponse
where
    C: ExpiringCache + Clone + 'static,
    U: UserLookup + 'static,
    N: NotificationStore + 'static,
{
    let user_id = match require_user(&req, &state.tokens, &state.cookies, true).await {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.notifications.mark_read(user_id, &request.ids).await {
        Ok(updated) => HttpResponse::Ok().json(MarkReadResponse { updated }),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /api/v1/notifications/mark-all-read
pub async fn mark_all_read<C, U, N>(
    req: HttpRequest,
    state: web::Data<AppState<C, U, N>>,
) -> HttpResponse
where
    C: ExpiringCache + Clone + 'static,
    U: UserLookup + 'static,
    N: NotificationStore + 'static,
{
    let user_id = match require_user(&req, &state.tokens, &state.cookies, true).await {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.notifications.mark_all_read(user_id).await {
        Ok(updated) => HttpResponse::Ok().json(MarkReadResponse { updated }),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/v1/notifications/unread-count
pub async fn unread_count<C, U, N>(
    req: HttpRequest,
    state: web::Data<AppState<C, U, N>>,
) -> HttpResponse
where
    C: ExpiringCache + Clone + 'static,
    U: UserLookup + 'static,
    N: NotificationStore + 'static,
{
    let user_id = match require_user(&req, &state.tokens, &state.cookies, false).await {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.notifications.unread_count(user_id).await {
        Ok(unread) => HttpResponse::Ok().json(UnreadCountResponse { unread }),
        Err(error) => handle_domain_error(&error),
    }
}
