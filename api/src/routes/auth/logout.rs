use actix_web::{web, HttpRequest, HttpResponse};

use ripple_core::repositories::{ExpiringCache, NotificationStore, UserLookup};

use crate::cookies::clear_auth_cookies;
use crate::dto::auth_dto::LogoutResponse;
use crate::state::AppState;

/// Handler for POST /api/v1/auth/logout
///
/// Revokes whichever auth tokens the request carries and clears the auth
/// cookies. Always succeeds; a request with no valid tokens simply has
/// nothing to revoke.
pub async fn logout<C, U, N>(req: HttpRequest, state: web::Data<AppState<C, U, N>>) -> HttpResponse
where
    C: ExpiringCache + Clone + 'static,
    U: UserLookup + 'static,
    N: NotificationStore + 'static,
{
    let access = req
        .cookie(&state.cookies.access_cookie_name)
        .map(|c| c.value().to_string());
    let refresh = req
        .cookie(&state.cookies.refresh_cookie_name)
        .map(|c| c.value().to_string());

    state
        .tokens
        .logout(access.as_deref(), refresh.as_deref())
        .await;

    let mut builder = HttpResponse::Ok();
    clear_auth_cookies(&mut builder, &state.cookies);
    builder.json(LogoutResponse {
        message: "Logout successful".to_string(),
    })
}
