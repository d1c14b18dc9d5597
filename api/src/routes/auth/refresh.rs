use actix_web::{web, HttpRequest, HttpResponse};

use ripple_core::errors::ErrorResponse;
use ripple_core::repositories::{ExpiringCache, NotificationStore, UserLookup};

use crate::cookies::{clear_auth_cookies, set_auth_cookies};
use crate::dto::auth_dto::RefreshResponse;
use crate::handlers::access_guard::csrf_header;
use crate::handlers::error_handler::status_for;
use crate::state::AppState;

/// Handler for POST /api/v1/auth/refresh
///
/// Rotates the refresh token presented in the refresh cookie. The rotated
/// pair is set as HTTP-only cookies; the body carries the new CSRF values
/// and the access token expiry.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Token refreshed",
///     "access_token_exp": 1700000900,
///     "csrf_access_token": "hex...",
///     "csrf_refresh_token": "hex..."
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing, invalid or expired refresh token, failed
///   CSRF check, or reuse of an already-rotated token. Auth cookies are
///   cleared so the client falls back to a full login.
/// - 500 Internal Server Error: Token generation failure
pub async fn refresh_token<C, U, N>(
    req: HttpRequest,
    state: web::Data<AppState<C, U, N>>,
) -> HttpResponse
where
    C: ExpiringCache + Clone + 'static,
    U: UserLookup + 'static,
    N: NotificationStore + 'static,
{
    let cookie = match req.cookie(&state.cookies.refresh_cookie_name) {
        Some(c) => c,
        None => {
            let mut builder = HttpResponse::Unauthorized();
            clear_auth_cookies(&mut builder, &state.cookies);
            return builder.json(ErrorResponse::new("TOKEN_INVALID", "Refresh token missing"));
        }
    };
    let presented = cookie.value();

    let submitted = csrf_header(&req).unwrap_or_default();
    if !state.tokens.verify_csrf(presented, &submitted) {
        let mut builder = HttpResponse::Unauthorized();
        clear_auth_cookies(&mut builder, &state.cookies);
        return builder.json(ErrorResponse::new(
            "CSRF_INVALID",
            "CSRF token missing or invalid",
        ));
    }

    match state.tokens.rotate(presented).await {
        Ok(bundle) => {
            let mut builder = HttpResponse::Ok();
            set_auth_cookies(&mut builder, &bundle, &state.cookies);
            builder.json(RefreshResponse {
                message: "Token refreshed".to_string(),
                access_token_exp: bundle.access_token_exp,
                csrf_access_token: bundle.csrf_access_token.clone(),
                csrf_refresh_token: bundle.csrf_refresh_token.clone(),
            })
        }
        Err(error) => {
            let mut builder = HttpResponse::build(status_for(&error));
            clear_auth_cookies(&mut builder, &state.cookies);
            builder.json(ErrorResponse::from(&error))
        }
    }
}
