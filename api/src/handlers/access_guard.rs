//! Access token guard for authenticated routes

use actix_web::{HttpRequest, HttpResponse};

use ripple_core::errors::ErrorResponse;
use ripple_core::repositories::ExpiringCache;
use ripple_core::services::token::TokenService;
use ripple_shared::config::auth::CookieConfig;

use super::error_handler::handle_domain_error;

/// Name of the double-submit CSRF header
pub const CSRF_HEADER: &str = "X-CSRF-TOKEN";

/// Extract the CSRF header value, if present
pub fn csrf_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(CSRF_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// Authenticate a request from its access token cookie
///
/// Mutating routes pass `enforce_csrf: true`, which additionally requires
/// the `X-CSRF-TOKEN` header to match the value bound to the cookie's token.
///
/// # Returns
/// The authenticated user's ID, or the HTTP response to send instead.
pub async fn require_user<C>(
    req: &HttpRequest,
    tokens: &TokenService<C>,
    cookies: &CookieConfig,
    enforce_csrf: bool,
) -> Result<i64, HttpResponse>
where
    C: ExpiringCache + Clone,
{
    let cookie = match req.cookie(&cookies.access_cookie_name) {
        Some(c) => c,
        None => {
            return Err(HttpResponse::Unauthorized()
                .json(ErrorResponse::new("TOKEN_INVALID", "Access token missing")))
        }
    };
    let token = cookie.value();

    if enforce_csrf {
        let submitted = csrf_header(req).unwrap_or_default();
        if !tokens.verify_csrf(token, &submitted) {
            return Err(HttpResponse::Unauthorized()
                .json(ErrorResponse::new("CSRF_INVALID", "CSRF token missing or invalid")));
        }
    }

    let claims = tokens
        .verify_access(token)
        .await
        .map_err(|e| handle_domain_error(&e))?;

    claims.subject().map_err(|_| {
        HttpResponse::Unauthorized().json(ErrorResponse::new("TOKEN_INVALID", "Invalid token"))
    })
}
