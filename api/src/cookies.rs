//! Auth cookie construction
//!
//! Access and refresh tokens travel in HTTP-only cookies. The CSRF values
//! bound to them are returned in response bodies instead, so scripts can
//! echo them back in the `X-CSRF-TOKEN` header while the tokens themselves
//! stay out of reach.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpResponseBuilder;

use ripple_core::domain::entities::RotatedTokens;
use ripple_shared::config::auth::CookieConfig;

fn parse_same_site(value: &str) -> SameSite {
    match value {
        "Strict" => SameSite::Strict,
        "None" => SameSite::None,
        _ => SameSite::Lax,
    }
}

fn auth_cookie<'a>(name: &'a str, value: &'a str, config: &CookieConfig) -> Cookie<'a> {
    Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .same_site(parse_same_site(&config.same_site))
        .finish()
}

/// Attach both auth cookies for a freshly minted token pair
pub fn set_auth_cookies(
    response: &mut HttpResponseBuilder,
    tokens: &RotatedTokens,
    config: &CookieConfig,
) {
    response.cookie(auth_cookie(
        &config.access_cookie_name,
        &tokens.access_token,
        config,
    ));
    response.cookie(auth_cookie(
        &config.refresh_cookie_name,
        &tokens.refresh_token,
        config,
    ));
}

/// Expire both auth cookies
pub fn clear_auth_cookies(response: &mut HttpResponseBuilder, config: &CookieConfig) {
    for name in [&config.access_cookie_name, &config.refresh_cookie_name] {
        let mut cookie = Cookie::build(name.clone(), "").path("/").finish();
        cookie.make_removal();
        response.cookie(cookie);
    }
}
