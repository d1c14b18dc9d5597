//! CORS middleware configuration for cross-origin requests.
//!
//! Credentials are always allowed because the auth tokens travel in
//! cookies; in production the allowed origins must therefore be explicit.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Creates a CORS middleware instance configured for the current environment.
///
/// # Environment Variables
/// - `ENVIRONMENT`: Set to "production" for production settings
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (production only)
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .allowed_header("X-CSRF-TOKEN")
        .supports_credentials()
        .max_age(3600);

    if environment == "production" {
        let allowed = env::var("ALLOWED_ORIGINS").unwrap_or_default();
        let mut cors = cors;
        for origin in allowed.split(',').filter(|o| !o.is_empty()) {
            cors = cors.allowed_origin(origin.trim());
        }
        cors
    } else {
        log::info!("Configuring permissive CORS for development");
        cors.allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:5173")
    }
}
