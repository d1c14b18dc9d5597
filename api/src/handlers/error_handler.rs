//! Mapping from domain errors to HTTP responses

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use ripple_core::errors::{DomainError, ErrorResponse, TokenError};

/// HTTP status for a domain error
///
/// Token failures are all 401s so callers cannot distinguish a revoked
/// token from an invalid one by status code alone; the body's error code
/// carries the detail.
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Token(TokenError::GenerationFailed) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
        DomainError::UserNotFound => StatusCode::NOT_FOUND,
        DomainError::Store { .. } => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Map a domain error to its HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = status_for(error);
    if status.is_server_error() {
        log::error!("API error: {}", error);
    }

    HttpResponse::build(status).json(ErrorResponse::from(error))
}
