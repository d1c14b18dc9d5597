//! Authentication route handlers
//!
//! - Token refresh (cookie-based, CSRF double-submit protected)
//! - Logout (revokes both tokens, clears cookies)

pub mod logout;
pub mod refresh;
