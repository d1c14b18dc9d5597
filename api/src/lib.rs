//! # Ripple API
//!
//! HTTP and WebSocket surface for the Ripple backend. Routes delegate to the
//! core services; nothing in this crate holds business logic of its own.

pub mod cookies;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use state::AppState;
