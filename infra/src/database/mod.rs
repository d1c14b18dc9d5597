//! Database module - MySQL implementations using SQLx

pub mod connection;
pub mod mysql;

pub use connection::create_pool;
pub use mysql::{MySqlNotificationStore, MySqlUserLookup};
