//! Domain layer containing the entities of the session and notification core.

pub mod entities;

pub use entities::*;
