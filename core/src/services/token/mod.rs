//! Token lifecycle service
//!
//! Minting, verification, rotation with a bounded replay grace window, and
//! revocation. The rotation protocol is the heart of this module: a refresh
//! token is single-use, but concurrent callers racing a rotation within the
//! grace window all converge on the same replacement pair.

mod config;
mod grace;
mod issuer;
mod revocation;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use grace::GraceCache;
pub use issuer::TokenIssuer;
pub use revocation::RevocationList;
pub use service::TokenService;
