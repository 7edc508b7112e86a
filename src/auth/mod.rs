//! Authentication module
//!
//! Mailjet authenticates every call with HTTP Basic auth, using the
//! account's public API key as username and its private key as password.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;
