//! Provider configuration and operation dispatch
//!
//! [`Provider`] declares the provider config schema and the registry of
//! resources. [`Provider::configure`] validates a config block and yields a
//! [`ConfiguredProvider`] holding the Mailjet client handle shared by every
//! resource operation of that provider instance.

mod config;
#[allow(clippy::module_inception)]
mod provider;

pub use config::{load_config_value, ProviderConfig};
pub use provider::{ConfiguredProvider, Provider, Response};
