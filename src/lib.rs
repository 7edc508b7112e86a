// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Mailjet Terraform Provider
//!
//! Manages Mailjet sub-account API keys as infrastructure resources.
//!
//! ## Features
//!
//! - **Provider configuration**: public/private key pair validated against a schema
//! - **`mailjet_subaccount` resource**: create, read, update and import API keys
//! - **Diagnostics**: validation errors and warnings reported per attribute
//! - **CLI and HTTP server**: drive resource operations from a shell or over REST
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mailjet_provider::Provider;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = Provider::new(mailjet_provider::VERSION);
//!     let configured = provider
//!         .configure(&json!({ "public_key": "...", "private_key": "..." }))
//!         .expect("valid provider config");
//!
//!     let response = configured
//!         .create("mailjet_subaccount", &json!({ "name": "marketing" }))
//!         .await;
//!     println!("{:?}", response.state);
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                  Provider / ConfiguredProvider               │
//! │  schema()  configure()  create/read/update/delete/import()   │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬─────────────┬─────┴──────┬──────────────┬─────────┐
//! │  Schema  │  Resource   │  Mailjet   │     HTTP     │  Auth   │
//! ├──────────┼─────────────┼────────────┼──────────────┼─────────┤
//! │ Validate │ Subaccount  │ apikey     │ GET/POST/PUT │ Basic   │
//! │ Defaults │ ResourceData│ Envelope   │ Timeouts     │         │
//! │ Diags    │             │ ErrorInfo  │              │         │
//! └──────────┴─────────────┴────────────┴──────────────┴─────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the provider
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication implementations
pub mod auth;

/// HTTP client
pub mod http;

/// Mailjet REST API client
pub mod mailjet;

/// Attribute schemas and diagnostics
pub mod schema;

/// Managed resources
pub mod resource;

/// Provider configuration and operation dispatch
pub mod provider;

/// Markdown documentation
pub mod docs;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use provider::{ConfiguredProvider, Provider, ProviderConfig, Response};
pub use resource::{Resource, ResourceData, ResourceState, SubaccountResource};
pub use schema::{Diagnostic, Diagnostics, Schema};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
