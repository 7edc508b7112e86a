//! Schema declaration and validation
//!
//! Resources and the provider itself declare their attributes with a
//! [`Schema`]. Configs are checked against it before any remote call is
//! made, and problems are reported as [`Diagnostics`].
//!
//! # Example
//!
//! ```rust
//! use mailjet_provider::schema::{Attribute, Schema};
//! use mailjet_provider::types::AttributeType;
//! use serde_json::json;
//!
//! let schema = Schema::new("Example")
//!     .with_attribute("name", Attribute::required(AttributeType::String))
//!     .with_attribute(
//!         "active",
//!         Attribute::optional(AttributeType::Bool).with_default(json!(true)),
//!     );
//!
//! let diags = schema.validate(&json!({ "active": "yes" }));
//! assert!(diags.has_errors());
//! ```

mod diagnostics;
mod types;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use types::{Attribute, Schema};
