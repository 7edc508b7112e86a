//! Error types for the Mailjet provider
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! At the provider boundary every error becomes an error diagnostic.

use thiserror::Error;

/// The main error type for the provider
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Mailjet API Errors
    // ============================================================================
    #[error("Mailjet API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Mailjet returned no '{resource}' records")]
    EmptyResponse { resource: String },

    // ============================================================================
    // Resource Errors
    // ============================================================================
    #[error("Invalid resource ID '{id}': {message}")]
    InvalidId { id: String, message: String },

    #[error("Resource has no ID")]
    MissingId,

    #[error("Unknown resource type: {name}")]
    UnknownResource { name: String },

    #[error("not implemented")]
    NotImplemented,

    #[error("Provider reported errors: {summary}")]
    Diagnostics { summary: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a Mailjet API error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an empty response error
    pub fn empty_response(resource: impl Into<String>) -> Self {
        Self::EmptyResponse {
            resource: resource.into(),
        }
    }

    /// Create an invalid ID error
    pub fn invalid_id(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidId {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Create an unknown resource error
    pub fn unknown_resource(name: impl Into<String>) -> Self {
        Self::UnknownResource { name: name.into() }
    }
}

/// Result type alias for the provider
pub type Result<T> = std::result::Result<T, Error>;
