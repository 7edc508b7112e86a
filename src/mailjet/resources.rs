//! Wire types for Mailjet REST resources
//!
//! Mailjet speaks PascalCase JSON with a handful of all-caps acronyms
//! (`ID`, `ACL`, `APIKey`, `UserID`), hence the explicit renames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// REST resource name for API keys
pub const APIKEY_RESOURCE: &str = "apikey";

/// Response envelope wrapping every successful Mailjet REST response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Envelope<T> {
    /// Number of records in `data`
    #[serde(default)]
    pub count: u64,
    /// Returned records
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Total number of matching records
    #[serde(default)]
    pub total: u64,
}

/// Error payload returned by Mailjet on failed calls
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApiError {
    pub error_info: String,
    pub error_message: String,
    pub status_code: u16,
}

impl ApiError {
    /// Human-readable message combining message and info
    pub fn message(&self) -> String {
        match (self.error_message.is_empty(), self.error_info.is_empty()) {
            (false, false) => format!("{} ({})", self.error_message, self.error_info),
            (false, true) => self.error_message.clone(),
            (true, false) => self.error_info.clone(),
            (true, true) => String::new(),
        }
    }
}

/// A Mailjet API key as returned by the `apikey` resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApiKey {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "ACL")]
    pub acl: String,
    #[serde(rename = "APIKey")]
    pub api_key: String,
    pub created_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub is_master: bool,
    pub name: String,
    pub quarantine_value: i64,
    pub runlevel: String,
    pub secret_key: String,
    pub track_host: String,
    #[serde(rename = "UserID")]
    pub user_id: i64,
}

/// Payload for creating an API key
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiKeyCreate {
    pub name: String,
    pub is_active: bool,
    #[serde(rename = "ACL", skip_serializing_if = "Option::is_none")]
    pub acl: Option<String>,
}

/// Partial update payload; only these fields may change after creation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiKeyUpdate {
    pub is_active: bool,
    #[serde(rename = "ACL", skip_serializing_if = "Option::is_none")]
    pub acl: Option<String>,
}
