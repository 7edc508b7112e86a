//! Provider configuration block

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::mailjet::{MailjetClient, DEFAULT_BASE_URL};
use crate::schema::{Attribute, Schema};
use crate::types::{AttributeType, JsonValue};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::Path;
use std::time::Duration;

fn default_timeout_seconds() -> u64 {
    30
}

/// Settings read from the provider config block
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Mailjet public API key of the main account
    pub public_key: String,

    /// Mailjet private API key of the main account
    pub private_key: String,

    /// REST endpoint override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ProviderConfig {
    /// Create a config for the default endpoint
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
            base_url: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }

    /// Schema of the provider config block
    pub fn schema() -> Schema {
        Schema::new("Manage Mailjet sub-account API keys.")
            .with_attribute(
                "public_key",
                Attribute::required(AttributeType::String)
                    .sensitive()
                    .with_description("Mailjet public API Key (main account)"),
            )
            .with_attribute(
                "private_key",
                Attribute::required(AttributeType::String)
                    .sensitive()
                    .with_description("Mailjet private API Key (main account)"),
            )
            .with_attribute(
                "base_url",
                Attribute::optional(AttributeType::String).with_description(format!(
                    "Mailjet REST endpoint. Defaults to `{DEFAULT_BASE_URL}`."
                )),
            )
            .with_attribute(
                "timeout_seconds",
                Attribute::optional(AttributeType::Int)
                    .with_default(json!(default_timeout_seconds()))
                    .with_description("HTTP request timeout in seconds. Must be at least 1."),
            )
    }

    /// Deserialize from an already validated config value
    pub fn from_value(value: JsonValue) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// HTTP client settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::builder()
            .base_url(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))
            .timeout(Duration::from_secs(self.timeout_seconds))
            .user_agent(format!("{}/{}", crate::NAME, crate::VERSION))
            .build()
    }

    /// Check values the schema types alone cannot rule out
    pub fn validate(&self) -> Result<()> {
        if self.timeout_seconds == 0 {
            return Err(Error::invalid_value(
                "timeout_seconds",
                "must be at least 1 second",
            ));
        }
        if let Some(ref base_url) = self.base_url {
            url::Url::parse(base_url)?;
        }
        Ok(())
    }

    /// Build the Mailjet client handle
    pub fn build_client(&self) -> Result<MailjetClient> {
        self.validate()?;
        MailjetClient::with_config(&self.public_key, &self.private_key, self.http_config())
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

/// Load a provider config block from a YAML or JSON file
pub fn load_config_value(path: impl AsRef<Path>) -> Result<JsonValue> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    let value: JsonValue = serde_yaml::from_str(&contents)?;
    Ok(value)
}
