//! Mailjet client
//!
//! Wraps [`HttpClient`] with Basic auth, the REST base URL, envelope
//! unwrapping and Mailjet error payload decoding.

use super::resources::{
    ApiError, ApiKey, ApiKeyCreate, ApiKeyUpdate, Envelope, APIKEY_RESOURCE,
};
use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Default Mailjet REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.mailjet.com/v3/REST";

/// Client for the Mailjet REST API
#[derive(Debug)]
pub struct MailjetClient {
    http: HttpClient,
}

impl MailjetClient {
    /// Create a client with a custom HTTP configuration
    pub fn with_config(
        public_key: impl Into<String>,
        private_key: impl Into<String>,
        config: HttpClientConfig,
    ) -> Result<Self> {
        let config = if config.base_url.is_none() {
            HttpClientConfig {
                base_url: Some(DEFAULT_BASE_URL.to_string()),
                ..config
            }
        } else {
            config
        };
        let http = HttpClient::with_auth(config, AuthConfig::basic(public_key, private_key))?;
        Ok(Self { http })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        self.http.config().base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// POST a payload to a resource, returning the created records
    pub async fn post<P, T>(&self, resource: &str, payload: &P) -> Result<Vec<T>>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(payload)?;
        let envelope: Envelope<T> = self
            .send(Method::POST, resource, Some(&body))
            .await?;
        Ok(envelope.data)
    }

    /// GET a single record of a resource by ID
    pub async fn get<T: DeserializeOwned>(&self, resource: &str, id: i64) -> Result<Vec<T>> {
        let envelope: Envelope<T> = self
            .send(Method::GET, &format!("{resource}/{id}"), None)
            .await?;
        Ok(envelope.data)
    }

    /// PUT a partial payload to a record of a resource
    ///
    /// The response body is ignored; Mailjet answers `304 Not Modified`
    /// when nothing changed.
    pub async fn put<P>(&self, resource: &str, id: i64, payload: &P) -> Result<()>
    where
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_value(payload)?;
        self.http
            .request(Method::PUT, &format!("{resource}/{id}"), Some(&body))
            .await
            .map_err(decode_api_error)?;
        Ok(())
    }

    /// Create an API key, returning the first record Mailjet sends back
    pub async fn create_api_key(&self, payload: &ApiKeyCreate) -> Result<ApiKey> {
        let records: Vec<ApiKey> = self.post(APIKEY_RESOURCE, payload).await?;
        let key = records
            .into_iter()
            .next()
            .ok_or_else(|| Error::empty_response(APIKEY_RESOURCE))?;
        debug!(id = key.id, "Mailjet created API key");
        Ok(key)
    }

    /// Fetch an API key by ID
    pub async fn get_api_key(&self, id: i64) -> Result<ApiKey> {
        let records: Vec<ApiKey> = self.get(APIKEY_RESOURCE, id).await?;
        records
            .into_iter()
            .next()
            .ok_or_else(|| Error::empty_response(APIKEY_RESOURCE))
    }

    /// Update the mutable fields of an API key
    pub async fn update_api_key(&self, id: i64, payload: &ApiKeyUpdate) -> Result<()> {
        self.put(APIKEY_RESOURCE, id, payload).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<T> {
        self.http
            .request_json(method, path, body)
            .await
            .map_err(decode_api_error)
    }
}

/// Turn a raw HTTP status error into a Mailjet API error when the body
/// carries a Mailjet error payload
fn decode_api_error(err: Error) -> Error {
    match err {
        Error::HttpStatus { status, body } => match serde_json::from_str::<ApiError>(&body) {
            Ok(api) if !api.message().is_empty() => Error::api(status, api.message()),
            _ => Error::HttpStatus { status, body },
        },
        other => other,
    }
}
