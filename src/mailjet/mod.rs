//! Mailjet REST API client
//!
//! Covers the parts of the Mailjet v3 REST API the provider needs: the
//! `apikey` resource, its response envelope and its error payloads.

mod client;
mod resources;

pub use client::{MailjetClient, DEFAULT_BASE_URL};
pub use resources::{ApiKey, ApiKeyCreate, ApiKeyUpdate, ApiError, Envelope, APIKEY_RESOURCE};

#[cfg(test)]
mod tests;
