//! HTTP client module
//!
//! Thin reqwest wrapper used by the Mailjet client.
//!
//! # Features
//!
//! - **Base URL resolution**: relative paths are joined onto a configured base
//! - **Authentication**: Integration with auth module
//! - **Error classification**: non-2xx responses become `Error::HttpStatus`
//!
//! Every request is sent exactly once; failures are returned to the caller.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
