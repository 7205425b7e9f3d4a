//! HTTP Client Factory
//!
//! Provides a factory function for building the reqwest client shared by the
//! provider implementations.

use std::time::Duration;

use crate::types::{LlmError, LlmResult};

/// User agent sent with every provider request.
pub const USER_AGENT: &str = concat!("jumla/", env!("CARGO_PKG_VERSION"));

/// Build a `reqwest::Client` with the given request timeout.
pub fn build_http_client(timeout: Duration) -> LlmResult<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| LlmError::Other {
            message: format!("Failed to build HTTP client: {}", e),
        })
}
