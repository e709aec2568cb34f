//! HTTP client builder utilities

use crate::error::LlmError;
use crate::types::HttpConfig;

/// Build a `reqwest::Client` from [`HttpConfig`].
///
/// The request timeout bounds every generation call; there is no unbounded
/// wait.
pub fn build_http_client_from_config(config: &HttpConfig) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(&config.user_agent)
        .build()
        .map_err(|e| LlmError::HttpError(format!("Failed to create HTTP client: {e}")))
}
