//! HTTP transport abstraction.
//!
//! Adapters never talk to `reqwest` directly; they hand a fully-built JSON
//! POST to an [`HttpTransport`]. The default is [`ReqwestTransport`]; tests
//! and embedders can inject their own to observe or short-circuit requests.

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::error::LlmError;
use crate::types::HttpConfig;

use super::client::build_http_client_from_config;

/// Transport-level request data for JSON POST requests.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    pub url: String,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

/// Transport-level response data.
#[derive(Debug, Clone)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpTransportResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Body of a 2xx response, or a provider error carrying the status and
    /// the raw body text.
    pub fn into_success_body(self) -> Result<Vec<u8>, LlmError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            let text = String::from_utf8_lossy(&self.body).into_owned();
            Err(LlmError::api_error(self.status, text))
        }
    }
}

/// Custom HTTP transport for JSON requests.
///
/// Implementations must perform at most one network exchange per call.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, LlmError>;
}

/// [`HttpTransport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub const fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &HttpConfig) -> Result<Self, LlmError> {
        Ok(Self::new(build_http_client_from_config(config)?))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, LlmError> {
        let response = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .json(&request.body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        tracing::trace!(status, bytes = body.len(), url = %request.url, "received response");

        Ok(HttpTransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpTransportResponse {
        HttpTransportResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn success_body_passes_through() {
        let body = response(200, "{}").into_success_body().unwrap();
        assert_eq!(body, b"{}");
    }

    #[test]
    fn non_success_keeps_status_and_raw_body() {
        let err = response(503, "upstream <b>down</b>")
            .into_success_body()
            .unwrap_err();
        assert_eq!(err, LlmError::api_error(503, "upstream <b>down</b>"));
    }
}
