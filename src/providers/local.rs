//! Local model server adapter.
//!
//! Speaks the non-streaming `/api/generate` protocol of self-hosted model
//! servers: one prompt in, one `response` string out.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;
use crate::error::LlmError;
use crate::execution::http::headers::HttpHeaderBuilder;
use crate::execution::http::transport::{HttpTransport, HttpTransportRequest};
use crate::types::GenerationRequest;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Adapter for a local model server.
#[derive(Clone)]
pub struct LocalModelAdapter {
    model: String,
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for LocalModelAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalModelAdapter")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl LocalModelAdapter {
    pub fn new(config: &GenerationConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            model: config.local_model.clone(),
            base_url: config.local_base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    /// Build the transport request without sending it.
    ///
    /// The protocol has a single prompt field, so a non-empty system prompt is
    /// prepended to the user prompt separated by a blank line. Temperature is
    /// not sent.
    pub fn build_request(
        &self,
        request: &GenerationRequest,
    ) -> Result<HttpTransportRequest, LlmError> {
        let prompt = match request.effective_system_prompt() {
            Some(system) => format!("{system}\n\n{}", request.prompt),
            None => request.prompt.clone(),
        };
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        Ok(HttpTransportRequest {
            url: self.generate_url(),
            headers: HttpHeaderBuilder::new().with_json_content_type().build(),
            body: serde_json::to_value(&body)?,
        })
    }

    /// Extract the `response` field (empty when absent), trimmed.
    pub fn parse_response(body: &[u8]) -> Result<String, LlmError> {
        let response: GenerateResponse = serde_json::from_slice(body)?;
        Ok(response.response.trim().to_string())
    }

    pub(crate) async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        let http_request = self.build_request(request)?;
        let response = self.transport.execute_json(http_request).await?;
        let body = response.into_success_body()?;
        Self::parse_response(&body)
    }
}
