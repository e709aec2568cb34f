//! Generation client.
//!
//! [`GenerationClient`] is the composition root: it owns the configuration,
//! picks the backend adapter once at construction and routes every
//! [`GenerationClient::generate`] call to it.
//!
//! ```rust,ignore
//! use frontdesk_llm::{GenerationClient, GenerationRequest};
//!
//! let client = GenerationClient::from_env()?;
//! let reply = client
//!     .generate(
//!         &GenerationRequest::new("What time is check-out?")
//!             .with_system_prompt("You are the front desk of the Harbor Hotel."),
//!     )
//!     .await?;
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use tracing::Instrument;

use crate::config::{Backend, GenerationConfig};
use crate::error::LlmError;
use crate::execution::http::transport::{HttpTransport, ReqwestTransport};
use crate::providers::BackendAdapter;
use crate::traits::GenerationCapability;
use crate::types::GenerationRequest;

/// Stateless text-generation facade over the configured backend.
///
/// Cheap to clone; clones share the underlying HTTP connection pool. Safe to
/// use from many tasks at once since no call mutates client state.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    config: Arc<GenerationConfig>,
    adapter: BackendAdapter,
}

impl GenerationClient {
    /// Build a client from process environment variables.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::new(GenerationConfig::from_env()?)
    }

    /// Build a client using the default reqwest transport.
    pub fn new(config: GenerationConfig) -> Result<Self, LlmError> {
        let transport = ReqwestTransport::from_config(&config.http)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Build a client that sends requests through `transport`.
    pub fn with_transport(config: GenerationConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let adapter = BackendAdapter::from_config(&config, transport);
        tracing::debug!(
            backend = %config.backend,
            model = %config.model(),
            "generation client ready"
        );
        Self {
            config: Arc::new(config),
            adapter,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub const fn backend(&self) -> Backend {
        self.adapter.backend()
    }

    pub fn model(&self) -> &str {
        self.adapter.model()
    }

    /// Generate text for `request`.
    ///
    /// Performs exactly one outbound request and never retries. Empty prompts
    /// and a missing OpenAI key fail before any network I/O.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        validate_request(request)?;

        let span = tracing::debug_span!(
            "generate",
            backend = %self.backend(),
            model = %self.model(),
            prompt_chars = request.prompt.chars().count(),
        );

        async {
            let result = self.adapter.generate(request).await;
            match &result {
                Ok(text) => tracing::debug!(response_chars = text.chars().count(), "generated"),
                Err(err) => tracing::warn!(error = %err, "generation failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    /// Generate text for a bare prompt with default system prompt and temperature.
    pub async fn generate_text(&self, prompt: impl Into<String>) -> Result<String, LlmError> {
        self.generate(&GenerationRequest::new(prompt)).await
    }
}

#[async_trait]
impl GenerationCapability for GenerationClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        GenerationClient::generate(self, request).await
    }
}

fn validate_request(request: &GenerationRequest) -> Result<(), LlmError> {
    if request.prompt.trim().is_empty() {
        return Err(LlmError::InvalidInput("prompt must not be empty".to_string()));
    }
    Ok(())
}
