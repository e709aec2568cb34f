//! Capability traits.

use async_trait::async_trait;

use crate::error::LlmError;
use crate::types::GenerationRequest;

/// Anything that turns a prompt into generated text.
///
/// [`crate::GenerationClient`] is the production implementation; application
/// code can depend on this trait to substitute a fake in its own tests.
#[async_trait]
pub trait GenerationCapability: Send + Sync {
    /// Generate text for `request`.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError>;

    /// Generate text for a bare prompt with default system prompt and temperature.
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        self.generate(&GenerationRequest::new(prompt)).await
    }
}
