//! Backend adapters.
//!
//! Exactly two backends exist; [`BackendAdapter`] is the closed set the
//! client routes over.

pub mod local;
pub mod openai;

use std::sync::Arc;

use crate::config::{Backend, GenerationConfig};
use crate::error::LlmError;
use crate::execution::http::transport::HttpTransport;
use crate::types::GenerationRequest;

pub use local::LocalModelAdapter;
pub use openai::OpenAiAdapter;

/// The adapter selected by configuration.
#[derive(Debug, Clone)]
pub enum BackendAdapter {
    OpenAi(OpenAiAdapter),
    Local(LocalModelAdapter),
}

impl BackendAdapter {
    pub fn from_config(config: &GenerationConfig, transport: Arc<dyn HttpTransport>) -> Self {
        match config.backend {
            Backend::OpenAi => Self::OpenAi(OpenAiAdapter::new(config, transport)),
            Backend::Local => Self::Local(LocalModelAdapter::new(config, transport)),
        }
    }

    pub const fn backend(&self) -> Backend {
        match self {
            Self::OpenAi(_) => Backend::OpenAi,
            Self::Local(_) => Backend::Local,
        }
    }

    pub fn model(&self) -> &str {
        match self {
            Self::OpenAi(adapter) => adapter.model(),
            Self::Local(adapter) => adapter.model(),
        }
    }

    /// Send one request to the backend and return the trimmed text.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        match self {
            Self::OpenAi(adapter) => adapter.generate(request).await,
            Self::Local(adapter) => adapter.generate(request).await,
        }
    }
}
