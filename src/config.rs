//! Client configuration.
//!
//! [`GenerationConfig`] is built once (from the environment or explicitly)
//! and handed to the client, which keeps it for its whole lifetime.
//!
//! ```rust,ignore
//! use frontdesk_llm::config::{Backend, GenerationConfig};
//!
//! let config = GenerationConfig::new(Backend::Local)
//!     .with_local_base_url("http://gpu-box:11434/")
//!     .with_local_model("mistral");
//! ```

use std::fmt;
use std::str::FromStr;

use secrecy::{ExposeSecret, SecretString};

use crate::defaults;
use crate::error::LlmError;
use crate::types::HttpConfig;

/// Environment variable names read by [`GenerationConfig::from_env`].
pub mod env {
    pub const BACKEND: &str = "LLM_BACKEND";
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
    pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
    pub const LOCAL_BASE_URL: &str = "LOCAL_LLM_BASE_URL";
    pub const LOCAL_MODEL: &str = "LOCAL_LLM_MODEL";
}

/// Text-generation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    /// Hosted OpenAI-style chat completion API
    #[default]
    OpenAi,
    /// Self-hosted model server speaking `/api/generate`
    Local,
}

impl Backend {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "local" => Ok(Self::Local),
            other => Err(LlmError::ConfigurationError(format!(
                "Unsupported backend '{other}' (expected 'openai' or 'local')"
            ))),
        }
    }
}

/// Immutable configuration for a [`crate::GenerationClient`].
#[derive(Clone)]
pub struct GenerationConfig {
    pub backend: Backend,
    /// Required at call time when `backend` is [`Backend::OpenAi`]
    pub openai_api_key: Option<SecretString>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub local_base_url: String,
    pub local_model: String,
    pub http: HttpConfig,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(Backend::default())
    }
}

impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("backend", &self.backend)
            .field("has_openai_api_key", &self.has_openai_api_key())
            .field("openai_model", &self.openai_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("local_base_url", &self.local_base_url)
            .field("local_model", &self.local_model)
            .field("http", &self.http)
            .finish()
    }
}

impl GenerationConfig {
    /// Configuration for `backend` with every other field at its default.
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            openai_api_key: None,
            openai_model: defaults::OPENAI_MODEL.to_string(),
            openai_base_url: defaults::OPENAI_BASE_URL.to_string(),
            local_base_url: defaults::LOCAL_BASE_URL.to_string(),
            local_model: defaults::LOCAL_MODEL.to_string(),
            http: HttpConfig::default(),
        }
    }

    /// Load configuration from the process environment.
    ///
    /// See [`env`] for the recognised variables. An unset or empty backend
    /// selector means [`Backend::OpenAi`]; an unrecognised one is an error.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend = match get(env::BACKEND) {
            Some(raw) => raw.parse()?,
            None => Backend::default(),
        };

        let mut config = Self::new(backend);
        if let Some(key) = get(env::OPENAI_API_KEY) {
            config = config.with_openai_api_key(key);
        }
        if let Some(model) = get(env::OPENAI_MODEL) {
            config.openai_model = model;
        }
        if let Some(url) = get(env::OPENAI_BASE_URL) {
            config = config.with_openai_base_url(url);
        }
        if let Some(url) = get(env::LOCAL_BASE_URL) {
            config = config.with_local_base_url(url);
        }
        if let Some(model) = get(env::LOCAL_MODEL) {
            config.local_model = model;
        }

        tracing::debug!(config = ?config, "loaded generation config from environment");
        Ok(config)
    }

    /// Set the OpenAI API key
    pub fn with_openai_api_key(mut self, key: impl Into<String>) -> Self {
        self.openai_api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Set the OpenAI model
    pub fn with_openai_model(mut self, model: impl Into<String>) -> Self {
        self.openai_model = model.into();
        self
    }

    /// Set the OpenAI-style API prefix (trailing `/` removed)
    pub fn with_openai_base_url(mut self, url: impl Into<String>) -> Self {
        self.openai_base_url = normalize_base_url(url.into());
        self
    }

    /// Set the local model server URL (trailing `/` removed)
    pub fn with_local_base_url(mut self, url: impl Into<String>) -> Self {
        self.local_base_url = normalize_base_url(url.into());
        self
    }

    /// Set the local model
    pub fn with_local_model(mut self, model: impl Into<String>) -> Self {
        self.local_model = model.into();
        self
    }

    pub fn with_http_config(mut self, http: HttpConfig) -> Self {
        self.http = http;
        self
    }

    /// Whether a non-empty OpenAI key is configured.
    pub fn has_openai_api_key(&self) -> bool {
        self.openai_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Model name of the selected backend.
    pub fn model(&self) -> &str {
        match self.backend {
            Backend::OpenAi => &self.openai_model,
            Backend::Local => &self.local_model,
        }
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
