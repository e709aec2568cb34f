//! Request and transport types.

use std::time::Duration;

use crate::defaults;

/// A single text-generation request.
///
/// `system_prompt` and `temperature` are optional knobs; adapters decide how
/// (and whether) to use them.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// User prompt; must be non-empty
    pub prompt: String,
    /// Optional system instruction
    pub system_prompt: Option<String>,
    /// Sampling temperature (OpenAI-style backend only)
    pub temperature: f64,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_prompt: None,
            temperature: defaults::TEMPERATURE,
        }
    }

    /// Set the system prompt
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    /// Set the sampling temperature
    pub const fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// System prompt, if one was given and it is non-empty.
    pub fn effective_system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref().filter(|s| !s.is_empty())
    }
}

/// HTTP settings for the default reqwest transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Whole-request timeout
    pub timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: defaults::http::REQUEST_TIMEOUT,
            connect_timeout: defaults::http::CONNECT_TIMEOUT,
            user_agent: defaults::http::USER_AGENT.to_string(),
        }
    }
}
