//! Error Handling Module
//!
//! A single error type, [`LlmError`], covers every way a generation call can
//! fail:
//! - configuration problems detected before any I/O
//! - provider errors (non-success HTTP responses, status and body preserved)
//! - transport failures (connection, timeout, malformed payloads)
//!
//! # Example
//!
//! ```rust,ignore
//! use frontdesk_llm::error::{ErrorCategory, LlmError};
//!
//! let error = LlmError::api_error(500, "internal error");
//! assert_eq!(error.category(), ErrorCategory::Server);
//! assert!(error.is_retryable());
//! ```

use thiserror::Error;

/// Errors surfaced by the generation client and its backend adapters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// Invalid or incomplete configuration (unsupported backend, missing key)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Caller supplied an unusable request
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Non-success HTTP response from a backend; `message` is the raw body
    #[error("API error {code}: {message}")]
    ApiError { code: u16, message: String },

    /// Generic HTTP transport failure
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Request exceeded the configured timeout
    #[error("Timeout error: {0}")]
    TimeoutError(String),

    /// Could not reach the backend
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Response body was not the JSON we expected
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Coarse classification of an [`LlmError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Authentication,
    RateLimit,
    Client,
    Server,
    Network,
    Parsing,
}

impl LlmError {
    /// Build a provider error from a status code and raw body.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
        }
    }

    /// HTTP status carried by a provider error.
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError(_) => ErrorCategory::Configuration,
            Self::InvalidInput(_) => ErrorCategory::Validation,
            Self::ApiError { code, .. } => match code {
                401 | 403 => ErrorCategory::Authentication,
                429 => ErrorCategory::RateLimit,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Client,
            },
            Self::HttpError(_) | Self::TimeoutError(_) | Self::ConnectionError(_) => {
                ErrorCategory::Network
            }
            Self::JsonError(_) => ErrorCategory::Parsing,
        }
    }

    /// True when the remote service answered with a non-success status.
    pub const fn is_provider_error(&self) -> bool {
        matches!(self, Self::ApiError { .. })
    }

    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, Self::ConfigurationError(_))
    }

    /// Whether a caller-side retry has a reasonable chance of succeeding.
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::RateLimit | ErrorCategory::Server | ErrorCategory::Network
        )
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::TimeoutError(err.to_string())
        } else if err.is_connect() {
            Self::ConnectionError(err.to_string())
        } else if err.is_decode() {
            Self::JsonError(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}
