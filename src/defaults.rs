//! Default values shared across the client and adapters.

/// Default OpenAI-style chat model
pub const OPENAI_MODEL: &str = "gpt-4o-mini";

/// Default OpenAI-style API prefix; `/chat/completions` is appended
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default local model server
pub const LOCAL_BASE_URL: &str = "http://localhost:11434";

/// Default local model
pub const LOCAL_MODEL: &str = "llama3";

/// Persona used by the OpenAI-style adapter when no system prompt is given
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

pub const TEMPERATURE: f64 = 0.7;

pub mod http {
    use std::time::Duration;

    /// Upper bound on a whole generation round-trip
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    pub const USER_AGENT: &str = concat!("frontdesk-llm/", env!("CARGO_PKG_VERSION"));
}
