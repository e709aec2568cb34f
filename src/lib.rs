//! # frontdesk-llm
//!
//! Text generation for the hotel voice assistant, behind one call:
//! [`GenerationClient::generate`]. The client routes to one of two backends
//! chosen by configuration:
//!
//! - **OpenAI-style**: hosted chat completion API (`/chat/completions`)
//! - **Local**: self-hosted model server (`/api/generate`)
//!
//! The client is stateless. Every call is one HTTP request, with no retries,
//! no streaming and no conversation memory.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use frontdesk_llm::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), LlmError> {
//!     frontdesk_llm::telemetry::init_from_env()?;
//!
//!     // LLM_BACKEND=local, LOCAL_LLM_MODEL=llama3, ...
//!     let client = GenerationClient::from_env()?;
//!     let reply = client
//!         .generate(
//!             &GenerationRequest::new("Is the pool open late?")
//!                 .with_system_prompt("You are the concierge. Answer in one sentence."),
//!         )
//!         .await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod defaults;
pub mod error;
pub mod execution;
pub mod providers;
pub mod telemetry;
pub mod traits;
pub mod types;

pub use client::GenerationClient;
pub use config::{Backend, GenerationConfig};
pub use error::{ErrorCategory, LlmError};
pub use traits::GenerationCapability;
pub use types::{GenerationRequest, HttpConfig};

/// Commonly used items.
pub mod prelude {
    pub use crate::client::GenerationClient;
    pub use crate::config::{Backend, GenerationConfig};
    pub use crate::error::{ErrorCategory, LlmError};
    pub use crate::traits::GenerationCapability;
    pub use crate::types::GenerationRequest;
}
