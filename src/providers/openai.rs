//! OpenAI-style chat completion adapter.
//!
//! Sends `POST {base_url}/chat/completions` with a system/user message pair
//! and reads back `choices[0].message.content`.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;
use crate::defaults;
use crate::error::LlmError;
use crate::execution::http::headers::HttpHeaderBuilder;
use crate::execution::http::transport::{HttpTransport, HttpTransportRequest};
use crate::types::GenerationRequest;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Default, Deserialize)]
struct Choice {
    #[serde(default)]
    message: ChoiceMessage,
}

#[derive(Debug, Default, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Adapter for OpenAI-compatible chat completion endpoints.
#[derive(Clone)]
pub struct OpenAiAdapter {
    api_key: Option<SecretString>,
    model: String,
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for OpenAiAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiAdapter")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

impl OpenAiAdapter {
    pub fn new(config: &GenerationConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn api_key(&self) -> Result<&str, LlmError> {
        self.api_key
            .as_ref()
            .map(|k| k.expose_secret())
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                LlmError::ConfigurationError(
                    "OpenAI API key is required for the openai backend (set OPENAI_API_KEY)"
                        .to_string(),
                )
            })
    }

    /// Build the transport request without sending it.
    ///
    /// Fails with a configuration error when no API key is configured.
    pub fn build_request(
        &self,
        request: &GenerationRequest,
    ) -> Result<HttpTransportRequest, LlmError> {
        let api_key = self.api_key()?;
        let headers = HttpHeaderBuilder::new()
            .with_json_content_type()
            .with_bearer_auth(api_key)?
            .build();

        let system_prompt = request
            .effective_system_prompt()
            .unwrap_or(defaults::SYSTEM_PROMPT);
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            temperature: request.temperature,
        };

        Ok(HttpTransportRequest {
            url: self.chat_completions_url(),
            headers,
            body: serde_json::to_value(&body)?,
        })
    }

    /// Extract the generated text from a successful response body.
    ///
    /// An empty `choices` list is a valid, empty completion.
    pub fn parse_response(body: &[u8]) -> Result<String, LlmError> {
        let response: ChatCompletionResponse = serde_json::from_slice(body)?;
        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default())
    }

    pub(crate) async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        let http_request = self.build_request(request)?;
        let response = self.transport.execute_json(http_request).await?;
        let body = response.into_success_body()?;
        Self::parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Backend;
    use crate::execution::http::transport::ReqwestTransport;
    use crate::types::HttpConfig;
    use reqwest::header::AUTHORIZATION;

    fn adapter(config: &GenerationConfig) -> OpenAiAdapter {
        let transport = ReqwestTransport::from_config(&HttpConfig::default()).unwrap();
        OpenAiAdapter::new(config, Arc::new(transport))
    }

    #[test]
    fn request_carries_model_messages_and_temperature() {
        let config = GenerationConfig::new(Backend::OpenAi).with_openai_api_key("sk-test");
        let req = GenerationRequest::new("Check in time?")
            .with_system_prompt("You are the front desk.")
            .with_temperature(0.2);

        let built = adapter(&config).build_request(&req).unwrap();
        assert_eq!(built.url, "https://api.openai.com/v1/chat/completions");
        assert_eq!(
            built.headers.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer sk-test"
        );
        assert_eq!(
            built.body,
            serde_json::json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "You are the front desk."},
                    {"role": "user", "content": "Check in time?"}
                ],
                "temperature": 0.2
            })
        );
    }

    #[test]
    fn default_persona_when_no_system_prompt() {
        let config = GenerationConfig::new(Backend::OpenAi).with_openai_api_key("sk-test");
        let built = adapter(&config)
            .build_request(&GenerationRequest::new("hi"))
            .unwrap();
        assert_eq!(
            built.body["messages"][0]["content"],
            "You are a helpful assistant."
        );
        assert_eq!(built.body["temperature"], 0.7);
    }

    #[test]
    fn empty_system_prompt_falls_back_to_default_persona() {
        let config = GenerationConfig::new(Backend::OpenAi).with_openai_api_key("sk-test");
        let req = GenerationRequest::new("Check in time?").with_system_prompt("");

        let built = adapter(&config).build_request(&req).unwrap();
        assert_eq!(
            built.body["messages"][0]["content"],
            "You are a helpful assistant."
        );
        assert_eq!(built.body["messages"][1]["content"], "Check in time?");
    }

    #[test]
    fn missing_or_blank_key_is_configuration_error() {
        let config = GenerationConfig::new(Backend::OpenAi);
        let err = adapter(&config)
            .build_request(&GenerationRequest::new("hi"))
            .unwrap_err();
        assert!(err.is_configuration_error());

        let config = config.with_openai_api_key("");
        let err = adapter(&config)
            .build_request(&GenerationRequest::new("hi"))
            .unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn parses_first_choice_trimmed() {
        let body = br#"{
            "id": "chatcmpl-123",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "  Check-in is at 3 PM.\n"}},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
            ],
            "usage": {"total_tokens": 21}
        }"#;
        assert_eq!(
            OpenAiAdapter::parse_response(body).unwrap(),
            "Check-in is at 3 PM."
        );
    }

    #[test]
    fn empty_choices_is_empty_success() {
        assert_eq!(
            OpenAiAdapter::parse_response(br#"{"choices": []}"#).unwrap(),
            ""
        );
    }

    #[test]
    fn null_content_is_empty_success() {
        let body = br#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        assert_eq!(OpenAiAdapter::parse_response(body).unwrap(), "");
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = OpenAiAdapter::parse_response(b"<html>").unwrap_err();
        assert!(matches!(err, LlmError::JsonError(_)));
    }
}
