//! Shared test helpers.

#![allow(dead_code)]

use async_trait::async_trait;
use frontdesk_llm::LlmError;
use frontdesk_llm::execution::http::transport::{
    HttpTransport, HttpTransportRequest, HttpTransportResponse,
};
use std::sync::{Arc, Mutex};

/// Transport spy that records every request and answers with a canned response.
#[derive(Clone)]
pub struct RecordingTransport {
    calls: Arc<Mutex<Vec<HttpTransportRequest>>>,
    status: u16,
    body: Vec<u8>,
}

impl RecordingTransport {
    pub fn responding(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            calls: Arc::default(),
            status,
            body: body.into(),
        }
    }

    pub fn responding_json(status: u16, json: serde_json::Value) -> Self {
        Self::responding(status, serde_json::to_vec(&json).expect("json bytes"))
    }

    pub fn calls(&self) -> Vec<HttpTransportRequest> {
        self.calls.lock().expect("lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("lock").len()
    }

    pub fn shared(&self) -> Arc<dyn HttpTransport> {
        Arc::new(self.clone())
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, LlmError> {
        self.calls.lock().expect("lock").push(request);
        Ok(HttpTransportResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

/// Chat completion payload with a single choice.
pub fn chat_completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1677652288,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 9, "completion_tokens": 12, "total_tokens": 21 }
    })
}

/// Local `/api/generate` payload.
pub fn local_generation(response: &str) -> serde_json::Value {
    serde_json::json!({
        "model": "llama3",
        "created_at": "2024-05-01T12:00:00Z",
        "response": response,
        "done": true
    })
}
