//! Mock API tests for the local model backend.

mod support;

use frontdesk_llm::prelude::*;
use serde_json::json;
use support::local_generation;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(base_url: String) -> GenerationClient {
    let config = GenerationConfig::new(Backend::Local)
        .with_local_base_url(base_url)
        .with_local_model("llama3");
    GenerationClient::new(config).expect("client")
}

#[tokio::test]
async fn system_prompt_is_joined_with_blank_line() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_json(json!({
            "model": "llama3",
            "prompt": "You are the front desk.\n\nCheck in time?",
            "stream": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(local_generation(" 3 PM. \n")))
        .expect(1)
        .mount(&server)
        .await;

    let request = GenerationRequest::new("Check in time?")
        .with_system_prompt("You are the front desk.")
        .with_temperature(1.9);
    let text = client_for(server.uri()).generate(&request).await.unwrap();
    assert_eq!(text, "3 PM.");
}

#[tokio::test]
async fn bare_prompt_without_system_prompt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_json(json!({
            "model": "llama3",
            "prompt": "Check in time?",
            "stream": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(local_generation("3 PM.")))
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(server.uri())
        .generate_text("Check in time?")
        .await
        .unwrap();
    assert_eq!(text, "3 PM.");
}

#[tokio::test]
async fn trailing_slash_on_base_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(local_generation("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(format!("{}/", server.uri()))
        .generate_text("ping")
        .await
        .unwrap();
    assert_eq!(text, "ok");
}

#[tokio::test]
async fn missing_response_field_is_empty_string() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "done": true })))
        .mount(&server)
        .await;

    let text = client_for(server.uri())
        .generate_text("ping")
        .await
        .unwrap();
    assert_eq!(text, "");
}

#[tokio::test]
async fn server_error_carries_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(server.uri())
        .generate_text("ping")
        .await
        .unwrap_err();
    assert!(err.is_provider_error());
    let message = err.to_string();
    assert!(message.contains("500"));
    assert!(message.contains("internal error"));
}

#[tokio::test]
async fn model_not_found_is_client_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(r#"{"error":"model 'llama3' not found, try pulling it first"}"#),
        )
        .mount(&server)
        .await;

    let err = client_for(server.uri())
        .generate_text("ping")
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.category(), ErrorCategory::Client);
    assert!(err.to_string().contains("try pulling it first"));
}
