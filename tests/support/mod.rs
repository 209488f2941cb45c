//! Shared helpers for the mock-server tests
//!
//! Each provider gets its own wiremock server so call counts can be asserted
//! per provider with `expect`.

#![allow(dead_code)]

use draftsmith::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const OPENAI_KEY: &str = "test-openai-key";
pub const GEMINI_KEY: &str = "test-gemini-key";
pub const OPENAI_PATH: &str = "/v1/chat/completions";
pub const GEMINI_PATH: &str = "/v1beta/models/gemini-pro:generateContent";

/// Chat-completion response carrying `text` in the first choice.
pub fn chat_completion(text: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1677652288,
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": text },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 9, "completion_tokens": 12, "total_tokens": 21 }
    })
}

/// `generateContent` response carrying `text` in the first candidate part.
pub fn gemini_candidates(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": { "promptTokenCount": 4, "candidatesTokenCount": 8, "totalTokenCount": 12 }
    })
}

pub fn server_error() -> ResponseTemplate {
    ResponseTemplate::new(500).set_body_json(json!({
        "error": { "message": "The server had an error", "type": "server_error" }
    }))
}

pub struct Servers {
    pub openai: MockServer,
    pub gemini: MockServer,
}

impl Servers {
    pub async fn start() -> Self {
        Self {
            openai: MockServer::start().await,
            gemini: MockServer::start().await,
        }
    }

    pub fn config(&self) -> ContentConfig {
        ContentConfig::default()
            .with_openai(
                OpenAiConfig::new(OPENAI_KEY).with_base_url(format!("{}/v1", self.openai.uri())),
            )
            .with_gemini(
                GeminiConfig::new(GEMINI_KEY)
                    .with_base_url(format!("{}/v1beta", self.gemini.uri())),
            )
            .with_timeout(5)
    }

    pub fn client(&self) -> ContentClient {
        ContentClient::new(self.config()).expect("client")
    }

    /// Primary answers every request with `text`.
    pub async fn openai_replies(&self, text: &str, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path(OPENAI_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion(text)))
            .expect(expected_calls)
            .mount(&self.openai)
            .await;
    }

    /// Primary fails every request with HTTP 500.
    pub async fn openai_fails(&self, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path(OPENAI_PATH))
            .respond_with(server_error())
            .expect(expected_calls)
            .mount(&self.openai)
            .await;
    }

    /// Secondary answers every request with `text`.
    pub async fn gemini_replies(&self, text: &str, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path(GEMINI_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_candidates(text)))
            .expect(expected_calls)
            .mount(&self.gemini)
            .await;
    }

    /// Secondary fails every request with HTTP 500.
    pub async fn gemini_fails(&self, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path(GEMINI_PATH))
            .respond_with(server_error())
            .expect(expected_calls)
            .mount(&self.gemini)
            .await;
    }
}
