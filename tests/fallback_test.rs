//! Primary/secondary fallback behavior of `ContentClient::generate`
//!
//! Request and response shapes follow the public chat-completion and
//! `generateContent` API references.

mod support;

use draftsmith::prelude::*;
use std::time::Duration;
use support::*;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn primary_success_never_touches_secondary() {
    let servers = Servers::start().await;
    Mock::given(method("POST"))
        .and(path(OPENAI_PATH))
        .and(header("Authorization", "Bearer test-openai-key"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(serde_json::json!({
            "stream": false,
            "max_tokens": 2000,
            "messages": [
                { "role": "system" },
                { "role": "user", "content": "Write about tea" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion("Tea is great")))
        .expect(1)
        .mount(&servers.openai)
        .await;
    servers.gemini_replies("unused", 0).await;

    let text = servers
        .client()
        .generate("Write about tea", ContentKind::Post)
        .await
        .unwrap();
    assert_eq!(text, "Tea is great");
}

#[tokio::test]
async fn primary_error_status_falls_back_to_secondary_once() {
    let servers = Servers::start().await;
    servers.openai_fails(1).await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .and(query_param("key", GEMINI_KEY))
        .and(body_string_contains("Write about tea"))
        .and(body_partial_json(serde_json::json!({
            "generationConfig": { "topK": 40, "maxOutputTokens": 2048 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_candidates("Gemini tea")))
        .expect(1)
        .mount(&servers.gemini)
        .await;

    let text = servers
        .client()
        .generate("Write about tea", ContentKind::Post)
        .await
        .unwrap();
    assert_eq!(text, "Gemini tea");
}

#[tokio::test]
async fn every_content_kind_falls_back() {
    for kind in ContentKind::ALL {
        let servers = Servers::start().await;
        servers.openai_fails(1).await;
        servers.gemini_replies("fallback", 1).await;

        let text = servers.client().generate("prompt", kind).await.unwrap();
        assert_eq!(text, "fallback", "kind {kind}");
    }
}

#[tokio::test]
async fn unreachable_primary_falls_back() {
    let servers = Servers::start().await;
    servers.gemini_replies("from gemini", 1).await;

    let config = servers
        .config()
        .with_openai(OpenAiConfig::new(OPENAI_KEY).with_base_url("http://127.0.0.1:9/v1"));
    let client = ContentClient::new(config).unwrap();

    let text = client.generate("hello", ContentKind::Title).await.unwrap();
    assert_eq!(text, "from gemini");
}

#[tokio::test]
async fn transport_failures_keep_credentials_out_of_the_error() {
    let config = ContentConfig::default()
        .with_openai(OpenAiConfig::new(OPENAI_KEY).with_base_url("http://127.0.0.1:9/v1"))
        .with_gemini(GeminiConfig::new(GEMINI_KEY).with_base_url("http://127.0.0.1:9/v1beta"))
        .with_timeout(5);
    let client = ContentClient::new(config).unwrap();

    let err = client.generate("hi", ContentKind::Title).await.unwrap_err();
    let LlmError::AllProvidersFailed { attempts } = &err else {
        panic!("unexpected error: {err:?}");
    };
    assert_eq!(attempts.len(), 2);
    assert!(attempts.iter().all(|a| a.message.starts_with("HTTP error")));
    assert!(!err.to_string().contains(GEMINI_KEY));
    assert!(!err.to_string().contains(OPENAI_KEY));
}

#[tokio::test]
async fn slow_primary_times_out_and_falls_back() {
    let servers = Servers::start().await;
    Mock::given(method("POST"))
        .and(path(OPENAI_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_completion("too late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&servers.openai)
        .await;
    servers.gemini_replies("on time", 1).await;

    let client = ContentClient::new(servers.config().with_timeout(1)).unwrap();
    let text = client.generate("hello", ContentKind::Summary).await.unwrap();
    assert_eq!(text, "on time");
}

#[tokio::test]
async fn both_failing_yields_error_after_exactly_two_calls() {
    let servers = Servers::start().await;
    servers.openai_fails(1).await;
    servers.gemini_fails(1).await;

    let err = servers
        .client()
        .generate("hello", ContentKind::Seo)
        .await
        .unwrap_err();

    match err {
        LlmError::AllProvidersFailed { attempts } => {
            assert_eq!(attempts.len(), 2);
            assert_eq!(attempts[0].provider, "openai");
            assert_eq!(attempts[1].provider, "gemini");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_text_field_is_empty_output_in_lenient_mode() {
    let servers = Servers::start().await;
    Mock::given(method("POST"))
        .and(path(OPENAI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
        .expect(1)
        .mount(&servers.openai)
        .await;
    servers.gemini_replies("unused", 0).await;

    let text = servers
        .client()
        .generate("hello", ContentKind::Title)
        .await
        .unwrap();
    assert_eq!(text, "");
}

#[tokio::test]
async fn missing_text_field_falls_back_in_strict_mode() {
    let servers = Servers::start().await;
    Mock::given(method("POST"))
        .and(path(OPENAI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
        .expect(1)
        .mount(&servers.openai)
        .await;
    servers.gemini_replies("strict fallback", 1).await;

    let client = ContentClient::new(servers.config().with_strict_responses(true)).unwrap();
    let text = client.generate("hello", ContentKind::Title).await.unwrap();
    assert_eq!(text, "strict fallback");
}

#[tokio::test]
async fn non_json_body_is_a_failure_and_falls_back() {
    let servers = Servers::start().await;
    Mock::given(method("POST"))
        .and(path(OPENAI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .expect(1)
        .mount(&servers.openai)
        .await;
    servers.gemini_replies("parsed", 1).await;

    let text = servers
        .client()
        .generate("hello", ContentKind::Post)
        .await
        .unwrap();
    assert_eq!(text, "parsed");
}

#[tokio::test]
async fn interceptor_headers_reach_both_providers() {
    struct TagInterceptor;

    impl HttpInterceptor for TagInterceptor {
        fn on_before_send(
            &self,
            ctx: &HttpRequestContext,
            builder: reqwest::RequestBuilder,
            _body: &serde_json::Value,
            _headers: &reqwest::header::HeaderMap,
        ) -> Result<reqwest::RequestBuilder, LlmError> {
            assert!(!ctx.url.contains(GEMINI_KEY));
            Ok(builder.header("X-Draft-Provider", ctx.provider_id.clone()))
        }
    }

    let servers = Servers::start().await;
    Mock::given(method("POST"))
        .and(header("X-Draft-Provider", "openai"))
        .respond_with(server_error())
        .expect(1)
        .mount(&servers.openai)
        .await;
    Mock::given(method("POST"))
        .and(header("X-Draft-Provider", "gemini"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_candidates("tagged")))
        .expect(1)
        .mount(&servers.gemini)
        .await;

    let client = ContentClient::builder(servers.config())
        .interceptor(std::sync::Arc::new(TagInterceptor))
        .interceptor(std::sync::Arc::new(LoggingInterceptor))
        .build()
        .unwrap();
    let text = client.generate("hello", ContentKind::Title).await.unwrap();
    assert_eq!(text, "tagged");
}

#[tokio::test]
async fn rejected_response_reaches_error_hooks_and_falls_back() {
    use std::sync::{Arc, Mutex};

    struct RejectPrimary;

    impl HttpInterceptor for RejectPrimary {
        fn on_response(
            &self,
            ctx: &HttpRequestContext,
            _response: &reqwest::Response,
        ) -> Result<(), LlmError> {
            if ctx.provider_id == "openai" {
                return Err(LlmError::InvalidInput("response rejected".to_string()));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct ErrorLog(Mutex<Vec<(String, String)>>);

    impl HttpInterceptor for ErrorLog {
        fn on_error(&self, ctx: &HttpRequestContext, error: &LlmError) {
            self.0
                .lock()
                .unwrap()
                .push((ctx.provider_id.clone(), error.to_string()));
        }
    }

    let servers = Servers::start().await;
    servers.openai_replies("rejected", 1).await;
    servers.gemini_replies("accepted", 1).await;

    let errors = Arc::new(ErrorLog::default());
    let client = ContentClient::builder(servers.config())
        .interceptor(Arc::new(RejectPrimary))
        .interceptor(errors.clone())
        .build()
        .unwrap();

    let text = client.generate("hello", ContentKind::Post).await.unwrap();
    assert_eq!(text, "accepted");

    let seen = errors.0.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "openai");
    assert!(seen[0].1.contains("response rejected"));
}
