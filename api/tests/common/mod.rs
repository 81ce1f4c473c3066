#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use diacare_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use test_context::AsyncTestContext;
use wiremock::MockServer;

pub const GEMINI_KEY: &str = "test-gemini-key";
pub const DEEPSEEK_KEY: &str = "test-deepseek-key";
pub const GEMINI_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";
pub const DEEPSEEK_PATH: &str = "/v1/chat/completions";

/// One API instance wired to fake Gemini and DeepSeek servers.
pub struct DiacareContext {
    pub gemini: MockServer,
    pub deepseek: MockServer,
    pub server: TestServer,
}

impl DiacareContext {
    pub async fn with_keys(gemini_key: &str, deepseek_key: &str) -> Self {
        let gemini = MockServer::start().await;
        let deepseek = MockServer::start().await;
        let server = test_server(&gemini, &deepseek, gemini_key, deepseek_key);

        Self {
            gemini,
            deepseek,
            server,
        }
    }
}

impl AsyncTestContext for DiacareContext {
    async fn setup() -> Self {
        DiacareContext::with_keys(GEMINI_KEY, DEEPSEEK_KEY).await
    }
}

pub fn test_server(
    gemini: &MockServer,
    deepseek: &MockServer,
    gemini_key: &str,
    deepseek_key: &str,
) -> TestServer {
    let gemini_uri = gemini.uri();
    let deepseek_uri = deepseek.uri();
    let args = Args::try_parse_from([
        "diacare-api",
        "--gemini-api-key",
        gemini_key,
        "--gemini-base-url",
        gemini_uri.as_str(),
        "--deepseek-api-key",
        deepseek_key,
        "--deepseek-base-url",
        deepseek_uri.as_str(),
        "--llm-timeout-secs",
        "5",
        "--metrics-enabled",
        "false",
    ])
    .expect("test arguments should parse");

    let app_state = state(Arc::new(args)).expect("state should build");
    let app = router(app_state).expect("router should build");

    TestServer::new(app).expect("test server should start")
}

/// Body of a successful `generateContent` call whose only part is `text`.
pub fn gemini_text(text: &str) -> Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ], "role": "model" } }
        ]
    })
}

/// Body of a successful chat completion whose only choice says `content`.
pub fn deepseek_text(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content } }
        ]
    })
}
