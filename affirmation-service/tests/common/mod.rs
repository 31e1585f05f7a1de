//! Test helper module for affirmation-service integration tests.
//!
//! Spawns the real application on a random port. The Gemini API is either
//! absent (no key) or pointed at a local `wiremock` server.

#![allow(dead_code)]

use affirmation_service::config::{default_static_dir, AffirmationConfig, GeminiSettings};
use affirmation_service::startup::Application;
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MODEL: &str = "gemini-1.5-flash";

/// Path the Gemini client posts to for [`TEST_MODEL`].
pub fn generate_content_path() -> String {
    format!("/models/{}:generateContent", TEST_MODEL)
}

/// A Gemini `generateContent` body whose single candidate carries `text`.
pub fn gemini_text_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 60, "candidatesTokenCount": 20 }
    })
}

/// Test application wrapper for integration tests.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn with a Gemini client pointed at `gemini`.
    pub async fn spawn(gemini: &MockServer) -> Self {
        Self::spawn_with(GeminiSettings {
            api_key: Some(Secret::new(TEST_API_KEY.to_string())),
            model: TEST_MODEL.to_string(),
            api_base: gemini.uri(),
            timeout_secs: 5,
        })
        .await
    }

    /// Spawn without an API key.
    pub async fn spawn_unconfigured() -> Self {
        Self::spawn_with(GeminiSettings::default()).await
    }

    async fn spawn_with(gemini: GeminiSettings) -> Self {
        let config = AffirmationConfig {
            common: CoreConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            gemini,
            static_dir: default_static_dir(),
            otlp_endpoint: None,
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build application");
        let port = app.port();

        tokio::spawn(async move {
            let _ = app.run_until_stopped().await;
        });

        Self {
            address: format!("http://127.0.0.1:{}", port),
            port,
            client: reqwest::Client::new(),
        }
    }

    pub async fn post_generate(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/generate", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
