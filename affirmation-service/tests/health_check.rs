//! Probe and static page tests for affirmation-service.

mod common;

use common::TestApp;
use wiremock::MockServer;

#[tokio::test]
async fn health_check_works() {
    let gemini = MockServer::start().await;
    let app = TestApp::spawn(&gemini).await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "affirmation-service");
    assert_eq!(body["model_configured"], true);
}

#[tokio::test]
async fn readiness_reflects_model_configuration() {
    let gemini = MockServer::start().await;
    let configured = TestApp::spawn(&gemini).await;
    let unconfigured = TestApp::spawn_unconfigured().await;

    let ready = configured
        .client
        .get(format!("{}/ready", configured.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(ready.status().as_u16(), 200);

    let not_ready = unconfigured
        .client
        .get(format!("{}/ready", unconfigured.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(not_ready.status().as_u16(), 503);
}

#[tokio::test]
async fn index_page_is_served_without_api_key() {
    let app = TestApp::spawn_unconfigured().await;

    let response = app
        .client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    assert!(response.headers().contains_key("x-request-id"));

    let html = response.text().await.unwrap();
    assert!(html.contains("affirmation-form"));
}

#[tokio::test]
async fn frontend_script_is_served() {
    let app = TestApp::spawn_unconfigured().await;

    let response = app
        .client
        .get(format!("{}/static/script.js", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert!(response.text().await.unwrap().contains("/generate"));
}
