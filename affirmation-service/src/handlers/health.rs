use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. Always 200 while the process serves requests.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "affirmation-service",
        "version": env!("CARGO_PKG_VERSION"),
        "model_configured": state.text_provider.is_some(),
    }))
}

/// Readiness probe. Not ready without a model client.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.text_provider.is_some() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
