//! `POST /generate`: theme and count in, affirmation lines out.

use axum::{body::Bytes, extract::rejection::BytesRejection, extract::State, Json};
use serde_json::Value;
use service_core::error::AppError;

use crate::error::GenerateError;
use crate::models::{GenerationRequest, GenerationResult};
use crate::services::{build_prompt, parse_affirmations};
use crate::startup::AppState;

pub async fn generate_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<GenerationResult>, AppError> {
    let body = body
        .map_err(|rejection| {
            tracing::info!(reason = %rejection, "Request body could not be read");
        })
        .ok();
    let result = generate_impl(&state, body.as_deref()).await?;
    Ok(Json(result))
}

/// Runs one generation request end to end.
///
/// The model client check comes first, then input validation; the model is
/// called at most once and only for a valid request. `body` is `None` when
/// the request body could not be read.
#[tracing::instrument(skip(state, body), fields(body_len = body.map(<[u8]>::len)))]
pub async fn generate_impl(
    state: &AppState,
    body: Option<&[u8]>,
) -> Result<GenerationResult, GenerateError> {
    let Some(provider) = state.text_provider.as_ref() else {
        tracing::warn!("Rejecting request: Gemini API key not configured");
        return Err(GenerateError::NotConfigured);
    };

    let payload = body.and_then(|body| serde_json::from_slice::<Value>(body).ok());
    let request = GenerationRequest::from_payload(payload.as_ref()).map_err(|e| {
        tracing::info!(reason = %e, "Rejected generation request");
        e
    })?;

    let prompt = build_prompt(&request);

    let response = provider.generate(&prompt).await.map_err(|e| {
        tracing::error!(
            error = %e,
            model = %provider.model_name(),
            theme = %request.theme,
            count = request.count,
            "Affirmation generation failed"
        );
        GenerateError::Upstream
    })?;

    let affirmations = parse_affirmations(&response.text);
    if affirmations.is_empty() {
        tracing::warn!(
            theme = %request.theme,
            raw_len = response.text.len(),
            "Model output contained no usable lines"
        );
        return Err(GenerateError::NoAffirmations);
    }

    tracing::info!(
        requested = request.count,
        returned = affirmations.len(),
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "Generated affirmations"
    );

    Ok(GenerationResult { affirmations })
}
