//! AI provider abstractions and implementations.
//!
//! The handler talks to the model through [`TextProvider`] so the Gemini
//! backend can be swapped for a mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered: {0}")]
    ContentFiltered(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Empty response from provider")]
    EmptyResponse,
}

/// Result of a successful provider call.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Generated text. Never empty.
    pub text: String,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,

    /// Finish reason.
    pub finish_reason: FinishReason,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    ContentFilter,
    Other,
}

impl FinishReason {
    pub fn from_api(reason: Option<&str>) -> Self {
        match reason {
            Some("STOP") | None => FinishReason::Complete,
            Some("MAX_TOKENS") => FinishReason::Length,
            Some("SAFETY") | Some("PROHIBITED_CONTENT") | Some("BLOCKLIST") => {
                FinishReason::ContentFilter
            }
            Some(_) => FinishReason::Other,
        }
    }
}

/// Trait for text generation providers (e.g., Gemini).
///
/// Implementations are shared across requests and must not hold per-request
/// state.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a text response for a single prompt.
    ///
    /// A call that succeeds but carries no text returns
    /// [`ProviderError::EmptyResponse`].
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_reason_mapping() {
        assert_eq!(FinishReason::from_api(None), FinishReason::Complete);
        assert_eq!(FinishReason::from_api(Some("STOP")), FinishReason::Complete);
        assert_eq!(FinishReason::from_api(Some("MAX_TOKENS")), FinishReason::Length);
        assert_eq!(
            FinishReason::from_api(Some("SAFETY")),
            FinishReason::ContentFilter
        );
        assert_eq!(FinishReason::from_api(Some("RECITATION")), FinishReason::Other);
    }
}
