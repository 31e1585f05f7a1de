//! Failure taxonomy for affirmation generation.

use service_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Invalid request: No data provided.")]
    NoData,

    #[error("Invalid 'count'. Must be a number.")]
    InvalidCount,

    #[error("Invalid 'theme'. Must be text.")]
    InvalidTheme,

    #[error("Theme cannot be empty.")]
    EmptyTheme,

    #[error("Theme is too long (max 50 characters).")]
    ThemeTooLong,

    #[error("Number of affirmations must be between 1 and 10.")]
    CountOutOfRange,

    #[error("Server configuration error: Gemini API key not set.")]
    NotConfigured,

    #[error(
        "Failed to generate affirmations. The API may be unavailable or the request may have been blocked. Please try again later."
    )]
    Upstream,

    #[error("The AI could not generate affirmations for this theme. Please try another.")]
    NoAffirmations,
}

impl From<GenerateError> for AppError {
    fn from(err: GenerateError) -> Self {
        let message = err.to_string();
        match err {
            GenerateError::Upstream => AppError::ServiceUnavailable(message),
            GenerateError::NotConfigured | GenerateError::NoAffirmations => {
                AppError::InternalMessage(message)
            }
            GenerateError::NoData
            | GenerateError::InvalidCount
            | GenerateError::InvalidTheme
            | GenerateError::EmptyTheme
            | GenerateError::ThemeTooLong
            | GenerateError::CountOutOfRange => AppError::BadRequest(message),
        }
    }
}
