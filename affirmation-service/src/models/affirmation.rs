//! Request and response shapes for `/generate`.

use crate::error::GenerateError;
use serde::Serialize;
use serde_json::Value;
use validator::Validate;

/// Number of affirmations produced when the request omits `count`.
pub const DEFAULT_COUNT: i64 = 5;

/// A validated generation request.
///
/// Construct through [`GenerationRequest::from_payload`]; the constructor
/// rejects any payload that fails a check, so a value of this type is always
/// safe to turn into a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct GenerationRequest {
    #[validate(length(max = 50))]
    pub theme: String,
    #[validate(range(min = 1, max = 10))]
    pub count: i64,
}

impl GenerationRequest {
    /// Decodes and validates a JSON payload.
    ///
    /// Checks run in a fixed order and stop at the first failure: payload
    /// present, `count` numeric, `theme` non-empty, `theme` length, `count`
    /// range.
    pub fn from_payload(payload: Option<&Value>) -> Result<Self, GenerateError> {
        let fields = payload
            .and_then(Value::as_object)
            .filter(|fields| !fields.is_empty())
            .ok_or(GenerateError::NoData)?;

        let count = parse_count(fields.get("count"))?;

        let theme = match fields.get("theme") {
            None | Some(Value::Null) => "",
            Some(Value::String(theme)) => theme.trim(),
            Some(_) => return Err(GenerateError::InvalidTheme),
        };
        if theme.is_empty() {
            return Err(GenerateError::EmptyTheme);
        }

        let request = GenerationRequest {
            theme: theme.to_string(),
            count,
        };

        if let Err(errors) = request.validate() {
            let fields = errors.field_errors();
            if fields.contains_key("theme") {
                return Err(GenerateError::ThemeTooLong);
            }
            return Err(GenerateError::CountOutOfRange);
        }

        Ok(request)
    }
}

/// Accepts integers, floats (truncated toward zero) and integer strings.
fn parse_count(value: Option<&Value>) -> Result<i64, GenerateError> {
    match value {
        None => Ok(DEFAULT_COUNT),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            })
            .ok_or(GenerateError::InvalidCount),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| GenerateError::InvalidCount),
        Some(_) => Err(GenerateError::InvalidCount),
    }
}

/// Successful `/generate` body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenerationResult {
    pub affirmations: Vec<String>,
}
