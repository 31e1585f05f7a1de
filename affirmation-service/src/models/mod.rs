//! Domain models for the affirmation service.

pub mod affirmation;

pub use affirmation::{DEFAULT_COUNT, GenerationRequest, GenerationResult};
