//! HTTP handlers for the affirmation service.

pub mod generate;
pub mod health;
