//! Error type for the fallible edges of the crate.
//!
//! Evaluation, aggregation, scheduling, and sorting never fail; only
//! configuration loading and the optional validation layer return errors.

use thiserror::Error;

use crate::validation::ValidationError;

/// Crate error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("validation failed: {}", summarize(.0))]
    Validation(Vec<ValidationError>),
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::Validation(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
