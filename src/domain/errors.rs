//! Domain errors for the stalebot triage system.

use thiserror::Error;

/// Domain-level errors that can occur while applying a staleness policy.
///
/// None of these are retried: the first error aborts the run and any
/// mutations already applied to the tracker stay in place.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

impl From<chrono::ParseError> for DomainError {
    fn from(err: chrono::ParseError) -> Self {
        DomainError::SerializationError(format!("invalid timestamp: {err}"))
    }
}
