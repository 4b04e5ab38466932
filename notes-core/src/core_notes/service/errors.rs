/*
    errors.rs - Error types for note operations

    Only two outcomes leave the service as errors: malformed input and
    unknown ids. The store itself never fails.
*/

use thiserror::Error;

/// Input that violates a field constraint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field is empty or whitespace-only
    #[error("{field} is required and must not be blank")]
    Blank { field: &'static str },

    /// Field exceeds its maximum length in code points
    #[error("{field} must be at most {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

impl ValidationError {
    /// Name of the offending field, as it appears on the wire
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Blank { field } => field,
            ValidationError::TooLong { field, .. } => field,
        }
    }
}

/// Errors returned by `NoteService`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteServiceError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The id does not resolve to a stored note (including ids that are
    /// not valid identifiers at all)
    #[error("Note not found: {0}")]
    NotFound(String),
}

/// Result type for note service operations
pub type NoteServiceResult<T> = Result<T, NoteServiceError>;
