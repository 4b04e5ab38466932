//! Note service boundary
//!
//! Translates title/content payloads into store calls and store results
//! into typed outcomes. Holds no state of its own.

pub mod errors;
pub mod note_service;
pub mod validation;

pub use errors::{NoteServiceError, NoteServiceResult, ValidationError};
pub use note_service::{NoteInput, NoteService};
pub use validation::{normalize_content, validate_title};
