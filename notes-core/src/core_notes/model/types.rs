/*
    types.rs - Common types for note models

    Defines:
    - Note identifiers
    - UTC timestamps
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// UTC wall-clock instant, serialized as RFC 3339
pub type Timestamp = DateTime<Utc>;

/// Unique identifier for a note
///
/// Ordering follows the underlying UUID bytes and is used as the
/// secondary key when listing notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub Uuid);

impl NoteId {
    pub fn new(id: Uuid) -> Self {
        NoteId(id)
    }

    /// Generate a fresh random (v4) identifier
    pub fn generate() -> Self {
        NoteId(Uuid::new_v4())
    }

    /// Parse an identifier from its textual form.
    ///
    /// Returns `None` for anything that is not a syntactically valid UUID;
    /// callers treat that the same as an unknown id.
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(NoteId)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for NoteId {
    fn from(id: Uuid) -> Self {
        NoteId(id)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique() {
        let a = NoteId::generate();
        let b = NoteId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_parse_accepts_display_form() {
        let id = NoteId::generate();
        assert_eq!(NoteId::parse(&id.to_string()), Some(id));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(NoteId::parse("not-a-uuid"), None);
        assert_eq!(NoteId::parse(""), None);
        assert_eq!(NoteId::parse("12345"), None);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = NoteId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
