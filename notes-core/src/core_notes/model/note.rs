/*
    note.rs - The note record

    A note is a titled piece of text with creation/update timestamps.
    Identity and timestamps are assigned by the service, never by clients.
*/

use super::types::{NoteId, Timestamp};
use serde::{Deserialize, Serialize};

/// Maximum title length, in Unicode code points
pub const TITLE_MAX_CHARS: usize = 256;

/// Canonical note record held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Immutable identifier assigned at creation
    pub id: NoteId,

    /// Trimmed, non-empty title of at most `TITLE_MAX_CHARS` code points
    pub title: String,

    /// Free-form body, empty when not provided
    pub content: String,

    /// Set once at creation
    pub created_at: Timestamp,

    /// Reset on every successful update; never earlier than `created_at`
    pub updated_at: Timestamp,
}

impl Note {
    /// Create a note stamped with `now` for both timestamps
    pub fn new(id: NoteId, title: String, content: String, now: Timestamp) -> Self {
        Note {
            id,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Produce the revised version of this note.
    ///
    /// `id` and `created_at` carry over. `updated_at` never moves backwards,
    /// even if the supplied clock reading is behind the stored one.
    pub fn revise(&self, title: String, content: String, now: Timestamp) -> Self {
        Note {
            id: self.id,
            title,
            content,
            created_at: self.created_at,
            updated_at: now.max(self.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn at(secs: i64) -> Timestamp {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_new_note_timestamps_match() {
        let note = Note::new(NoteId::generate(), "t".into(), String::new(), at(0));
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn test_revise_preserves_identity() {
        let note = Note::new(NoteId::generate(), "a".into(), "x".into(), at(0));
        let revised = note.revise("b".into(), "y".into(), at(10));

        assert_eq!(revised.id, note.id);
        assert_eq!(revised.created_at, note.created_at);
        assert_eq!(revised.updated_at, at(10));
        assert_eq!(revised.title, "b");
        assert_eq!(revised.content, "y");
    }

    #[test]
    fn test_revise_never_moves_updated_at_backwards() {
        let note = Note::new(NoteId::generate(), "a".into(), String::new(), at(100));
        let revised = note.revise("b".into(), String::new(), at(100) - Duration::seconds(5));
        assert_eq!(revised.updated_at, at(100));
        assert!(revised.updated_at >= revised.created_at);
    }
}
