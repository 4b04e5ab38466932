//! Note fixtures
//!
//! Builders for notes with predictable timestamps, plus a service wired to
//! a [`ManualClock`].

use super::clock::{fixed_instant, ManualClock};
use crate::core_notes::{InMemoryNoteStore, Note, NoteId, NoteInput, NoteService, Timestamp};
use chrono::Duration;
use std::sync::Arc;

/// Builder for notes inserted straight into a store
pub struct TestNoteBuilder {
    id: NoteId,
    title: String,
    content: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl TestNoteBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: NoteId::generate(),
            title: title.into(),
            content: String::new(),
            created_at: fixed_instant(),
            updated_at: fixed_instant(),
        }
    }

    pub fn with_id(mut self, id: NoteId) -> Self {
        self.id = id;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set both timestamps `secs` seconds after the fixed instant
    pub fn at_offset(mut self, secs: i64) -> Self {
        self.created_at = fixed_instant() + Duration::seconds(secs);
        self.updated_at = self.created_at;
        self
    }

    /// Set `updated_at` `secs` seconds after `created_at`
    pub fn updated_after(mut self, secs: i64) -> Self {
        self.updated_at = self.created_at + Duration::seconds(secs);
        self
    }

    pub fn build(self) -> Note {
        Note {
            id: self.id,
            title: self.title,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Service over a fresh in-memory store, driven by a manual clock
pub fn test_service() -> (NoteService, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::default());
    let service = NoteService::with_clock(Arc::new(InMemoryNoteStore::new()), clock.clone());
    (service, clock)
}

/// The grocery note used across walkthrough tests
pub fn groceries_input() -> NoteInput {
    NoteInput::new("Groceries", Some("Milk, eggs".to_string()))
}
