//! Note use-case service
//!
//! Owns validation and timestamping policy, and turns store absence
//! signals into `NotFound` errors. Ids arrive as raw strings; anything that
//! does not parse as a note id is simply an unknown note.

use super::errors::{NoteServiceError, NoteServiceResult};
use super::validation::{normalize_content, validate_title};
use crate::core_notes::clock::{Clock, SystemClock};
use crate::core_notes::model::{Note, NoteId};
use crate::core_notes::store::NoteStore;
use crate::metrics::{record_counter, Timer};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Title/content payload for create and update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteInput {
    pub title: String,
    pub content: Option<String>,
}

impl NoteInput {
    pub fn new(title: impl Into<String>, content: Option<String>) -> Self {
        NoteInput {
            title: title.into(),
            content,
        }
    }
}

/// Request-handling layer over a `NoteStore`
#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
    clock: Arc<dyn Clock>,
}

impl NoteService {
    /// Create a service stamping notes with the wall clock
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Create a service with an explicit time source
    pub fn with_clock(store: Arc<dyn NoteStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Backing store, for health reporting
    pub fn store(&self) -> &Arc<dyn NoteStore> {
        &self.store
    }

    /// Create a note with a fresh id and `created_at == updated_at == now`
    pub fn create(&self, input: NoteInput) -> NoteServiceResult<Note> {
        let timer = Timer::new("notes.operation.duration_ms");
        let title = self.validate(&input.title)?;

        let note = Note::new(
            NoteId::generate(),
            title,
            normalize_content(input.content),
            self.clock.now(),
        );
        let note = self.store.create(note);

        record_counter("notes.created", 1);
        info!(note_id = %note.id, "Note created");
        timer.stop();
        Ok(note)
    }

    /// All notes, most recently updated first
    pub fn list(&self) -> Vec<Note> {
        let notes = self.store.get_all();
        debug!(count = notes.len(), "Listed notes");
        notes
    }

    /// Fetch one note
    pub fn get(&self, id: &str) -> NoteServiceResult<Note> {
        let note_id = self.resolve_id(id)?;
        self.store
            .get_by_id(&note_id)
            .ok_or_else(|| self.not_found(id))
    }

    /// Replace title and content of an existing note.
    ///
    /// Validation runs before the lookup, so an invalid title is reported
    /// even for unknown ids.
    pub fn update(&self, id: &str, input: NoteInput) -> NoteServiceResult<Note> {
        let timer = Timer::new("notes.operation.duration_ms");
        let title = self.validate(&input.title)?;
        let note_id = self.resolve_id(id)?;

        let existing = self
            .store
            .get_by_id(&note_id)
            .ok_or_else(|| self.not_found(id))?;

        let revised = existing.revise(title, normalize_content(input.content), self.clock.now());

        // A concurrent delete between the lookup and here surfaces as not found.
        let updated = self
            .store
            .update(revised)
            .ok_or_else(|| self.not_found(id))?;

        record_counter("notes.updated", 1);
        info!(note_id = %updated.id, "Note updated");
        timer.stop();
        Ok(updated)
    }

    /// Remove a note
    pub fn delete(&self, id: &str) -> NoteServiceResult<()> {
        let note_id = self.resolve_id(id)?;
        if !self.store.delete(&note_id) {
            return Err(self.not_found(id));
        }

        record_counter("notes.deleted", 1);
        info!(note_id = %note_id, "Note deleted");
        Ok(())
    }

    fn validate(&self, title: &str) -> NoteServiceResult<String> {
        validate_title(title).map_err(|err| {
            record_counter("notes.validation_failed", 1);
            warn!(field = err.field(), "Rejected note input: {}", err);
            NoteServiceError::from(err)
        })
    }

    fn resolve_id(&self, id: &str) -> NoteServiceResult<NoteId> {
        NoteId::parse(id).ok_or_else(|| self.not_found(id))
    }

    fn not_found(&self, id: &str) -> NoteServiceError {
        record_counter("notes.not_found", 1);
        debug!(note_id = id, "Note not found");
        NoteServiceError::NotFound(id.to_string())
    }
}
