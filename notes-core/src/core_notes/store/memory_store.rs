//! In-memory note store

use super::{listing_order, NoteStore};
use crate::core_notes::model::{Note, NoteId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-local note store backed by a lock-guarded map.
///
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct InMemoryNoteStore {
    notes: Arc<RwLock<HashMap<NoteId, Note>>>,
}

impl InMemoryNoteStore {
    /// Create an empty store
    pub fn new() -> Self {
        InMemoryNoteStore {
            notes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    // Map mutations are single calls, so a poisoned lock still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<NoteId, Note>> {
        self.notes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<NoteId, Note>> {
        self.notes.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NoteStore for InMemoryNoteStore {
    fn create(&self, note: Note) -> Note {
        self.write().insert(note.id, note.clone());
        note
    }

    fn get_all(&self) -> Vec<Note> {
        let mut notes: Vec<Note> = self.read().values().cloned().collect();
        notes.sort_by(listing_order);
        notes
    }

    fn get_by_id(&self, id: &NoteId) -> Option<Note> {
        self.read().get(id).cloned()
    }

    fn update(&self, mut note: Note) -> Option<Note> {
        let mut notes = self.write();
        let slot = notes.get_mut(&note.id)?;
        // A later write may have landed since the caller read the note.
        note.updated_at = note.updated_at.max(slot.updated_at);
        *slot = note.clone();
        Some(note)
    }

    fn delete(&self, id: &NoteId) -> bool {
        self.write().remove(id).is_some()
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
