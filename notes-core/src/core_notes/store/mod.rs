/*
    store - Note storage

    The `NoteStore` trait is the capability boundary between the note
    service and whatever holds the records. Absence is reported as
    `None`/`false`; implementations never fail.
*/

use super::model::{Note, NoteId};
use std::cmp::Ordering;

pub mod memory_store;

pub use memory_store::InMemoryNoteStore;

/// Storage backend for notes
///
/// Every method must be safe to call concurrently from many tasks. Writes
/// to a single id are atomic; there is no cross-note transaction.
pub trait NoteStore: Send + Sync {
    /// Insert a fully-formed note, replacing any record with the same id
    fn create(&self, note: Note) -> Note;

    /// Snapshot of every note, most recently updated first
    fn get_all(&self) -> Vec<Note>;

    /// Look up one note
    fn get_by_id(&self, id: &NoteId) -> Option<Note>;

    /// Replace an existing note. Returns `None` and leaves the store
    /// untouched when no note with that id exists.
    ///
    /// The stored `updated_at` never decreases: implementations keep the
    /// later of the incoming and the currently stored value, checked under
    /// the same lock as the replacement. The returned note reflects that.
    fn update(&self, note: Note) -> Option<Note>;

    /// Remove a note, returning whether one was actually removed
    fn delete(&self, id: &NoteId) -> bool;

    /// Number of stored notes
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Listing order shared by all backends: `updated_at` descending, then id ascending
pub fn listing_order(a: &Note, b: &Note) -> Ordering {
    b.updated_at
        .cmp(&a.updated_at)
        .then_with(|| a.id.cmp(&b.id))
}
