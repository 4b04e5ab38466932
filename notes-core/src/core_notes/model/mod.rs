/*
    model - Note domain types
*/

pub mod note;
pub mod types;

pub use note::{Note, TITLE_MAX_CHARS};
pub use types::{NoteId, Timestamp};
