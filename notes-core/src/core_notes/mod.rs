//! Notes domain
//!
//! ## Architecture
//!
//! - **Store**: concurrency-safe container of notes keyed by id
//! - **Service**: validation, identity and timestamp policy on top of a store
//!
//! The store sits behind the `NoteStore` trait so another backend can be
//! plugged in without touching the service.

pub mod clock;
pub mod model;
pub mod service;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use model::{Note, NoteId, Timestamp, TITLE_MAX_CHARS};
pub use service::{NoteInput, NoteService, NoteServiceError, NoteServiceResult, ValidationError};
pub use store::{InMemoryNoteStore, NoteStore};
