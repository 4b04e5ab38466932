//! HTTP binding for the notes service
//!
//! Routes, handlers, OpenAPI document and the server loop. Handlers stay
//! thin: they decode the request, call [`NoteService`] and encode the result.
//!
//! [`NoteService`]: notes_core::core_notes::NoteService

pub mod api;
pub mod handlers;
pub mod openapi;
pub mod server;
pub mod state;
pub mod types;

pub use api::build_router;
pub use openapi::ApiDoc;
pub use server::{build_app, cors_layer, serve, NotesServer};
pub use state::AppState;
