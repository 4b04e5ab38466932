//! HTTP API for the notes service

pub mod error;
pub mod http;

pub use error::{ApiError, ApiResult};
pub use http::{build_app, build_router, AppState, NotesServer};
