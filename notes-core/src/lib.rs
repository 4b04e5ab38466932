//! Core of the notes service: domain model, store, service and the
//! operational plumbing (config, logging, metrics, health, shutdown).

pub mod config;
pub mod core_notes;
pub mod health;
pub mod logging;
pub mod metrics;
pub mod shutdown;
pub mod test_utils;

pub use config::Config;
pub use core_notes::{
    InMemoryNoteStore, Note, NoteId, NoteInput, NoteService, NoteServiceError, NoteStore,
};
pub use logging::{init_logging, LogLevel};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Ensure the main exports are accessible
        let _ = LogLevel::Info;
        let _ = Config::default();
        let _ = NoteService::new(std::sync::Arc::new(InMemoryNoteStore::new()));
    }
}
