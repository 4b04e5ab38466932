//! Shared state for request handlers

use notes_core::core_notes::{InMemoryNoteStore, NoteService, NoteStore};
use notes_core::health::HealthChecker;
use notes_core::metrics::PrometheusExporter;
use std::sync::Arc;

/// Server state shared across requests
pub struct AppState {
    /// Note use cases
    pub service: NoteService,

    /// Backs `GET /health`
    pub health: HealthChecker,

    /// Backs `GET /metrics`; `None` when metrics are disabled
    pub metrics: Option<PrometheusExporter>,
}

impl AppState {
    /// State over an existing service
    pub fn new(service: NoteService, metrics: Option<PrometheusExporter>) -> Self {
        let health = HealthChecker::new(env!("CARGO_PKG_VERSION"), service.store().clone());
        Self {
            service,
            health,
            metrics,
        }
    }

    /// State over an empty in-memory store with the system clock
    pub fn in_memory(metrics: Option<PrometheusExporter>) -> Self {
        let store: Arc<dyn NoteStore> = Arc::new(InMemoryNoteStore::new());
        Self::new(NoteService::new(store), metrics)
    }
}
