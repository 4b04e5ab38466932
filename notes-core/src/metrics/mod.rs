//! Metrics collection and export for observability

use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::time::Instant;

mod exporter;

pub use exporter::{MetricsError, PrometheusExporter};

/// Initialize metrics with descriptions
pub fn init_metrics() {
    describe_counter!("notes.created", "Number of notes created");
    describe_counter!("notes.updated", "Number of notes updated");
    describe_counter!("notes.deleted", "Number of notes deleted");
    describe_counter!("notes.not_found", "Lookups for ids with no matching note");
    describe_counter!("notes.validation_failed", "Writes rejected by input validation");
    describe_histogram!(
        "notes.operation.duration_ms",
        "Create/update duration in milliseconds"
    );
}

/// Record a counter metric
pub fn record_counter(name: &'static str, value: u64) {
    counter!(name).increment(value);
}

/// Timer for measuring operation duration
pub struct Timer {
    name: &'static str,
    start: Instant,
}

impl Timer {
    /// Create a new timer
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    /// Stop the timer and record the duration
    pub fn stop(self) {
        let duration = self.start.elapsed();
        histogram!(self.name).record(duration.as_secs_f64() * 1000.0);
    }
}
