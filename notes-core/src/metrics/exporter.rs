//! Metrics export functionality

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Failed to install metrics recorder: {0}")]
    InstallFailed(String),
}

/// Prometheus metrics exporter
///
/// Wraps the handle of the process-wide recorder; cloning is cheap.
#[derive(Clone)]
pub struct PrometheusExporter {
    handle: PrometheusHandle,
}

impl PrometheusExporter {
    /// Install the Prometheus recorder as the global `metrics` recorder.
    ///
    /// Fails if a global recorder is already installed.
    pub fn install() -> Result<Self, MetricsError> {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;
        super::init_metrics();
        Ok(Self { handle })
    }

    /// Build an exporter whose recorder is not installed globally
    pub fn detached() -> Self {
        let recorder = PrometheusBuilder::new().build_recorder();
        Self {
            handle: recorder.handle(),
        }
    }

    /// Export metrics in Prometheus text format
    pub fn render(&self) -> String {
        self.handle.render()
    }
}
