//! Health reporting for the notes service

use crate::core_notes::NoteStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    /// Convert to HTTP status code
    pub fn to_http_status(&self) -> u16 {
        match self {
            HealthStatus::Healthy => 200,
            HealthStatus::Degraded => 200,
            HealthStatus::Unhealthy => 503,
        }
    }
}

/// Health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    pub components: Vec<ComponentHealth>,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Component health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub last_check: DateTime<Utc>,
}

impl ComponentHealth {
    /// Create a healthy component
    pub fn healthy(name: impl Into<String>, message: Option<String>) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Healthy,
            message,
            last_check: Utc::now(),
        }
    }
}

/// Aggregates component health into a single report
pub struct HealthChecker {
    started: Instant,
    version: String,
    store: Arc<dyn NoteStore>,
}

impl HealthChecker {
    /// Create a health checker probing `store` on every check
    pub fn new(version: impl Into<String>, store: Arc<dyn NoteStore>) -> Self {
        Self {
            started: Instant::now(),
            version: version.into(),
            store,
        }
    }

    /// Get current health status
    pub fn check_health(&self) -> HealthReport {
        let components = vec![checks::check_note_store(self.store.as_ref())];

        let status = if components.iter().any(|c| c.status == HealthStatus::Unhealthy) {
            HealthStatus::Unhealthy
        } else if components.iter().any(|c| c.status == HealthStatus::Degraded) {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        };

        HealthReport {
            status,
            timestamp: Utc::now(),
            components,
            version: self.version.clone(),
            uptime_seconds: self.started.elapsed().as_secs(),
        }
    }
}

/// Built-in health checks
pub mod checks {
    use super::*;

    /// Report the note store; an in-memory store is always reachable
    pub fn check_note_store(store: &dyn NoteStore) -> ComponentHealth {
        ComponentHealth::healthy("note_store", Some(format!("{} notes stored", store.len())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_notes::{InMemoryNoteStore, Note, NoteId};
    use crate::test_utils::fixed_instant;

    #[test]
    fn test_empty_store_is_healthy() {
        let checker = HealthChecker::new("1.0.0", Arc::new(InMemoryNoteStore::new()));

        let health = checker.check_health();
        assert_eq!(health.status, HealthStatus::Healthy);
        assert_eq!(health.status.to_http_status(), 200);
        assert_eq!(health.version, "1.0.0");
        assert_eq!(health.components.len(), 1);
        assert_eq!(health.components[0].message.as_deref(), Some("0 notes stored"));
    }

    #[test]
    fn test_store_component_reports_count() {
        let store = Arc::new(InMemoryNoteStore::new());
        let checker = HealthChecker::new("1.0.0", store.clone());
        store.create(Note::new(
            NoteId::generate(),
            "Groceries".to_string(),
            String::new(),
            fixed_instant(),
        ));

        let health = checker.check_health();
        let component = &health.components[0];
        assert_eq!(component.name, "note_store");
        assert_eq!(component.status, HealthStatus::Healthy);
        assert_eq!(component.message.as_deref(), Some("1 notes stored"));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&HealthStatus::Unhealthy).unwrap();
        assert_eq!(json, "\"unhealthy\"");
        assert_eq!(HealthStatus::Unhealthy.to_http_status(), 503);
    }
}
