//! Configuration management for the notes service
//!
//! Defaults, overridable from a TOML file or `NOTES_*` environment
//! variables, validated before use.

use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

mod error;

pub use error::ConfigError;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Cross-origin request policy
    pub cors: CorsConfig,

    /// Metrics configuration
    pub metrics: MetricsConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server bind address
    pub bind_address: SocketAddr,

    /// How long in-flight requests get to finish after a shutdown signal
    #[serde(with = "humantime_serde")]
    pub shutdown_timeout: Duration,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON formatting
    pub json_format: bool,

    /// Include timestamps
    pub with_timestamp: bool,

    /// Include target module
    pub with_target: bool,
}

/// CORS configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins; empty allows any origin
    pub allowed_origins: Vec<String>,

    /// Preflight cache lifetime
    #[serde(with = "humantime_serde")]
    pub max_age: Duration,
}

/// Metrics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Expose Prometheus metrics on `/metrics`
    pub enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3001)),
            shutdown_timeout: Duration::from_secs(10),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            with_timestamp: true,
            with_target: true,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_age: Duration::from_secs(3600),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl CorsConfig {
    /// Whether any origin is accepted
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty()
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Environment variables follow the pattern: NOTES_<SECTION>_<KEY>
    /// Example: NOTES_SERVER_BIND_ADDRESS=0.0.0.0:3001
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadError(e.to_string()))?;

        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply `NOTES_*` overrides read through `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server config
        if let Some(addr) = lookup("NOTES_SERVER_BIND_ADDRESS") {
            self.server.bind_address = addr
                .parse()
                .map_err(|e| ConfigError::InvalidValue(format!("Invalid bind address: {}", e)))?;
        }
        if let Some(timeout) = lookup("NOTES_SERVER_SHUTDOWN_TIMEOUT") {
            self.server.shutdown_timeout = humantime_serde::re::humantime::parse_duration(&timeout)
                .map_err(|e| {
                    ConfigError::InvalidValue(format!("Invalid shutdown timeout: {}", e))
                })?;
        }

        // Logging config
        if let Some(level) = lookup("NOTES_LOG_LEVEL") {
            self.logging.level = level.to_lowercase();
        }
        if let Some(json) = lookup("NOTES_LOG_JSON") {
            self.logging.json_format = json
                .parse()
                .map_err(|e| ConfigError::InvalidValue(format!("Invalid JSON flag: {}", e)))?;
        }

        // CORS config
        if let Some(origins) = lookup("NOTES_CORS_ALLOWED_ORIGINS") {
            self.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect();
        }

        // Metrics config
        if let Some(enabled) = lookup("NOTES_METRICS_ENABLED") {
            self.metrics.enabled = enabled
                .parse()
                .map_err(|e| ConfigError::InvalidValue(format!("Invalid metrics flag: {}", e)))?;
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.shutdown_timeout.is_zero() {
            return Err(ConfigError::ValidationFailed(
                "shutdown_timeout must be greater than 0".to_string(),
            ));
        }

        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationFailed(format!(
                "Invalid log level: {}",
                self.logging.level
            )));
        }

        for origin in &self.cors.allowed_origins {
            if !(origin.starts_with("http://") || origin.starts_with("https://")) {
                return Err(ConfigError::ValidationFailed(format!(
                    "CORS origin must start with http:// or https://: {}",
                    origin
                )));
            }
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: impl AsRef<std::path::Path>) -> Result<(), ConfigError> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, contents).map_err(|e| ConfigError::FileWriteError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.bind_address.port(), 3001);
        assert!(config.cors.allows_any_origin());
        assert!(config.metrics.enabled);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.server.shutdown_timeout = Duration::ZERO;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.cors.allowed_origins = vec!["example.com".to_string()];
        assert!(config.validate().is_err());

        config.cors.allowed_origins = vec!["https://example.com".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_validation() {
        let mut config = Config::default();

        config.logging.level = "invalid".to_string();
        assert!(config.validate().is_err());

        config.logging.level = "debug".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env_overrides(lookup_from(&[
                ("NOTES_SERVER_BIND_ADDRESS", "127.0.0.1:8080"),
                ("NOTES_SERVER_SHUTDOWN_TIMEOUT", "3s"),
                ("NOTES_LOG_LEVEL", "DEBUG"),
                ("NOTES_LOG_JSON", "true"),
                ("NOTES_CORS_ALLOWED_ORIGINS", "http://a.test, https://b.test,"),
                ("NOTES_METRICS_ENABLED", "false"),
            ]))
            .unwrap();

        assert_eq!(config.server.bind_address, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.server.shutdown_timeout, Duration::from_secs(3));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json_format);
        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://a.test".to_string(), "https://b.test".to_string()]
        );
        assert!(!config.metrics.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_override_rejects_bad_values() {
        let mut config = Config::default();
        let err = config
            .apply_env_overrides(lookup_from(&[("NOTES_SERVER_BIND_ADDRESS", "nowhere")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));

        let err = config
            .apply_env_overrides(lookup_from(&[("NOTES_METRICS_ENABLED", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.toml");

        let mut config = Config::default();
        config.server.bind_address = "127.0.0.1:4000".parse().unwrap();
        config.cors.allowed_origins = vec!["https://notes.test".to_string()];
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.toml");
        std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.logging.level, "warn");
        assert_eq!(loaded.server, ServerConfig::default());
    }

    #[test]
    fn test_invalid_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.toml");

        std::fs::write(&path, "[server]\nbind_address = 3001\n").unwrap();
        assert!(matches!(Config::from_file(&path), Err(ConfigError::ParseError(_))));

        std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileReadError(_)));
    }
}
