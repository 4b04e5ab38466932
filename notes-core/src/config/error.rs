//! Configuration error types

use thiserror::Error;

/// Failures while loading, overriding or validating a [`super::Config`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    FileReadError(String),

    #[error("Failed to write configuration file: {0}")]
    FileWriteError(String),

    /// TOML did not match the config schema
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to serialize configuration: {0}")]
    SerializeError(String),

    /// A `NOTES_*` variable held an unparsable value
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    /// Parsed fine but breaks a constraint
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}
