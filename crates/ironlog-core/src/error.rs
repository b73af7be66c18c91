//! Core error types for ironlog-core.
//!
//! The analytics functions themselves are total: malformed sets are skipped
//! and missing data is omitted from the output. Errors only surface at the
//! edges, when configuration or input files are loaded or when a log filter
//! is built from user input.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ironlog-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log filter errors
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised while building a [`crate::blocks::LogFilter`].
#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    /// A date parameter could not be parsed
    #[error("Invalid date '{value}' for '{field}' (expected YYYY-MM-DD)")]
    InvalidDate { field: String, value: String },

    /// Start date falls after end date
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvertedRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_error_display() {
        let err = FilterError::InvalidDate {
            field: "startDate".to_string(),
            value: "yesterday".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date 'yesterday' for 'startDate' (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn test_core_error_wraps_config_error() {
        let err: CoreError = ConfigError::ParseFailed("bad toml".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Failed to parse configuration: bad toml"
        );
    }
}
