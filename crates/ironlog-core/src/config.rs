//! TOML-based analytics configuration.
//!
//! Holds the tunable parts of the engine:
//! - Stress model shape (`[stress] central_exponent`)
//! - Which parent lifts count as canonical for block gain averages
//! - Which lifts get a progress series, and how chart dates are labelled
//! - Extra exercises merged over the standard taxonomy
//!
//! Every field has a default, so an empty file is a valid configuration.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::analytics::{canonical_lifts, DEFAULT_DISPLAY_FORMAT};
use crate::error::ConfigError;
use crate::load::DefaultStressModel;
use crate::taxonomy::{Taxonomy, TaxonomyEntry};

/// Stress model configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressConfig {
    /// Exponent applied to relative intensity when splitting central load
    #[serde(default = "default_central_exponent")]
    pub central_exponent: f64,
}

/// Analytics configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default = "canonical_lifts")]
    pub canonical_lifts: Vec<String>,
    #[serde(default = "canonical_lifts")]
    pub progress_lifts: Vec<String>,
    /// strftime pattern for progress chart labels
    #[serde(default = "default_display_date_format")]
    pub display_date_format: String,
    #[serde(default)]
    pub stress: StressConfig,
    /// Extra taxonomy entries; an entry replaces a standard one of the
    /// same name.
    #[serde(default)]
    pub exercises: Vec<TaxonomyEntry>,
}

fn default_central_exponent() -> f64 {
    2.0
}
fn default_display_date_format() -> String {
    DEFAULT_DISPLAY_FORMAT.into()
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            central_exponent: default_central_exponent(),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            canonical_lifts: canonical_lifts(),
            progress_lifts: canonical_lifts(),
            display_date_format: default_display_date_format(),
            stress: StressConfig::default(),
            exercises: Vec::new(),
        }
    }
}

impl AnalyticsConfig {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    /// Parse a TOML string and validate it.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let cfg: AnalyticsConfig = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, cannot be parsed, or
    /// holds an invalid value.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cfg = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded analytics config");
        Ok(cfg)
    }

    /// Load from `path` when given, defaults otherwise. A given path that
    /// fails to load is still an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Write as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let exponent = self.stress.central_exponent;
        if !exponent.is_finite() || exponent <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "stress.central_exponent".into(),
                message: format!("must be a positive number, got {exponent}"),
            });
        }
        if StrftimeItems::new(&self.display_date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidValue {
                key: "display_date_format".into(),
                message: format!("'{}' is not a valid strftime pattern", self.display_date_format),
            });
        }
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn stress_model(&self) -> DefaultStressModel {
        DefaultStressModel::new(self.stress.central_exponent)
    }

    /// Standard taxonomy extended with the configured exercises.
    pub fn taxonomy(&self) -> Taxonomy {
        Taxonomy::extended(self.exercises.iter().cloned())
    }
}
