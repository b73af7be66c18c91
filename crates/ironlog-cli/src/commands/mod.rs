pub mod blocks;
pub mod config;
pub mod load;
pub mod taxonomy;

use ironlog_core::{AnalyticsConfig, CoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Read a JSON document from disk.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CoreError> {
    let content = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), "read input");
    Ok(value)
}

pub fn load_config(path: Option<&Path>) -> Result<AnalyticsConfig, CoreError> {
    Ok(AnalyticsConfig::load_or_default(path)?)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
