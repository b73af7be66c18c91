use clap::Subcommand;
use ironlog_core::AnalyticsConfig;
use std::path::{Path, PathBuf};

use super::{load_config, print_json, CommandResult};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Dot-separated key (e.g. "stress.central_exponent")
        key: String,
    },
    /// List all config values
    List,
    /// Write a config file with default values
    Init {
        /// Destination path
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(action: ConfigAction, config: Option<&Path>) -> CommandResult {
    match action {
        ConfigAction::Get { key } => {
            let config = load_config(config)?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::List => {
            let config = load_config(config)?;
            print_json(&config)?;
        }
        ConfigAction::Init { path, force } => {
            if path.exists() && !force {
                return Err(format!("{} already exists (use --force)", path.display()).into());
            }
            AnalyticsConfig::default().save(&path)?;
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}
