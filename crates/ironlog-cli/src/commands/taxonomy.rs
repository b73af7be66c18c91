use clap::Args;
use ironlog_core::Category;
use serde::Serialize;
use std::path::Path;

use super::{load_config, print_json, CommandResult};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Exercise names, e.g. "Romanian Deadlift"
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Classification {
    name: String,
    category: Category,
    parent: String,
    /// Whether the exact name is in the exercise table
    known: bool,
}

pub fn classify(args: ClassifyArgs, config: Option<&Path>) -> CommandResult {
    let taxonomy = load_config(config)?.taxonomy();
    let rows: Vec<Classification> = args
        .names
        .into_iter()
        .map(|name| Classification {
            category: taxonomy.resolve_category(&name),
            parent: taxonomy.resolve_parent_lift(&name),
            known: taxonomy.get(&name).is_some(),
            name,
        })
        .collect();
    print_json(&rows)
}
