use clap::Args;
use ironlog_core::{
    category_stress, estimate_one_rep_max, round_to, session_load, StressModel, WorkoutLog,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::{load_config, print_json, read_json, CommandResult};

#[derive(Args)]
pub struct E1rmArgs {
    /// Weight lifted
    #[arg(long)]
    pub weight: f64,
    /// Reps performed (default 1)
    #[arg(long)]
    pub reps: Option<f64>,
    /// Rating of perceived exertion (default 10)
    #[arg(long)]
    pub rpe: Option<f64>,
}

#[derive(Args)]
pub struct StressArgs {
    #[arg(long)]
    pub reps: f64,
    #[arg(long)]
    pub rpe: f64,
}

#[derive(Args)]
pub struct SessionsArgs {
    /// Workout logs (JSON array)
    #[arg(long)]
    pub logs: PathBuf,
    /// Stress per taxonomy category instead of per session
    #[arg(long)]
    pub by_category: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct E1rmOutput {
    weight: f64,
    reps: Option<f64>,
    rpe: Option<f64>,
    e1rm: f64,
}

pub fn e1rm(args: E1rmArgs) -> CommandResult {
    let value = estimate_one_rep_max(args.weight, args.reps, args.rpe);
    print_json(&E1rmOutput {
        weight: args.weight,
        reps: args.reps,
        rpe: args.rpe,
        e1rm: round_to(value, 1),
    })
}

pub fn stress(args: StressArgs, config: Option<&Path>) -> CommandResult {
    if args.reps <= 0.0 || args.rpe <= 0.0 {
        return Err("reps and rpe must be positive".into());
    }
    let model = load_config(config)?.stress_model();
    print_json(&model.compute(args.reps, args.rpe))
}

pub fn sessions(args: SessionsArgs, config: Option<&Path>) -> CommandResult {
    let config = load_config(config)?;
    let model = config.stress_model();
    let logs: Vec<WorkoutLog> = read_json(&args.logs)?;

    if args.by_category {
        let taxonomy = config.taxonomy();
        return print_json(&category_stress(&logs, &taxonomy, &model));
    }

    let loads: Vec<_> = logs.iter().map(|log| session_load(log, &model)).collect();
    print_json(&loads)
}
