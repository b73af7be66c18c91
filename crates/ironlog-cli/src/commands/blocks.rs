use chrono::{DateTime, Utc};
use clap::Args;
use ironlog_core::model::parse_instant;
use ironlog_core::{
    lift_progress, segment, AnalyticsConfig, CentralBalanceCorrelator, CompetitionLift,
    IntensityZoneBinner, LogFilter, MetaBlockComparator, TrainingBlock, VariationImpactAnalyzer,
    WorkoutLog,
};
use std::path::{Path, PathBuf};

use super::{load_config, print_json, read_json, CommandResult};

/// Log and program inputs shared by the block reports.
#[derive(Args)]
pub struct InputArgs {
    /// Workout logs (JSON array)
    #[arg(long)]
    pub logs: PathBuf,
    /// Programs (JSON array); logs referencing unknown ids still form blocks
    #[arg(long)]
    pub programs: Option<PathBuf>,
    /// Only logs of these program ids (repeatable)
    #[arg(long = "program")]
    pub program_ids: Vec<String>,
    /// Inclusive start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,
    /// Inclusive end date (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,
    /// Only the last N days
    #[arg(long)]
    pub days: Option<u32>,
    /// Reference time for open-ended blocks and --days (default: now)
    #[arg(long)]
    pub as_of: Option<String>,
}

#[derive(Args)]
pub struct MetaArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Competition lift: squat, bench or deadlift
    #[arg(long)]
    pub lift: CompetitionLift,
    /// Program ids to compare (repeatable); all programs when omitted
    #[arg(long = "block")]
    pub blocks: Vec<String>,
    /// Print the heatmap as a text grid instead of JSON
    #[arg(long)]
    pub ascii: bool,
}

struct Inputs {
    config: AnalyticsConfig,
    logs: Vec<WorkoutLog>,
    programs: Vec<TrainingBlock>,
    now: DateTime<Utc>,
}

impl InputArgs {
    fn load(&self, config: Option<&Path>) -> Result<Inputs, Box<dyn std::error::Error>> {
        let config = load_config(config)?;
        let now = match &self.as_of {
            Some(value) => {
                parse_instant(value).ok_or_else(|| format!("invalid --as-of date: {value}"))?
            }
            None => Utc::now(),
        };

        let filter = LogFilter::from_params(
            self.program_ids.clone(),
            self.start.as_deref(),
            self.end.as_deref(),
            self.days,
        )?;
        let programs: Vec<TrainingBlock> = match &self.programs {
            Some(path) => read_json(path)?,
            None => Vec::new(),
        };

        let all: Vec<WorkoutLog> = read_json(&self.logs)?;
        let logs: Vec<WorkoutLog> = filter
            .apply(&all, &programs, now)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!(total = all.len(), kept = logs.len(), "filtered logs");

        Ok(Inputs {
            config,
            logs,
            programs,
            now,
        })
    }
}

pub fn variations(args: InputArgs, config: Option<&Path>) -> CommandResult {
    let inputs = args.load(config)?;
    let taxonomy = inputs.config.taxonomy();
    let blocks = segment(&inputs.logs, &inputs.programs);
    print_json(&VariationImpactAnalyzer::new(&taxonomy).analyze(&blocks))
}

pub fn balance(args: InputArgs, config: Option<&Path>) -> CommandResult {
    let inputs = args.load(config)?;
    let taxonomy = inputs.config.taxonomy();
    let blocks = segment(&inputs.logs, &inputs.programs);
    let correlator = CentralBalanceCorrelator::new(&taxonomy, inputs.config.stress_model())
        .with_lifts(inputs.config.canonical_lifts.clone());
    print_json(&correlator.analyze(&blocks))
}

pub fn intensity(args: InputArgs, config: Option<&Path>) -> CommandResult {
    let inputs = args.load(config)?;
    let taxonomy = inputs.config.taxonomy();
    let blocks = segment(&inputs.logs, &inputs.programs);
    let binner =
        IntensityZoneBinner::new(&taxonomy).with_lifts(inputs.config.canonical_lifts.clone());
    print_json(&binner.analyze(&blocks))
}

pub fn progress(args: InputArgs, config: Option<&Path>) -> CommandResult {
    let inputs = args.load(config)?;
    let taxonomy = inputs.config.taxonomy();
    let series = lift_progress(
        &inputs.logs,
        &inputs.config.progress_lifts,
        &inputs.config.display_date_format,
        &taxonomy,
    );
    print_json(&series)
}

pub fn meta(args: MetaArgs, config: Option<&Path>) -> CommandResult {
    if args.input.programs.is_none() {
        return Err("meta requires --programs".into());
    }
    let inputs = args.input.load(config)?;

    let selected: Vec<TrainingBlock> = if args.blocks.is_empty() {
        inputs.programs.clone()
    } else {
        args.blocks
            .iter()
            .map(|id| {
                inputs
                    .programs
                    .iter()
                    .find(|p| &p.id == id)
                    .cloned()
                    .ok_or_else(|| format!("unknown block: {id}"))
            })
            .collect::<Result<_, _>>()?
    };

    let taxonomy = inputs.config.taxonomy();
    let comparator =
        MetaBlockComparator::new(&taxonomy, inputs.config.stress_model(), inputs.now);
    let report = comparator.compare(&selected, &inputs.logs, args.lift);

    if args.ascii {
        print!("{}", report.render_ascii());
        return Ok(());
    }
    print_json(&report)
}
