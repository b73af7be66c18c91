//! Cross-block analytics.
//!
//! Every entry point takes blocks produced by [`crate::blocks::segment`]
//! (or [`crate::blocks::block_for_program`]), so logs are already in
//! chronological order. Blocks or cells without data are omitted from the
//! output rather than reported as zero.

mod central_balance;
mod intensity_zones;
mod meta_block;
mod progress;
mod trajectory;
mod variation_impact;

pub use central_balance::{CentralBalanceCorrelator, CentralBalancePoint};
pub use intensity_zones::{IntensityHeatmapRow, IntensityZoneBinner, RepBucket, RpeBucket, ZoneCell};
pub use meta_block::{
    AssistCorrelationRow, BlockContribution, BlockLiftStats, HeatmapCell, MetaBlockComparator,
    MetaBlockReport, MetaHeatmapCell,
};
pub use progress::{lift_progress, LiftProgressSeries, ProgressPoint, DEFAULT_DISPLAY_FORMAT};
pub use trajectory::{lift_trajectory, LiftTarget, LiftTrajectory};
pub use variation_impact::{VariationImpactAnalyzer, VariationImpactRow};

use std::collections::BTreeMap;

use crate::model::WorkoutLog;
use crate::taxonomy::Taxonomy;

/// First and last per-session best E1RM of a lift within one block.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FirstLast {
    pub first: Option<f64>,
    pub last: Option<f64>,
}

impl FirstLast {
    /// Record a session's best. `first` is set once; `last` follows every
    /// update.
    pub fn observe(&mut self, value: f64) {
        if value <= 0.0 {
            return;
        }
        self.first.get_or_insert(value);
        self.last = Some(value);
    }

    /// `(last - first) / first * 100`, undefined unless `first > 0`.
    pub fn percent_gain(&self) -> Option<f64> {
        match (self.first, self.last) {
            (Some(first), Some(last)) if first > 0.0 => Some((last - first) / first * 100.0),
            _ => None,
        }
    }
}

/// First/last tracking for every parent lift trained in a block.
///
/// Each session contributes its best E1RM over the entries that count as
/// the parent lift itself (see [`Taxonomy::is_parent_movement`]); variation
/// entries do not move their parent's numbers.
pub fn parent_lift_series(
    logs: &[&WorkoutLog],
    taxonomy: &Taxonomy,
) -> BTreeMap<String, FirstLast> {
    let mut series: BTreeMap<String, FirstLast> = BTreeMap::new();

    for log in logs {
        let mut session_best: BTreeMap<String, f64> = BTreeMap::new();
        for entry in &log.exercises {
            if !taxonomy.is_parent_movement(&entry.name, entry.flagged_primary()) {
                continue;
            }
            let best = entry.parsed_sets().map(|s| s.e1rm()).fold(0.0, f64::max);
            let parent = taxonomy.resolve_parent_lift(&entry.name);
            let slot = session_best.entry(parent).or_insert(0.0);
            *slot = slot.max(best);
        }
        for (parent, best) in session_best {
            series.entry(parent).or_default().observe(best);
        }
    }

    series
}

/// Mean percent gain over `lifts`, counting only lifts with data.
pub fn average_gain(series: &BTreeMap<String, FirstLast>, lifts: &[String]) -> Option<f64> {
    let gains: Vec<f64> = lifts
        .iter()
        .filter_map(|lift| series.get(lift)?.percent_gain())
        .collect();
    mean(&gains)
}

pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Squat, Bench Press and Deadlift.
pub fn canonical_lifts() -> Vec<String> {
    crate::taxonomy::CompetitionLift::ALL
        .iter()
        .map(|lift| lift.parent().to_string())
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::model::{ExerciseEntry, SetRecord, TrainingBlock, WorkoutLog};

    pub fn set(weight: f64, reps: f64, rpe: f64) -> SetRecord {
        SetRecord::new(weight, reps, Some(rpe))
    }

    pub fn entry(name: &str, sets: Vec<SetRecord>) -> ExerciseEntry {
        ExerciseEntry::new(name, sets)
    }

    pub fn log(id: &str, program_id: &str, date: &str, exercises: Vec<ExerciseEntry>) -> WorkoutLog {
        WorkoutLog {
            id: id.to_string(),
            program_id: Some(program_id.to_string()),
            date: date.to_string(),
            exercises,
            ..Default::default()
        }
    }

    pub fn program(id: &str, name: &str) -> TrainingBlock {
        TrainingBlock::new(id, name)
    }
}
