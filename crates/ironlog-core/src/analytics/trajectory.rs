//! Primary-lift trajectory within a block.

use serde::{Deserialize, Serialize};

use crate::load::round_to;
use crate::model::{ExerciseEntry, ParsedSet, WorkoutLog};

/// Which entries count as the tracked lift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiftTarget {
    /// Entries with exactly this name, e.g. `"Competition Squat"`.
    Named(String),
    /// Entries flagged `isPrimary`.
    Primary,
    /// Either of the above.
    NamedOrPrimary(String),
}

impl LiftTarget {
    pub fn qualifies(&self, entry: &ExerciseEntry) -> bool {
        match self {
            LiftTarget::Named(name) => entry.name == *name,
            LiftTarget::Primary => entry.flagged_primary(),
            LiftTarget::NamedOrPrimary(name) => entry.name == *name || entry.flagged_primary(),
        }
    }

    /// Valid qualifying sets carrying an RPE, in log order.
    pub fn rated_sets(&self, logs: &[&WorkoutLog]) -> Vec<ParsedSet> {
        logs.iter()
            .flat_map(|log| log.exercises.iter())
            .filter(|entry| self.qualifies(entry))
            .flat_map(|entry| entry.parsed_sets())
            .filter(|set| set.rpe.is_some())
            .collect()
    }
}

/// Start, peak and end E1RM of a lift, 1 dp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiftTrajectory {
    #[serde(rename = "startE1RM")]
    pub start_e1rm: f64,
    #[serde(rename = "peakE1RM")]
    pub peak_e1rm: f64,
    #[serde(rename = "endE1RM")]
    pub end_e1rm: f64,
    pub gain: f64,
}

impl LiftTrajectory {
    /// Trajectory over chronologically ordered rated sets, `None` when
    /// there are none.
    pub fn from_sets(sets: &[ParsedSet]) -> Option<Self> {
        let start = sets.first()?.e1rm();
        let end = sets.last()?.e1rm();
        let peak = sets.iter().map(ParsedSet::e1rm).fold(f64::MIN, f64::max);
        Some(Self {
            start_e1rm: round_to(start, 1),
            peak_e1rm: round_to(peak, 1),
            end_e1rm: round_to(end, 1),
            gain: round_to(end - start, 1),
        })
    }
}

/// Trajectory of `target` over a block's chronologically sorted logs. A
/// block without qualifying rated sets yields all zeros.
pub fn lift_trajectory(logs: &[&WorkoutLog], target: &LiftTarget) -> LiftTrajectory {
    LiftTrajectory::from_sets(&target.rated_sets(logs)).unwrap_or_default()
}
