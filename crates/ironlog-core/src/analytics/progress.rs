//! Per-lift E1RM progress over time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::load::round_to;
use crate::model::WorkoutLog;
use crate::taxonomy::Taxonomy;

/// Default chart label format, e.g. `Jan 5`.
pub const DEFAULT_DISPLAY_FORMAT: &str = "%b %-d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPoint {
    /// The log's date as recorded
    pub date: String,
    pub display_date: String,
    /// Best E1RM of the session, 1 dp
    pub value: f64,
}

/// Lift name to chronological points.
pub type LiftProgressSeries = BTreeMap<String, Vec<ProgressPoint>>;

/// One point per log that trained each lift as a main movement (the parent
/// itself, a competition label, or an `isPrimary` entry resolving to it).
/// Logs with unreadable dates are skipped; lifts without points are
/// omitted.
pub fn lift_progress<'a>(
    logs: impl IntoIterator<Item = &'a WorkoutLog>,
    lifts: &[String],
    display_format: &str,
    taxonomy: &Taxonomy,
) -> LiftProgressSeries {
    let mut dated: Vec<_> = logs
        .into_iter()
        .filter_map(|log| match log.instant() {
            Some(at) => Some((at, log)),
            None => {
                tracing::debug!(log = %log.id, date = %log.date, "unreadable date, skipping");
                None
            }
        })
        .collect();
    dated.sort_by_key(|(at, _)| *at);

    let mut series = LiftProgressSeries::new();
    for (at, log) in dated {
        let mut best: BTreeMap<String, f64> = BTreeMap::new();
        for entry in &log.exercises {
            if !taxonomy.is_parent_movement(&entry.name, entry.flagged_primary()) {
                continue;
            }
            let parent = taxonomy.resolve_parent_lift(&entry.name);
            if !lifts.contains(&parent) {
                continue;
            }
            for set in entry.parsed_sets() {
                let e1rm = set.e1rm();
                let slot = best.entry(parent.clone()).or_insert(0.0);
                if e1rm > *slot {
                    *slot = e1rm;
                }
            }
        }

        let mut display_date = String::new();
        if write!(display_date, "{}", at.format(display_format)).is_err() {
            display_date = at.format("%Y-%m-%d").to_string();
        }

        for (lift, value) in best {
            if value <= 0.0 {
                continue;
            }
            series.entry(lift).or_default().push(ProgressPoint {
                date: log.date.clone(),
                display_date: display_date.clone(),
                value: round_to(value, 1),
            });
        }
    }
    series
}
