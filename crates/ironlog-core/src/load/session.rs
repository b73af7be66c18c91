//! Session-level load summaries and per-category stress.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{round_to, StressModel, StressResult};
use crate::model::WorkoutLog;
use crate::taxonomy::{Category, Taxonomy};

/// Training load of a single session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionLoad {
    pub log_id: String,
    pub date: String,
    /// Sets that passed validation
    pub set_count: usize,
    pub stress: StressResult,
    /// Best estimated max per exercise, 1 dp
    pub top_e1rm: BTreeMap<String, f64>,
}

/// Sum set stress and pick the best E1RM of every exercise in a session.
pub fn session_load(log: &WorkoutLog, model: &impl StressModel) -> SessionLoad {
    let mut set_count = 0;
    let mut stress = StressResult::ZERO;
    let mut top_e1rm: BTreeMap<String, f64> = BTreeMap::new();

    for entry in &log.exercises {
        for set in &entry.sets {
            if let Some((reps, rpe)) = set.effort() {
                stress += model.compute(reps, rpe);
            }
            let Some(parsed) = set.parse() else {
                continue;
            };
            set_count += 1;
            let e1rm = parsed.e1rm();
            let best = top_e1rm.entry(entry.name.clone()).or_insert(0.0);
            if e1rm > *best {
                *best = e1rm;
            }
        }
    }

    for value in top_e1rm.values_mut() {
        *value = round_to(*value, 1);
    }

    SessionLoad {
        log_id: log.id.clone(),
        date: log.date.clone(),
        set_count,
        stress,
        top_e1rm,
    }
}

/// Stress attributed to one movement category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStress {
    pub category: Category,
    pub stress: StressResult,
    /// Central share of the category's stress, 2 dp
    pub cs_balance: f64,
}

/// Stress per taxonomy category across `logs`. Categories without any
/// recorded stress are omitted.
pub fn category_stress<'a>(
    logs: impl IntoIterator<Item = &'a WorkoutLog>,
    taxonomy: &Taxonomy,
    model: &impl StressModel,
) -> Vec<CategoryStress> {
    let mut by_category: BTreeMap<Category, StressResult> = BTreeMap::new();

    for log in logs {
        for entry in &log.exercises {
            let category = taxonomy.resolve_category(&entry.name);
            let stress: StressResult = entry
                .sets
                .iter()
                .filter_map(|set| set.effort())
                .map(|(reps, rpe)| model.compute(reps, rpe))
                .sum();
            *by_category.entry(category).or_default() += stress;
        }
    }

    by_category
        .into_iter()
        .filter(|(_, stress)| !stress.is_zero())
        .map(|(category, stress)| CategoryStress {
            category,
            stress,
            cs_balance: round_to(stress.cs_balance(), 2),
        })
        .collect()
}
