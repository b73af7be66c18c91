//! Variation impact attribution.
//!
//! Each block's percent gain on a parent lift is credited to every
//! variation of that lift trained anywhere in the block. Attribution is
//! existence-based: a variation done once counts as much as one done every
//! session.
//!
//! Gains are per parent, not per block: in a block that moved the squat
//! +5% and the bench -2%, a pause squat is credited +5% and a close-grip
//! bench -2%. A variation whose parent lift has no data in the block gets
//! nothing from it.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::{mean, parent_lift_series};
use crate::blocks::Block;
use crate::taxonomy::{Category, Taxonomy};

/// Aggregated impact of one variation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationImpactRow {
    pub name: String,
    /// Mean percent gain of the parent lift over contributing blocks
    pub avg_gain: f64,
    /// Number of contributing blocks
    pub count: usize,
    pub category: Category,
    pub parent: String,
}

/// Variation impact analyzer.
pub struct VariationImpactAnalyzer<'t> {
    taxonomy: &'t Taxonomy,
}

impl Default for VariationImpactAnalyzer<'static> {
    fn default() -> Self {
        Self::new(Taxonomy::standard())
    }
}

impl<'t> VariationImpactAnalyzer<'t> {
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// Variation names present in a block, sorted.
    fn variations(&self, block: &Block<'_>) -> BTreeSet<String> {
        block
            .logs
            .iter()
            .flat_map(|log| log.exercises.iter())
            .filter(|entry| !self.taxonomy.is_parent_movement(&entry.name, entry.flagged_primary()))
            .map(|entry| entry.name.clone())
            .collect()
    }

    /// Rows sorted by descending average gain, ties by name.
    pub fn analyze(&self, blocks: &[Block<'_>]) -> Vec<VariationImpactRow> {
        let mut attributed: BTreeMap<String, Vec<f64>> = BTreeMap::new();

        for block in blocks {
            let logs = block.chronological_logs();
            let series = parent_lift_series(&logs, self.taxonomy);

            for name in self.variations(block) {
                let parent = self.taxonomy.resolve_parent_lift(&name);
                let Some(gain) = series.get(&parent).and_then(|s| s.percent_gain()) else {
                    continue;
                };
                attributed.entry(name).or_default().push(gain);
            }
            tracing::trace!(block = %block.id, lifts = series.len(), "variation attribution");
        }

        let mut rows: Vec<VariationImpactRow> = attributed
            .into_iter()
            .filter_map(|(name, gains)| {
                Some(VariationImpactRow {
                    avg_gain: mean(&gains)?,
                    count: gains.len(),
                    category: self.taxonomy.resolve_category(&name),
                    parent: self.taxonomy.resolve_parent_lift(&name),
                    name,
                })
            })
            .collect();

        rows.sort_by(|a, b| b.avg_gain.total_cmp(&a.avg_gain).then_with(|| a.name.cmp(&b.name)));
        rows
    }
}
