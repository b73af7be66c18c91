//! Rep x RPE intensity zones.
//!
//! Each block is reduced to its dominant zone (the cell with the most
//! sets) and the block's average canonical-lift gain is credited to that
//! zone only.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{average_gain, canonical_lifts, mean, parent_lift_series};
use crate::blocks::Block;
use crate::taxonomy::Taxonomy;

/// Rep range bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RepBucket {
    #[serde(rename = "1-3")]
    OneToThree,
    #[serde(rename = "4-6")]
    FourToSix,
    #[serde(rename = "7-10")]
    SevenToTen,
    #[serde(rename = "10+")]
    TenPlus,
}

impl RepBucket {
    pub fn from_reps(reps: f64) -> Self {
        if reps <= 3.0 {
            RepBucket::OneToThree
        } else if reps <= 6.0 {
            RepBucket::FourToSix
        } else if reps <= 10.0 {
            RepBucket::SevenToTen
        } else {
            RepBucket::TenPlus
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RepBucket::OneToThree => "1-3",
            RepBucket::FourToSix => "4-6",
            RepBucket::SevenToTen => "7-10",
            RepBucket::TenPlus => "10+",
        }
    }
}

/// RPE bucket. Values below 6 land in the lowest bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RpeBucket {
    #[serde(rename = "6-7")]
    SixToSeven,
    #[serde(rename = "7-8")]
    SevenToEight,
    #[serde(rename = "8-9")]
    EightToNine,
    #[serde(rename = "9+")]
    NinePlus,
}

impl RpeBucket {
    pub fn from_rpe(rpe: f64) -> Self {
        if rpe < 7.0 {
            RpeBucket::SixToSeven
        } else if rpe < 8.0 {
            RpeBucket::SevenToEight
        } else if rpe < 9.0 {
            RpeBucket::EightToNine
        } else {
            RpeBucket::NinePlus
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RpeBucket::SixToSeven => "6-7",
            RpeBucket::SevenToEight => "7-8",
            RpeBucket::EightToNine => "8-9",
            RpeBucket::NinePlus => "9+",
        }
    }
}

/// A rep x RPE cell. Ordered by rep bucket, then RPE bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneCell {
    pub reps: RepBucket,
    pub rpe: RpeBucket,
}

impl ZoneCell {
    pub fn of(reps: f64, rpe: f64) -> Self {
        Self {
            reps: RepBucket::from_reps(reps),
            rpe: RpeBucket::from_rpe(rpe),
        }
    }
}

/// Average gain of the blocks dominated by one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntensityHeatmapRow {
    pub reps: RepBucket,
    pub rpe: RpeBucket,
    pub gain: f64,
    pub block_count: usize,
}

/// Intensity-zone binner.
pub struct IntensityZoneBinner<'t> {
    taxonomy: &'t Taxonomy,
    lifts: Vec<String>,
}

impl Default for IntensityZoneBinner<'static> {
    fn default() -> Self {
        Self::new(Taxonomy::standard())
    }
}

impl<'t> IntensityZoneBinner<'t> {
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        Self {
            taxonomy,
            lifts: canonical_lifts(),
        }
    }

    pub fn with_lifts(mut self, lifts: Vec<String>) -> Self {
        self.lifts = lifts;
        self
    }

    /// Set counts per zone for one block. Sets need positive reps and RPE.
    pub fn tally(&self, block: &Block<'_>) -> BTreeMap<ZoneCell, usize> {
        let mut counts = BTreeMap::new();
        for (reps, rpe) in block
            .logs
            .iter()
            .flat_map(|log| log.exercises.iter())
            .flat_map(|entry| entry.sets.iter())
            .filter_map(|set| set.effort())
        {
            *counts.entry(ZoneCell::of(reps, rpe)).or_insert(0) += 1;
        }
        counts
    }

    /// The zone with the most sets. Ties go to the lowest zone in
    /// [`ZoneCell`] order.
    pub fn dominant_zone(&self, block: &Block<'_>) -> Option<ZoneCell> {
        let mut best: Option<(ZoneCell, usize)> = None;
        for (cell, count) in self.tally(block) {
            if best.map_or(true, |(_, max)| count > max) {
                best = Some((cell, count));
            }
        }
        best.map(|(cell, _)| cell)
    }

    /// One row per zone that dominated at least one block with gain data.
    pub fn analyze(&self, blocks: &[Block<'_>]) -> Vec<IntensityHeatmapRow> {
        let mut attributed: BTreeMap<ZoneCell, Vec<f64>> = BTreeMap::new();

        for block in blocks {
            let Some(zone) = self.dominant_zone(block) else {
                continue;
            };
            let logs = block.chronological_logs();
            let Some(gain) = average_gain(&parent_lift_series(&logs, self.taxonomy), &self.lifts)
            else {
                continue;
            };
            attributed.entry(zone).or_default().push(gain);
        }

        attributed
            .into_iter()
            .filter_map(|(cell, gains)| {
                Some(IntensityHeatmapRow {
                    reps: cell.reps,
                    rpe: cell.rpe,
                    gain: mean(&gains)?,
                    block_count: gains.len(),
                })
            })
            .collect()
    }
}
