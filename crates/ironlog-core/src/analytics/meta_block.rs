//! Meta-block comparison for one competition lift.
//!
//! For a caller-selected set of blocks this module computes each block's
//! start/peak/end E1RM on the strictly named competition lift, a rep x RPE
//! heatmap of block outcomes, and an assistance-exercise correlation table
//! limited to the categories relevant to the lift.
//!
//! # Usage
//! ```rust,ignore
//! use ironlog_core::analytics::MetaBlockComparator;
//! use ironlog_core::taxonomy::CompetitionLift;
//!
//! let comparator = MetaBlockComparator::new(taxonomy, model, now);
//! let report = comparator.compare(&selected_programs, &logs, CompetitionLift::Squat);
//! println!("{}", report.render_ascii());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::trajectory::{LiftTarget, LiftTrajectory};
use crate::blocks::{block_for_program, Block};
use crate::load::{round_to, DefaultStressModel, StressModel};
use crate::model::{ParsedSet, TrainingBlock, WorkoutLog};
use crate::taxonomy::{Category, CompetitionLift, Taxonomy};

/// Competition-lift outcome of one block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockLiftStats {
    pub id: String,
    pub name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(rename = "startE1RM")]
    pub start_e1rm: f64,
    #[serde(rename = "peakE1RM")]
    pub peak_e1rm: f64,
    #[serde(rename = "endE1RM")]
    pub end_e1rm: f64,
    pub gain: f64,
    /// Central share of the block's total stress, 2 dp
    pub cs_balance: f64,
}

/// Running sums for one rep x RPE cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub sum_end: f64,
    pub sum_peak: f64,
    pub sum_gain: f64,
    /// Blocks that touched the cell
    pub count: usize,
}

impl HeatmapCell {
    fn add(&mut self, stats: &BlockLiftStats) {
        self.sum_end += stats.end_e1rm;
        self.sum_peak += stats.peak_e1rm;
        self.sum_gain += stats.gain;
        self.count += 1;
    }
}

/// Per-cell block averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaHeatmapCell {
    pub reps: u32,
    /// Rounded to the nearest 0.5
    pub rpe: f64,
    pub avg_end: f64,
    pub avg_peak: f64,
    pub avg_gain: f64,
    pub block_count: usize,
}

/// One block's contribution to an assistance exercise row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockContribution {
    pub block_id: String,
    pub block_name: String,
    pub gain: f64,
    #[serde(rename = "endE1RM")]
    pub end_e1rm: f64,
    #[serde(rename = "peakE1RM")]
    pub peak_e1rm: f64,
    /// Valid sets of the assistance exercise in this block
    pub sets: usize,
}

/// Aggregated correlation of one assistance exercise with lift outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistCorrelationRow {
    pub name: String,
    pub category: Category,
    pub avg_gain: f64,
    pub avg_end: f64,
    pub avg_peak: f64,
    /// Contributing blocks
    pub count: usize,
    pub total_sets: usize,
    pub blocks: Vec<BlockContribution>,
}

/// Full comparison output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaBlockReport {
    pub lift: CompetitionLift,
    pub blocks: Vec<BlockLiftStats>,
    pub heatmap: Vec<MetaHeatmapCell>,
    pub assists: Vec<AssistCorrelationRow>,
}

/// Cell key: whole reps and RPE in half points. Fractional reps below one
/// still count as a single.
type CellKey = (u32, u32);

fn cell_key(set: &ParsedSet) -> Option<CellKey> {
    let rpe = set.rpe?;
    Some(((set.reps.round() as u32).max(1), (rpe * 2.0).round() as u32))
}

/// Meta-block comparator.
pub struct MetaBlockComparator<'t, M: StressModel = DefaultStressModel> {
    taxonomy: &'t Taxonomy,
    model: M,
    now: DateTime<Utc>,
}

impl MetaBlockComparator<'static> {
    /// Standard taxonomy and default stress model.
    pub fn standard(now: DateTime<Utc>) -> Self {
        Self::new(Taxonomy::standard(), DefaultStressModel::default(), now)
    }
}

impl<'t, M: StressModel> MetaBlockComparator<'t, M> {
    /// `now` closes the window of blocks without an end date.
    pub fn new(taxonomy: &'t Taxonomy, model: M, now: DateTime<Utc>) -> Self {
        Self {
            taxonomy,
            model,
            now,
        }
    }

    /// Lift outcome of a single block, `None` without rated competition
    /// sets.
    pub fn block_stats(&self, block: &Block<'_>, lift: CompetitionLift) -> Option<BlockLiftStats> {
        let target = LiftTarget::Named(lift.label().to_string());
        let trajectory = LiftTrajectory::from_sets(&target.rated_sets(&block.logs))?;
        Some(BlockLiftStats {
            id: block.id.clone(),
            name: block.name.clone(),
            start_date: block.start_date.clone(),
            end_date: block.end_date.clone(),
            start_e1rm: trajectory.start_e1rm,
            peak_e1rm: trajectory.peak_e1rm,
            end_e1rm: trajectory.end_e1rm,
            gain: trajectory.gain,
            cs_balance: round_to(block.stress(&self.model).cs_balance(), 2),
        })
    }

    /// Assistance exercises of a block with their valid set counts.
    fn assist_sets(&self, block: &Block<'_>, lift: CompetitionLift) -> BTreeMap<String, usize> {
        let allowed = lift.assist_categories();
        let mut tally: BTreeMap<String, usize> = BTreeMap::new();
        for entry in block.logs.iter().flat_map(|log| log.exercises.iter()) {
            if entry.name == lift.label() || entry.flagged_primary() {
                continue;
            }
            if !allowed.contains(&self.taxonomy.resolve_category(&entry.name)) {
                continue;
            }
            let sets = entry.parsed_sets().count();
            if sets > 0 {
                *tally.entry(entry.name.clone()).or_insert(0) += sets;
            }
        }
        tally
    }

    /// Compare the selected programs on `lift`.
    pub fn compare(
        &self,
        programs: &[TrainingBlock],
        logs: &[WorkoutLog],
        lift: CompetitionLift,
    ) -> MetaBlockReport {
        let target = LiftTarget::Named(lift.label().to_string());
        let mut blocks = Vec::new();
        let mut cells: BTreeMap<CellKey, HeatmapCell> = BTreeMap::new();
        let mut assists: BTreeMap<String, Vec<BlockContribution>> = BTreeMap::new();

        for program in programs {
            let block = block_for_program(logs, program, self.now);
            let Some(stats) = self.block_stats(&block, lift) else {
                tracing::debug!(block = %program.id, lift = %lift, "no rated competition sets");
                continue;
            };

            let touched: BTreeSet<CellKey> = target
                .rated_sets(&block.logs)
                .iter()
                .filter_map(cell_key)
                .collect();
            for key in touched {
                cells.entry(key).or_default().add(&stats);
            }

            for (name, sets) in self.assist_sets(&block, lift) {
                assists.entry(name).or_default().push(BlockContribution {
                    block_id: stats.id.clone(),
                    block_name: stats.name.clone(),
                    gain: stats.gain,
                    end_e1rm: stats.end_e1rm,
                    peak_e1rm: stats.peak_e1rm,
                    sets,
                });
            }

            blocks.push(stats);
        }

        let heatmap = cells
            .into_iter()
            .map(|((reps, half_rpe), cell)| {
                let n = cell.count as f64;
                MetaHeatmapCell {
                    reps,
                    rpe: half_rpe as f64 / 2.0,
                    avg_end: cell.sum_end / n,
                    avg_peak: cell.sum_peak / n,
                    avg_gain: cell.sum_gain / n,
                    block_count: cell.count,
                }
            })
            .collect();

        let mut assists: Vec<AssistCorrelationRow> = assists
            .into_iter()
            .map(|(name, contributions)| {
                let n = contributions.len() as f64;
                AssistCorrelationRow {
                    category: self.taxonomy.resolve_category(&name),
                    avg_gain: contributions.iter().map(|c| c.gain).sum::<f64>() / n,
                    avg_end: contributions.iter().map(|c| c.end_e1rm).sum::<f64>() / n,
                    avg_peak: contributions.iter().map(|c| c.peak_e1rm).sum::<f64>() / n,
                    count: contributions.len(),
                    total_sets: contributions.iter().map(|c| c.sets).sum(),
                    blocks: contributions,
                    name,
                }
            })
            .collect();
        assists.sort_by(|a, b| b.avg_gain.total_cmp(&a.avg_gain).then_with(|| a.name.cmp(&b.name)));

        MetaBlockReport {
            lift,
            blocks,
            heatmap,
            assists,
        }
    }
}

impl MetaBlockReport {
    pub fn cell(&self, reps: u32, rpe: f64) -> Option<&MetaHeatmapCell> {
        self.heatmap.iter().find(|c| c.reps == reps && c.rpe == rpe)
    }

    /// Render the heatmap of average gain as an ASCII grid, RPE rows from
    /// hardest to easiest.
    pub fn render_ascii(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{} Block Heatmap (avg gain)\n", self.lift));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.heatmap.is_empty() {
            output.push_str("No block data available.\n");
            return output;
        }

        let reps: BTreeSet<u32> = self.heatmap.iter().map(|c| c.reps).collect();
        let mut rpes: Vec<f64> = self.heatmap.iter().map(|c| c.rpe).collect();
        rpes.sort_by(|a, b| b.total_cmp(a));
        rpes.dedup();

        output.push_str("RPE   ");
        for r in &reps {
            output.push_str(&format!("{:>7}", format!("{}r", r)));
        }
        output.push('\n');

        for rpe in rpes {
            output.push_str(&format!("{:<6}", format!("{:.1}", rpe)));
            for r in &reps {
                match self.cell(*r, rpe) {
                    Some(cell) => output.push_str(&format!("{:>+7.1}", cell.avg_gain)),
                    None => output.push_str(&format!("{:>7}", "·")),
                }
            }
            output.push('\n');
        }

        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("Blocks compared: {}\n", self.blocks.len()));

        if let Some(best) = self.assists.first() {
            output.push_str(&format!(
                "Top assist: {} ({:+.1} avg over {} blocks)\n",
                best.name, best.avg_gain, best.count
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::*;
    use crate::model::parse_instant;

    fn now() -> DateTime<Utc> {
        parse_instant("2024-12-31").unwrap()
    }

    fn comp_squat(sets: Vec<crate::model::SetRecord>) -> crate::model::ExerciseEntry {
        entry("Competition Squat", sets)
    }

    #[test]
    fn test_zero_selected_blocks() {
        let logs = vec![log("a", "A", "2024-01-01", vec![comp_squat(vec![set(300.0, 5.0, 7.0)])])];
        let report = MetaBlockComparator::standard(now()).compare(&[], &logs, CompetitionLift::Squat);
        assert!(report.blocks.is_empty());
        assert!(report.heatmap.is_empty());
        assert!(report.assists.is_empty());
    }

    #[test]
    fn test_end_to_end_block_numbers() {
        // Inserted out of order on purpose
        let logs = vec![
            log("d20", "A", "2024-01-20", vec![comp_squat(vec![set(310.0, 3.0, 9.0)])]),
            log("d1", "A", "2024-01-01", vec![comp_squat(vec![set(300.0, 5.0, 7.0)])]),
        ];
        let report = MetaBlockComparator::standard(now()).compare(
            &[program("A", "Block A")],
            &logs,
            CompetitionLift::Squat,
        );

        let stats = &report.blocks[0];
        assert_eq!(stats.start_e1rm, 380.0);
        assert_eq!(stats.peak_e1rm, 380.0);
        assert_eq!(stats.end_e1rm, 351.3);
        assert_eq!(stats.gain, -28.7);
        assert!(stats.cs_balance > 0.0 && stats.cs_balance < 1.0);
    }

    #[test]
    fn test_strict_name_matching() {
        let logs = vec![log(
            "d1",
            "A",
            "2024-01-01",
            vec![entry("Squat", vec![set(300.0, 5.0, 7.0)])],
        )];
        let report = MetaBlockComparator::standard(now()).compare(
            &[program("A", "Block A")],
            &logs,
            CompetitionLift::Squat,
        );
        assert!(report.blocks.is_empty());
    }

    #[test]
    fn test_cell_counts_once_per_block_and_averages_blocks() {
        let logs = vec![
            // Block A: three sets in the 5 @ 8 cell, gain +20
            log(
                "a1",
                "A",
                "2024-01-01",
                vec![comp_squat(vec![set(300.0, 5.0, 8.0), set(300.0, 5.0, 8.0)])],
            ),
            log("a2", "A", "2024-01-20", vec![comp_squat(vec![set(300.0, 5.0, 8.2)])]),
            // Block B: one set in the same cell, gain computed below
            log("b1", "B", "2024-03-01", vec![comp_squat(vec![set(300.0, 5.0, 8.0)])]),
            log("b2", "B", "2024-03-20", vec![comp_squat(vec![set(330.0, 3.0, 9.0)])]),
        ];
        let programs = vec![program("A", "Block A"), program("B", "Block B")];
        let report =
            MetaBlockComparator::standard(now()).compare(&programs, &logs, CompetitionLift::Squat);

        assert_eq!(report.blocks.len(), 2);
        let cell = report.cell(5, 8.0).unwrap();
        assert_eq!(cell.block_count, 2);
        let expected = (report.blocks[0].gain + report.blocks[1].gain) / 2.0;
        assert_eq!(cell.avg_gain, expected);

        // Only block B touched 3 @ 9
        assert_eq!(report.cell(3, 9.0).unwrap().block_count, 1);
        assert_eq!(report.cell(3, 9.0).unwrap().avg_gain, report.blocks[1].gain);
    }

    #[test]
    fn test_rpe_rounds_to_half_points() {
        let logs = vec![log(
            "a1",
            "A",
            "2024-01-01",
            vec![comp_squat(vec![set(300.0, 4.6, 8.3)])],
        )];
        let report = MetaBlockComparator::standard(now()).compare(
            &[program("A", "Block A")],
            &logs,
            CompetitionLift::Squat,
        );
        assert!(report.cell(5, 8.5).is_some());
    }

    #[test]
    fn test_fractional_single_lands_in_one_rep_column() {
        let logs = vec![log(
            "a1",
            "A",
            "2024-01-01",
            vec![comp_squat(vec![set(400.0, 0.4, 10.0)])],
        )];
        let report = MetaBlockComparator::standard(now()).compare(
            &[program("A", "Block A")],
            &logs,
            CompetitionLift::Squat,
        );
        assert_eq!(report.blocks.len(), 1);
        assert!(report.cell(1, 10.0).is_some());
        assert!(report.heatmap.iter().all(|cell| cell.reps >= 1));
    }

    #[test]
    fn test_assist_table_filters_categories() {
        let block = |id: &str, d1: &str, d2: &str, end_weight: f64| {
            vec![
                log(
                    &format!("{id}1"),
                    id,
                    d1,
                    vec![
                        comp_squat(vec![set(300.0, 5.0, 8.0)]),
                        entry("Pause Squat", vec![set(250.0, 3.0, 7.0), set(250.0, 3.0, 7.0)]),
                        entry("Bench Press", vec![set(200.0, 5.0, 8.0)]),
                        entry("Bicep Curl", vec![set(40.0, 12.0, 8.0)]),
                    ],
                ),
                log(
                    &format!("{id}2"),
                    id,
                    d2,
                    vec![
                        comp_squat(vec![set(end_weight, 5.0, 8.0)]),
                        entry("Leg Curl", vec![set(60.0, 10.0, 8.0)]),
                    ],
                ),
            ]
        };
        let mut logs = block("A", "2024-01-01", "2024-01-20", 330.0);
        logs.extend(block("B", "2024-03-01", "2024-03-20", 310.0));
        let programs = vec![program("A", "Block A"), program("B", "Block B")];

        let report =
            MetaBlockComparator::standard(now()).compare(&programs, &logs, CompetitionLift::Squat);
        let names: Vec<_> = report.assists.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Leg Curl", "Pause Squat"]);

        let pause = &report.assists[1];
        assert_eq!(pause.count, 2);
        assert_eq!(pause.total_sets, 4);
        assert_eq!(pause.blocks.len(), 2);
        assert!(report.assists.windows(2).all(|w| w[0].avg_gain >= w[1].avg_gain));
    }

    #[test]
    fn test_blocks_without_data_do_not_pollute_averages() {
        let logs = vec![
            log("a1", "A", "2024-01-01", vec![comp_squat(vec![set(300.0, 5.0, 8.0)])]),
            log("a2", "A", "2024-01-20", vec![comp_squat(vec![set(330.0, 5.0, 8.0)])]),
            log(
                "b1",
                "B",
                "2024-03-01",
                vec![entry("Pause Squat", vec![set(250.0, 5.0, 8.0)])],
            ),
        ];
        let programs = vec![program("A", "Block A"), program("B", "Block B")];
        let report =
            MetaBlockComparator::standard(now()).compare(&programs, &logs, CompetitionLift::Squat);

        assert_eq!(report.blocks.len(), 1);
        assert_eq!(report.cell(5, 8.0).unwrap().block_count, 1);
        assert!(report.assists.is_empty());
    }

    #[test]
    fn test_legacy_and_date_membership() {
        let mut spring = program("P", "Spring");
        spring.start_date = Some("2024-03-01".to_string());
        spring.end_date = Some("2024-03-31".to_string());

        let mut by_name = log("n", "ignored", "2024-05-01", vec![comp_squat(vec![set(300.0, 5.0, 8.0)])]);
        by_name.program_id = None;
        by_name.program_name = Some("Spring".to_string());
        let mut by_date = log("d", "ignored", "2024-03-15", vec![comp_squat(vec![set(320.0, 5.0, 8.0)])]);
        by_date.program_id = None;

        let logs = vec![by_date, by_name];
        let report =
            MetaBlockComparator::standard(now()).compare(&[spring], &logs, CompetitionLift::Squat);
        let stats = &report.blocks[0];
        // Chronological: the date-matched March log comes first
        assert_eq!(stats.start_e1rm, 394.7);
        assert_eq!(stats.end_e1rm, 370.0);
    }

    #[test]
    fn test_render_ascii() {
        let logs = vec![log("a1", "A", "2024-01-01", vec![comp_squat(vec![set(300.0, 5.0, 8.0)])])];
        let report = MetaBlockComparator::standard(now()).compare(
            &[program("A", "Block A")],
            &logs,
            CompetitionLift::Squat,
        );
        let ascii = report.render_ascii();
        assert!(ascii.contains("Squat Block Heatmap"));
        assert!(ascii.contains("5r"));
        assert!(ascii.contains("8.0"));

        let empty = MetaBlockComparator::standard(now()).compare(&[], &[], CompetitionLift::Bench);
        assert!(empty.render_ascii().contains("No block data available."));
    }
}
