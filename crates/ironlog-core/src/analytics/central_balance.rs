//! Central-balance correlation: a block's central stress share against its
//! average gain on the canonical lifts.

use serde::{Deserialize, Serialize};

use super::{average_gain, canonical_lifts, parent_lift_series};
use crate::blocks::Block;
use crate::load::{round_to, DefaultStressModel, StressModel};
use crate::taxonomy::Taxonomy;

/// One scatter point per block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentralBalancePoint {
    /// Central / total stress, 2 dp
    pub x: f64,
    /// Average canonical-lift percent gain, 2 dp
    pub y: f64,
    /// Block name
    pub label: String,
}

/// Central-balance correlator.
pub struct CentralBalanceCorrelator<'t, M: StressModel = DefaultStressModel> {
    taxonomy: &'t Taxonomy,
    model: M,
    lifts: Vec<String>,
}

impl Default for CentralBalanceCorrelator<'static> {
    fn default() -> Self {
        Self::new(Taxonomy::standard(), DefaultStressModel::default())
    }
}

impl<'t, M: StressModel> CentralBalanceCorrelator<'t, M> {
    pub fn new(taxonomy: &'t Taxonomy, model: M) -> Self {
        Self {
            taxonomy,
            model,
            lifts: canonical_lifts(),
        }
    }

    /// Override the lifts whose gains are averaged.
    pub fn with_lifts(mut self, lifts: Vec<String>) -> Self {
        self.lifts = lifts;
        self
    }

    /// Average canonical-lift percent gain of a block, if any lift has data.
    pub fn block_gain(&self, block: &Block<'_>) -> Option<f64> {
        let logs = block.chronological_logs();
        average_gain(&parent_lift_series(&logs, self.taxonomy), &self.lifts)
    }

    /// One point per block with canonical-lift data, in block order.
    pub fn analyze(&self, blocks: &[Block<'_>]) -> Vec<CentralBalancePoint> {
        blocks
            .iter()
            .filter_map(|block| {
                let Some(gain) = self.block_gain(block) else {
                    tracing::debug!(block = %block.id, "no canonical lift data, dropping block");
                    return None;
                };
                let stress = block.stress(&self.model);
                Some(CentralBalancePoint {
                    x: round_to(stress.cs_balance(), 2),
                    y: round_to(gain, 2),
                    label: block.name.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::*;
    use crate::blocks::segment;
    use crate::load::compute_stress;

    #[test]
    fn test_empty_input() {
        assert!(CentralBalanceCorrelator::default().analyze(&[]).is_empty());
    }

    #[test]
    fn test_point_per_block_with_data() {
        let logs = vec![
            log(
                "a1",
                "A",
                "2024-01-01",
                vec![
                    entry("Squat", vec![set(200.0, 5.0, 8.0)]),
                    entry("Deadlift", vec![set(250.0, 3.0, 8.0)]),
                    entry("Leg Curl", vec![set(40.0, 12.0, 9.0)]),
                ],
            ),
            log(
                "a2",
                "A",
                "2024-01-21",
                vec![
                    entry("Squat", vec![set(210.0, 5.0, 8.0)]),
                    entry("Deadlift", vec![set(275.0, 3.0, 8.0)]),
                ],
            ),
            // No canonical lifts at all
            log(
                "b1",
                "B",
                "2024-03-01",
                vec![entry("Leg Curl", vec![set(40.0, 12.0, 9.0)])],
            ),
        ];
        let programs = vec![program("A", "Block A"), program("B", "Block B")];
        let blocks = segment(&logs, &programs);

        let points = CentralBalanceCorrelator::default().analyze(&blocks);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].label, "Block A");
        // Squat +5%, deadlift +10%, bench untrained
        assert_eq!(points[0].y, 7.5);

        let stress = compute_stress(5.0, 8.0)
            + compute_stress(3.0, 8.0)
            + compute_stress(12.0, 9.0)
            + compute_stress(5.0, 8.0)
            + compute_stress(3.0, 8.0);
        assert_eq!(points[0].x, round_to(stress.central / stress.total, 2));
    }

    #[test]
    fn test_no_stress_gives_zero_ratio() {
        let logs = vec![
            log(
                "a1",
                "A",
                "2024-01-01",
                vec![entry("Squat", vec![crate::model::SetRecord::new(200.0, 5.0, None)])],
            ),
            log(
                "a2",
                "A",
                "2024-01-08",
                vec![entry("Squat", vec![crate::model::SetRecord::new(210.0, 5.0, None)])],
            ),
        ];
        let blocks = segment(&logs, &[]);
        let points = CentralBalanceCorrelator::default().analyze(&blocks);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[0].y, 5.0);
    }
}
