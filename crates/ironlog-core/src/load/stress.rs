//! Set stress model.
//!
//! The engine only relies on the contract of [`StressModel`]: a pure
//! function of positive reps and RPE returning non-negative totals where
//! central and peripheral add up to the total. Results are summed linearly
//! across sets, exercises and blocks.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Stress decomposition for one set or an aggregate of sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StressResult {
    pub total: f64,
    pub central: f64,
    pub peripheral: f64,
}

impl StressResult {
    pub const ZERO: StressResult = StressResult {
        total: 0.0,
        central: 0.0,
        peripheral: 0.0,
    };

    /// Central share of total stress, 0 when nothing was recorded.
    pub fn cs_balance(&self) -> f64 {
        if self.total > 0.0 {
            self.central / self.total
        } else {
            0.0
        }
    }

    pub fn is_zero(&self) -> bool {
        self.total <= 0.0
    }
}

impl Add for StressResult {
    type Output = StressResult;

    fn add(self, rhs: Self) -> Self::Output {
        StressResult {
            total: self.total + rhs.total,
            central: self.central + rhs.central,
            peripheral: self.peripheral + rhs.peripheral,
        }
    }
}

impl AddAssign for StressResult {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for StressResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(StressResult::ZERO, Add::add)
    }
}

/// Stress model seam.
pub trait StressModel {
    /// Stress of one set. Must return [`StressResult::ZERO`] unless both
    /// inputs are positive.
    fn compute(&self, reps: f64, rpe: f64) -> StressResult;
}

/// Default model.
///
/// Total stress is the effort-weighted rep count `reps * min(rpe, 10) / 10`.
/// The central share is the relative intensity of the set (fraction of the
/// estimated max actually lifted) raised to `central_exponent`, so heavy
/// low-rep work lands mostly on the central side and long sets far from
/// failure mostly on the peripheral side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultStressModel {
    pub central_exponent: f64,
}

impl Default for DefaultStressModel {
    fn default() -> Self {
        Self {
            central_exponent: 2.0,
        }
    }
}

impl DefaultStressModel {
    pub fn new(central_exponent: f64) -> Self {
        Self { central_exponent }
    }
}

impl StressModel for DefaultStressModel {
    fn compute(&self, reps: f64, rpe: f64) -> StressResult {
        if !(reps > 0.0 && rpe > 0.0 && reps.is_finite() && rpe.is_finite()) {
            return StressResult::ZERO;
        }
        let total = reps * rpe.min(10.0) / 10.0;
        let reps_in_reserve = (10.0 - rpe).max(0.0);
        let relative_intensity = 1.0 / (1.0 + (reps + reps_in_reserve) / 30.0);
        let share = relative_intensity.powf(self.central_exponent).clamp(0.0, 1.0);
        let central = total * share;
        StressResult {
            total,
            central,
            peripheral: total - central,
        }
    }
}

/// Stress of one set under the default model.
pub fn compute_stress(reps: f64, rpe: f64) -> StressResult {
    DefaultStressModel::default().compute(reps, rpe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_non_positive_inputs_contribute_nothing() {
        assert_eq!(compute_stress(0.0, 8.0), StressResult::ZERO);
        assert_eq!(compute_stress(5.0, 0.0), StressResult::ZERO);
        assert_eq!(compute_stress(-3.0, 8.0), StressResult::ZERO);
    }

    #[test]
    fn test_heavy_single_is_mostly_central() {
        let single = compute_stress(1.0, 10.0);
        assert!(single.cs_balance() > 0.9);

        let pump = compute_stress(15.0, 7.0);
        assert!(pump.cs_balance() < 0.5);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(compute_stress(5.0, 8.0), compute_stress(5.0, 8.0));
    }

    #[test]
    fn test_sum_of_results() {
        let sets = [compute_stress(5.0, 8.0), compute_stress(3.0, 9.0)];
        let total: StressResult = sets.iter().copied().sum();
        assert!((total.total - (sets[0].total + sets[1].total)).abs() < 1e-12);
        assert_eq!(StressResult::ZERO.cs_balance(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_central_plus_peripheral_is_total(reps in 0.5f64..40.0, rpe in 0.5f64..11.0) {
            let s = compute_stress(reps, rpe);
            prop_assert!(s.total > 0.0);
            prop_assert!(s.central >= 0.0);
            prop_assert!(s.peripheral >= 0.0);
            prop_assert!((s.central + s.peripheral - s.total).abs() < 1e-9);
        }
    }
}
