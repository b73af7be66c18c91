//! Load and stress primitives.
//!
//! Every estimated one-rep max in the crate goes through
//! [`estimate_one_rep_max`]; reports compare values across modules and
//! must agree to the last bit for the same set.

mod session;
mod stress;

pub use session::{category_stress, session_load, CategoryStress, SessionLoad};
pub use stress::{compute_stress, DefaultStressModel, StressModel, StressResult};

use crate::model::ParsedSet;

/// RPE-adjusted Epley estimate: `weight * (1 + (reps + (10 - rpe)) / 30)`.
///
/// Missing reps default to 1 and a missing RPE to 10 (a maximal single).
/// Returns 0.0 when the weight is not a positive finite number.
pub fn estimate_one_rep_max(weight: f64, reps: Option<f64>, rpe: Option<f64>) -> f64 {
    if !weight.is_finite() || weight <= 0.0 {
        return 0.0;
    }
    let reps = reps.unwrap_or(1.0);
    let rpe = rpe.unwrap_or(10.0);
    weight * (1.0 + (reps + (10.0 - rpe)) / 30.0)
}

impl ParsedSet {
    /// Estimated one-rep max of this set.
    pub fn e1rm(&self) -> f64 {
        estimate_one_rep_max(self.weight, Some(self.reps), self.rpe)
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_e1rm_exact_value() {
        assert_eq!(estimate_one_rep_max(225.0, Some(5.0), Some(8.0)), 277.5);
        assert_eq!(estimate_one_rep_max(300.0, Some(5.0), Some(7.0)), 380.0);
        assert_eq!(
            round_to(estimate_one_rep_max(310.0, Some(3.0), Some(9.0)), 1),
            351.3
        );
    }

    #[test]
    fn test_e1rm_defaults() {
        // Missing reps and RPE read as a maximal single
        let single = estimate_one_rep_max(200.0, None, None);
        assert_eq!(single, 200.0 * (1.0 + 1.0 / 30.0));
        assert_eq!(single, estimate_one_rep_max(200.0, Some(1.0), Some(10.0)));
    }

    #[test]
    fn test_e1rm_undefined_weight() {
        assert_eq!(estimate_one_rep_max(0.0, Some(5.0), Some(8.0)), 0.0);
        assert_eq!(estimate_one_rep_max(-20.0, Some(5.0), Some(8.0)), 0.0);
        assert_eq!(estimate_one_rep_max(f64::NAN, Some(5.0), Some(8.0)), 0.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(351.3333, 1), 351.3);
        assert_eq!(round_to(-28.6667, 1), -28.7);
        assert_eq!(round_to(0.456, 2), 0.46);
    }

    proptest! {
        #[test]
        fn prop_e1rm_increases_with_weight(
            w in 1.0f64..1000.0,
            dw in 0.5f64..100.0,
            reps in 1u32..30,
            rpe in 1u32..=10,
        ) {
            let (reps, rpe) = (Some(reps as f64), Some(rpe as f64));
            prop_assert!(estimate_one_rep_max(w + dw, reps, rpe) > estimate_one_rep_max(w, reps, rpe));
        }

        #[test]
        fn prop_e1rm_increases_with_reps(w in 1.0f64..1000.0, reps in 1u32..30, rpe in 1u32..=10) {
            let rpe = Some(rpe as f64);
            let lower = estimate_one_rep_max(w, Some(reps as f64), rpe);
            let higher = estimate_one_rep_max(w, Some(reps as f64 + 1.0), rpe);
            prop_assert!(higher > lower);
        }

        #[test]
        fn prop_e1rm_increases_as_rpe_drops(w in 1.0f64..1000.0, reps in 1u32..30, rpe in 2u32..=10) {
            let reps = Some(reps as f64);
            let harder = estimate_one_rep_max(w, reps, Some(rpe as f64));
            let easier = estimate_one_rep_max(w, reps, Some(rpe as f64 - 0.5));
            prop_assert!(easier > harder);
        }
    }
}
