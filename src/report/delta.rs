//! Delta arithmetic and the regression gate

/// Percentage beyond which the build gate fails
pub const FAIL_THRESHOLD_PERCENT: f64 = 10.0;

/// Percentage change of `current` relative to `baseline`.
///
/// A zero baseline admits no comparison and yields `None` instead of an
/// infinite or NaN percentage.
pub fn delta_percent(current: u64, baseline: u64) -> Option<f64> {
    if baseline == 0 {
        return None;
    }
    Some((current as f64 - baseline as f64) / baseline as f64 * 100.0)
}

/// Extreme deltas observed across one report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaExtremes {
    /// Largest delta seen
    pub max: f64,
    /// Smallest delta seen
    pub min: f64,
}

/// Fold a collection of deltas into its extremes.
///
/// Returns `None` for an empty collection, so a report with no rows never
/// trips the gate.
pub fn delta_extremes<I>(deltas: I) -> Option<DeltaExtremes>
where
    I: IntoIterator<Item = f64>,
{
    deltas.into_iter().fold(None, |acc, delta| {
        Some(match acc {
            None => DeltaExtremes {
                max: delta,
                min: delta,
            },
            Some(e) => DeltaExtremes {
                max: e.max.max(delta),
                min: e.min.min(delta),
            },
        })
    })
}

/// Result of evaluating the regression gate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GateOutcome {
    /// Worst regression exceeds the threshold; the build should fail
    pub regression: bool,
    /// Best improvement exceeds the threshold in the favorable direction
    pub improvement: bool,
}

/// Evaluate the gate over the extremes of a report.
///
/// The two checks are independent: a report can both celebrate an
/// improvement and fail on a regression. Only `regression` affects the
/// process exit code.
pub fn evaluate_gate(extremes: Option<&DeltaExtremes>) -> GateOutcome {
    match extremes {
        None => GateOutcome::default(),
        Some(e) => GateOutcome {
            regression: e.max.abs() > FAIL_THRESHOLD_PERCENT,
            improvement: e.min < -FAIL_THRESHOLD_PERCENT,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_delta_percent_basic() {
        assert_eq!(delta_percent(100, 80), Some(25.0));
        assert_eq!(delta_percent(80, 100), Some(-20.0));
        assert_eq!(delta_percent(100, 100), Some(0.0));
    }

    #[test]
    fn test_delta_percent_zero_baseline_is_no_comparison() {
        assert_eq!(delta_percent(100, 0), None);
        assert_eq!(delta_percent(0, 0), None);
    }

    #[test]
    fn test_delta_extremes_empty_is_none() {
        assert_eq!(delta_extremes(std::iter::empty()), None);
    }

    #[test]
    fn test_delta_extremes_folds_min_and_max() {
        let extremes = delta_extremes([3.0, -12.5, 0.0, 25.0]).unwrap();
        assert_eq!(extremes.max, 25.0);
        assert_eq!(extremes.min, -12.5);
    }

    #[test]
    fn test_gate_fires_strictly_above_threshold() {
        let at = delta_extremes([10.0]).unwrap();
        assert!(!evaluate_gate(Some(&at)).regression);

        let over = delta_extremes([10.01]).unwrap();
        assert!(evaluate_gate(Some(&over)).regression);
    }

    #[test]
    fn test_gate_uses_absolute_value_of_max() {
        // All rows improved dramatically; the max delta is still far from 0.
        let extremes = delta_extremes([-20.0, -15.0]).unwrap();
        let outcome = evaluate_gate(Some(&extremes));
        assert!(outcome.regression, "abs(max) > threshold trips the gate");
        assert!(outcome.improvement);
    }

    #[test]
    fn test_gate_both_checks_can_fire_independently() {
        let extremes = delta_extremes([-12.0, 0.0, 15.0]).unwrap();
        let outcome = evaluate_gate(Some(&extremes));
        assert!(outcome.regression);
        assert!(outcome.improvement);
    }

    #[test]
    fn test_gate_empty_report_is_silent() {
        assert_eq!(evaluate_gate(None), GateOutcome::default());
    }

    #[test]
    fn test_improvement_boundary() {
        let at = delta_extremes([-10.0]).unwrap();
        assert!(!evaluate_gate(Some(&at)).improvement);

        let past = delta_extremes([-10.01]).unwrap();
        assert!(evaluate_gate(Some(&past)).improvement);
    }

    proptest! {
        #[test]
        fn prop_identical_values_give_exactly_zero(value in 1u64..=u64::MAX / 2) {
            prop_assert_eq!(delta_percent(value, value), Some(0.0));
        }

        #[test]
        fn prop_delta_sign_matches_direction(
            current in 1u64..1_000_000_000u64,
            baseline in 1u64..1_000_000_000u64,
        ) {
            let delta = delta_percent(current, baseline).unwrap();
            if current > baseline {
                prop_assert!(delta > 0.0);
            } else if current < baseline {
                prop_assert!(delta < 0.0);
            } else {
                prop_assert_eq!(delta, 0.0);
            }
        }

        #[test]
        fn prop_extremes_bound_every_delta(deltas in proptest::collection::vec(-200.0f64..200.0, 1..32)) {
            let extremes = delta_extremes(deltas.iter().copied()).unwrap();
            for d in &deltas {
                prop_assert!(extremes.min <= *d);
                prop_assert!(extremes.max >= *d);
            }
        }
    }
}
