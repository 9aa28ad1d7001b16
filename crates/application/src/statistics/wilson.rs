//! Wilson score intervals for a binomial proportion.
//!
//! The continuity-corrected form follows Newcombe (1998), method 4.

use super::normal::inverse_standard_normal_cdf;
use check_estimation_domain::{ConfidenceInterval, Tally};

/// Two-sided critical value for a confidence level.
pub fn two_sided_critical_value(confidence_level: f64) -> f64 {
    inverse_standard_normal_cdf(1.0 - (1.0 - confidence_level) / 2.0)
}

/// Plain Wilson score interval; `None` without trials.
pub fn wilson_interval(tally: &Tally, confidence_level: f64) -> Option<ConfidenceInterval> {
    if tally.is_empty() {
        return None;
    }

    let z = two_sided_critical_value(confidence_level);
    let n = tally.trials as f64;
    let p_hat = tally.successes as f64 / n;
    let z2 = z * z;

    let denominator = 1.0 + z2 / n;
    let center = (p_hat + z2 / (2.0 * n)) / denominator;
    let half_width = z * (p_hat * (1.0 - p_hat) / n + z2 / (4.0 * n * n)).sqrt() / denominator;

    Some(ConfidenceInterval {
        lower: (center - half_width).max(0.0),
        upper: (center + half_width).min(1.0),
        confidence_level,
    })
}

/// Continuity-corrected Wilson score interval; `None` without trials.
pub fn wilson_interval_corrected(tally: &Tally, confidence_level: f64) -> Option<ConfidenceInterval> {
    if tally.is_empty() {
        return None;
    }

    let (lower, upper) = corrected_bounds(tally, two_sided_critical_value(confidence_level));
    Some(ConfidenceInterval {
        lower,
        upper,
        confidence_level,
    })
}

/// Continuity-corrected Wilson bounds for critical value `z`.
///
/// The lower bound is 0 when there are no successes and the upper bound is
/// 1 when every trial succeeded. `tally` must not be empty.
pub fn corrected_bounds(tally: &Tally, z: f64) -> (f64, f64) {
    let x = tally.successes as f64;
    let n = tally.trials as f64;
    let p_hat = x / n;
    let q_hat = 1.0 - p_hat;
    let z2 = z * z;
    let denominator = 2.0 * (n + z2);

    let lower = if tally.successes == 0 {
        0.0
    } else {
        let radicand = (z2 - 2.0 - 1.0 / n + 4.0 * p_hat * (n * q_hat + 1.0)).max(0.0);
        (2.0 * x + z2 - 1.0 - z * radicand.sqrt()) / denominator
    };

    let upper = if tally.successes >= tally.trials {
        1.0
    } else {
        let radicand = (z2 + 2.0 - 1.0 / n + 4.0 * p_hat * (n * q_hat - 1.0)).max(0.0);
        (2.0 * x + z2 + 1.0 + z * radicand.sqrt()) / denominator
    };

    (lower.clamp(0.0, 1.0), upper.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(successes: u64, trials: u64) -> Tally {
        Tally { successes, trials }
    }

    #[test]
    fn test_newcombe_worked_example() {
        // 81 of 263, 95% confidence
        let ci = wilson_interval_corrected(&tally(81, 263), 0.95).unwrap();
        assert!((ci.lower - 0.2535).abs() < 5e-4, "lower = {}", ci.lower);
        assert!((ci.upper - 0.3682).abs() < 5e-4, "upper = {}", ci.upper);

        let plain = wilson_interval(&tally(81, 263), 0.95).unwrap();
        assert!((plain.lower - 0.2553).abs() < 5e-4);
        assert!((plain.upper - 0.3662).abs() < 5e-4);
    }

    #[test]
    fn test_correction_widens_interval() {
        let t = tally(15, 40);
        let plain = wilson_interval(&t, 0.9).unwrap();
        let corrected = wilson_interval_corrected(&t, 0.9).unwrap();

        assert!(corrected.lower < plain.lower);
        assert!(corrected.upper > plain.upper);
    }

    #[test]
    fn test_extreme_counts() {
        let all = wilson_interval_corrected(&tally(29, 29), 0.95).unwrap();
        assert_eq!(all.upper, 1.0);
        assert!((all.lower - 0.854).abs() < 1e-3, "lower = {}", all.lower);

        let none = wilson_interval_corrected(&tally(0, 29), 0.95).unwrap();
        assert_eq!(none.lower, 0.0);
        assert!((none.upper - 0.146).abs() < 1e-3, "upper = {}", none.upper);
    }

    #[test]
    fn test_empty_tally_has_no_interval() {
        assert!(wilson_interval(&Tally::new(), 0.95).is_none());
        assert!(wilson_interval_corrected(&Tally::new(), 0.95).is_none());
    }
}
