//! One-sided binomial test of `H0: p = p0` against `H1: p < p0`.
//!
//! The continuity-corrected Wilson interval is computed at two-sided
//! confidence `1 - 2 * alpha`, which makes its upper bound the one-sided
//! `1 - alpha` upper confidence bound for `p`. H0 is rejected iff that bound
//! lies strictly below `p0`.

use super::normal::{inverse_standard_normal_cdf, standard_normal_cdf};
use super::wilson::corrected_bounds;
use check_estimation_domain::{
    ConfidenceInterval, StatisticalDecision, Tally, TestParameters, UsageError,
};
use tracing::debug;

/// Name recorded in every decision.
pub const TEST_NAME: &str = "wilson_score_continuity_corrected";

/// Hypothesis test engine for one set of parameters
#[derive(Debug, Clone, Copy)]
pub struct HypothesisTest {
    parameters: TestParameters,
    critical_value: f64,
}

impl HypothesisTest {
    /// Prepare the test; computes the critical value `z(1 - alpha)`.
    pub fn new(parameters: TestParameters) -> Self {
        Self {
            parameters,
            critical_value: inverse_standard_normal_cdf(1.0 - parameters.alpha()),
        }
    }

    /// Standard normal critical value.
    pub fn critical_value(&self) -> f64 {
        self.critical_value
    }

    /// Test parameters.
    pub fn parameters(&self) -> TestParameters {
        self.parameters
    }

    /// Evaluate the tally; `None` when no trials were recorded.
    pub fn evaluate(&self, tally: Tally) -> Option<StatisticalDecision> {
        if tally.is_empty() {
            return None;
        }

        let target = self.parameters.target_probability();
        let (lower, upper) = corrected_bounds(&tally, self.critical_value);
        let accepted = upper >= target;

        let score_statistic = score_statistic(&tally, target);
        let p_value = standard_normal_cdf(score_statistic);

        debug!(
            successes = tally.successes,
            trials = tally.trials,
            upper,
            target,
            accepted,
            "Hypothesis test evaluated"
        );

        Some(StatisticalDecision {
            tally,
            parameters: self.parameters,
            interval: ConfidenceInterval {
                lower,
                upper,
                confidence_level: 1.0 - 2.0 * self.parameters.alpha(),
            },
            critical_value: self.critical_value,
            score_statistic,
            p_value,
            accepted,
            test_used: TEST_NAME.to_string(),
        })
    }

    /// Whether H0 is retained; an empty tally is always accepted.
    pub fn accepts(&self, tally: Tally) -> bool {
        self.evaluate(tally).map_or(true, |d| d.accepted)
    }
}

/// Continuity-corrected score statistic `(x + 1/2 - n p0) / sqrt(n p0 (1 - p0))`.
fn score_statistic(tally: &Tally, target: f64) -> f64 {
    let n = tally.trials as f64;
    let x = tally.successes as f64;
    (x + 0.5 - n * target) / (n * target * (1.0 - target)).sqrt()
}

/// Decide whether `successes` out of `trials` is consistent with
/// `target_probability` at significance level `alpha`.
///
/// Zero trials are accepted. Fails when a parameter lies outside (0, 1) or
/// `successes > trials`.
pub fn decide(
    successes: u64,
    trials: u64,
    target_probability: f64,
    alpha: f64,
) -> Result<bool, UsageError> {
    if successes > trials {
        return Err(UsageError::InvalidParameter {
            name: "successes".to_string(),
            value: successes.to_string(),
            reason: format!("exceeds the number of trials ({trials})"),
        });
    }

    let parameters = TestParameters::new(alpha, target_probability)?;
    Ok(HypothesisTest::new(parameters).accepts(Tally { successes, trials }))
}
