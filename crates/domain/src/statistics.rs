//! Statistical types: the success tally and the test decision.

use crate::parameters::TestParameters;
use serde::{Deserialize, Serialize};

/// Running success/trial counters for interval cases.
///
/// Counters only ever grow during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Cases whose value fell inside its interval
    pub successes: u64,
    /// Cases evaluated
    pub trials: u64,
}

impl Tally {
    /// An empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one trial.
    pub fn record(&mut self, success: bool) {
        self.trials += 1;
        if success {
            self.successes += 1;
        }
    }

    /// Trials that were not successes.
    pub fn failures(&self) -> u64 {
        self.trials - self.successes
    }

    /// Observed success proportion, `None` without trials.
    pub fn success_rate(&self) -> Option<f64> {
        if self.trials == 0 {
            None
        } else {
            Some(self.successes as f64 / self.trials as f64)
        }
    }

    /// Whether no trials were recorded.
    pub fn is_empty(&self) -> bool {
        self.trials == 0
    }
}

/// Confidence interval for a binomial proportion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound
    pub lower: f64,
    /// Upper bound
    pub upper: f64,
    /// Two-sided confidence level
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Whether `p` lies within the closed interval.
    pub fn contains(&self, p: f64) -> bool {
        self.lower <= p && p <= self.upper
    }
}

/// Outcome of the one-sided test of `H0: p = target` against `H1: p < target`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticalDecision {
    /// Counters the decision was made on
    pub tally: Tally,
    /// Test parameters in effect
    pub parameters: TestParameters,
    /// Continuity-corrected Wilson interval at confidence `1 - 2 * alpha`
    pub interval: ConfidenceInterval,
    /// Standard normal critical value `z(1 - alpha)`
    pub critical_value: f64,
    /// Continuity-corrected score statistic under H0
    pub score_statistic: f64,
    /// Lower-tail p-value of the score statistic
    pub p_value: f64,
    /// Whether H0 is retained
    pub accepted: bool,
    /// Name of the procedure
    pub test_used: String,
}
