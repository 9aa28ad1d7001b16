//! Comparator configuration.
//!
//! All run-wide settings are collected into one immutable [`ComparatorConfig`]
//! record that is handed to the engine at construction time.

use crate::errors::UsageError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default significance level of the hypothesis test.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Default target success probability.
pub const DEFAULT_PROBABILITY: f64 = 0.95;

/// Default maximum line length in bytes, terminator excluded.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 1 << 20;

/// Parameters of the one-sided binomial test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestParameters {
    alpha: f64,
    target_probability: f64,
}

impl TestParameters {
    /// Create validated test parameters; both values must lie in (0, 1).
    pub fn new(alpha: f64, target_probability: f64) -> Result<Self, UsageError> {
        require_open_unit("significance level alpha", alpha)?;
        require_open_unit("probability", target_probability)?;
        Ok(Self {
            alpha,
            target_probability,
        })
    }

    /// Significance level (Type I error rate).
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Success probability under the null hypothesis.
    pub fn target_probability(&self) -> f64 {
        self.target_probability
    }
}

impl Default for TestParameters {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            target_probability: DEFAULT_PROBABILITY,
        }
    }
}

/// Absolute and relative tolerance for comparing finite numbers.
///
/// A pair of finite values is equal when either tolerance is satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    absolute: f64,
    relative: f64,
}

impl Tolerance {
    /// Create validated tolerances; both must be non-negative numbers.
    pub fn new(absolute: f64, relative: f64) -> Result<Self, UsageError> {
        require_non_negative("absolute tolerance", absolute)?;
        require_non_negative("relative tolerance", relative)?;
        Ok(Self { absolute, relative })
    }

    /// Tolerance that only accepts identical values.
    pub fn exact() -> Self {
        Self {
            absolute: 0.0,
            relative: 0.0,
        }
    }

    /// Maximum absolute deviation.
    pub fn absolute(&self) -> f64 {
        self.absolute
    }

    /// Maximum deviation relative to the reference value.
    pub fn relative(&self) -> f64 {
        self.relative
    }
}

/// How line pairs are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareMode {
    /// Every line is compared token by token with numeric tolerance
    #[default]
    Tokens,
    /// Two-token reference lines are `lower upper` intervals for a single
    /// candidate value; other lines are compared token by token
    Interval,
}

impl fmt::Display for CompareMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tokens => f.write_str("tokens"),
            Self::Interval => f.write_str("interval"),
        }
    }
}

impl FromStr for CompareMode {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tokens" | "token" => Ok(Self::Tokens),
            "interval" | "intervals" => Ok(Self::Interval),
            _ => Err(UsageError::InvalidParameter {
                name: "mode".to_string(),
                value: s.to_string(),
                reason: "expected 'tokens' or 'interval'".to_string(),
            }),
        }
    }
}

/// Immutable configuration of one comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparatorConfig {
    /// Line interpretation
    pub mode: CompareMode,
    /// Numeric tolerance for token comparison
    pub tolerance: Tolerance,
    /// Hypothesis test parameters for interval cases
    pub parameters: TestParameters,
    /// Suppress whitespace mismatch entries
    pub ignore_whitespace: bool,
    /// Maximum accepted line length in bytes
    pub max_line_length: usize,
}

impl ComparatorConfig {
    /// Configuration with the given tolerance and defaults elsewhere.
    pub fn new(tolerance: Tolerance) -> Self {
        Self {
            mode: CompareMode::default(),
            tolerance,
            parameters: TestParameters::default(),
            ignore_whitespace: false,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }

    /// Set the comparison mode.
    pub fn with_mode(mut self, mode: CompareMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the hypothesis test parameters.
    pub fn with_parameters(mut self, parameters: TestParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Toggle whitespace mismatch reporting.
    pub fn with_ignore_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_whitespace = ignore;
        self
    }

    /// Set the maximum line length.
    pub fn with_max_line_length(mut self, limit: usize) -> Self {
        self.max_line_length = limit;
        self
    }
}

fn require_open_unit(name: &str, value: f64) -> Result<(), UsageError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(UsageError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
            reason: "must lie strictly between 0 and 1".to_string(),
        })
    }
}

fn require_non_negative(name: &str, value: f64) -> Result<(), UsageError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(UsageError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
            reason: "must be a non-negative number".to_string(),
        })
    }
}
