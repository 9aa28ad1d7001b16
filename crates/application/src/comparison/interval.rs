//! Reference intervals for non-deterministic values.

use super::comparator::parse_float;
use serde::{Deserialize, Serialize};

/// Closed interval `[lower, upper]` from a two-token reference line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalReference {
    /// Smallest accepted value
    pub lower: f64,
    /// Largest accepted value
    pub upper: f64,
}

/// Why a reference line is not a usable interval.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum IntervalError {
    /// The bound at this 1-based token position is not a number
    #[error("{token}-th interval bound is not a number")]
    Unparseable {
        /// Token position of the bound
        token: usize,
    },
    /// `lower > upper`, or a bound is NaN
    #[error("interval [{lower}, {upper}] is empty")]
    Invalid {
        /// Lower bound as given
        lower: f64,
        /// Upper bound as given
        upper: f64,
    },
}

impl IntervalReference {
    /// Create an interval; requires `lower <= upper`. Infinite bounds are allowed.
    pub fn new(lower: f64, upper: f64) -> Result<Self, IntervalError> {
        if lower <= upper {
            Ok(Self { lower, upper })
        } else {
            Err(IntervalError::Invalid { lower, upper })
        }
    }

    /// Parse the two bound tokens of a reference line.
    pub fn parse(lower: &[u8], upper: &[u8]) -> Result<Self, IntervalError> {
        let lower = parse_float(lower).ok_or(IntervalError::Unparseable { token: 1 })?;
        let upper = parse_float(upper).ok_or(IntervalError::Unparseable { token: 2 })?;
        Self::new(lower, upper)
    }

    /// Whether `value` lies in the closed interval. NaN never does.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_closed() {
        let interval = IntervalReference::new(0.0, 10.0).unwrap();
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(3.3));
        assert!(!interval.contains(10.000001));
        assert!(!interval.contains(f64::NAN));
    }

    #[test]
    fn test_parse_bounds() {
        let interval = IntervalReference::parse(b"-1.5", b"inf").unwrap();
        assert_eq!(interval.lower, -1.5);
        assert!(interval.contains(1e300));

        assert_eq!(
            IntervalReference::parse(b"x", b"1"),
            Err(IntervalError::Unparseable { token: 1 })
        );
        assert_eq!(
            IntervalReference::parse(b"1", b"y"),
            Err(IntervalError::Unparseable { token: 2 })
        );
    }

    #[test]
    fn test_inverted_or_nan_bounds_are_invalid() {
        assert!(matches!(
            IntervalReference::new(2.0, 1.0),
            Err(IntervalError::Invalid { .. })
        ));
        assert!(IntervalReference::parse(b"nan", b"1").is_err());
        assert!(IntervalReference::new(3.0, 3.0).is_ok());
    }
}
