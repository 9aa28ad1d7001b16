//! Statistical accumulator for interval cases.

use super::interval::IntervalReference;
use check_estimation_domain::Tally;

/// Collects success/trial counts over interval cases.
///
/// Counters are never reset during a run.
#[derive(Debug, Clone, Default)]
pub struct StatisticalAccumulator {
    tally: Tally,
}

impl StatisticalAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one case and return whether the value was inside its interval.
    pub fn observe(&mut self, interval: &IntervalReference, value: f64) -> bool {
        let inside = interval.contains(value);
        self.tally.record(inside);
        inside
    }

    /// Current counters.
    pub fn tally(&self) -> Tally {
        self.tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_counts_successes() {
        let interval = IntervalReference::new(0.0, 1.0).unwrap();
        let mut acc = StatisticalAccumulator::new();

        assert!(acc.observe(&interval, 0.5));
        assert!(!acc.observe(&interval, 1.5));
        assert!(acc.observe(&interval, 1.0));

        let tally = acc.tally();
        assert_eq!(tally.trials, 3);
        assert_eq!(tally.successes, 2);
    }
}
