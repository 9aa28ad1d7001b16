//! Diff reporter: collects discrepancies and forms the verdict.

use check_estimation_domain::{DiffEntry, DiffKind, StatisticalDecision, Tally, Verdict};

/// Accumulates diff entries in scan order and counts differences.
#[derive(Debug, Clone, Default)]
pub struct DiffReporter {
    ignore_whitespace: bool,
    entries: Vec<DiffEntry>,
    diff_count: usize,
    whitespace_mismatches: usize,
}

impl DiffReporter {
    /// Create a reporter; whitespace entries are suppressed when `ignore_whitespace` is set.
    pub fn new(ignore_whitespace: bool) -> Self {
        Self {
            ignore_whitespace,
            ..Self::default()
        }
    }

    /// Record a discrepancy at a line and optional token position.
    pub fn record(&mut self, line: usize, token: Option<usize>, kind: DiffKind) {
        let entry = DiffEntry::new(line, token, kind);
        if entry.is_difference() {
            self.diff_count += 1;
        }
        self.entries.push(entry);
    }

    /// Record a whitespace mismatch after the given token, or before the
    /// first token when `after` is `None`.
    pub fn record_whitespace(&mut self, line: usize, after: Option<usize>) {
        self.whitespace_mismatches += 1;
        if !self.ignore_whitespace {
            self.record(line, after, DiffKind::WhitespaceMismatch);
        }
    }

    /// Differences recorded so far.
    pub fn diff_count(&self) -> usize {
        self.diff_count
    }

    /// Whitespace mismatches seen so far, reported or not.
    pub fn whitespace_mismatches(&self) -> usize {
        self.whitespace_mismatches
    }

    /// Entries recorded so far.
    pub fn entries(&self) -> &[DiffEntry] {
        &self.entries
    }

    /// Merge the scan results with the statistical decision.
    pub fn finish(
        mut self,
        tally: Tally,
        statistics: Option<StatisticalDecision>,
        lines_compared: usize,
    ) -> Verdict {
        // Stable: entries sharing a position keep scan order
        self.entries
            .sort_by_key(|e| (e.line, e.token.unwrap_or(0)));

        let statistically_accepted = statistics.as_ref().map_or(true, |s| s.accepted);

        Verdict {
            accepted: self.diff_count == 0 && statistically_accepted,
            tally,
            diff_count: self.diff_count,
            lines_compared,
            whitespace_mismatches: self.whitespace_mismatches,
            report: self.entries,
            statistics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use check_estimation_domain::Side;

    #[test]
    fn test_informational_entries_do_not_count() {
        let mut reporter = DiffReporter::new(false);
        reporter.record_whitespace(1, Some(1));
        reporter.record(
            2,
            Some(1),
            DiffKind::OutsideInterval {
                value: 11.0,
                lower: 0.0,
                upper: 10.0,
            },
        );

        let verdict = reporter.finish(Tally::new(), None, 2);

        assert!(verdict.accepted);
        assert_eq!(verdict.diff_count, 0);
        assert_eq!(verdict.whitespace_mismatches, 1);
        assert_eq!(verdict.report.len(), 2);
    }

    #[test]
    fn test_ignored_whitespace_is_counted_not_reported() {
        let mut reporter = DiffReporter::new(true);
        reporter.record_whitespace(1, None);

        assert_eq!(reporter.whitespace_mismatches(), 1);
        assert!(reporter.entries().is_empty());
    }

    #[test]
    fn test_difference_rejects() {
        let mut reporter = DiffReporter::new(false);
        reporter.record(3, None, DiffKind::EndedEarly { ended: Side::Candidate });

        let verdict = reporter.finish(Tally::new(), None, 2);

        assert!(!verdict.accepted);
        assert_eq!(verdict.diff_count, 1);
        assert_eq!(verdict.summary_line().as_deref(), Some("Found 1 differences in 2 lines"));
    }

    #[test]
    fn test_entries_ordered_by_line_then_token() {
        let mut reporter = DiffReporter::new(false);
        reporter.record(2, Some(1), DiffKind::ParseFailure { side: Side::Candidate });
        reporter.record_whitespace(1, Some(2));
        reporter.record_whitespace(1, None);

        let verdict = reporter.finish(Tally::new(), None, 2);
        let positions: Vec<_> = verdict.report.iter().map(|e| (e.line, e.token)).collect();

        assert_eq!(positions, vec![(1, None), (1, Some(2)), (2, Some(1))]);
    }
}
