//! Diff report entries and the final verdict.

use crate::format::{format_general, format_scientific};
use crate::side::Side;
use crate::statistics::{StatisticalDecision, Tally};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an entry counts against the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Counted as a difference; any such entry rejects the output
    Difference,
    /// Reported only; never affects acceptance
    Informational,
}

/// Kind of discrepancy found while scanning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffKind {
    /// One stream ran out of lines while the other still had one
    EndedEarly {
        /// The stream that ended
        ended: Side,
    },
    /// A side lacks the token at this position
    MissingToken {
        /// Side without the token
        side: Side,
    },
    /// A side has a token the other side does not
    ExcessToken {
        /// Side with the extra token
        side: Side,
    },
    /// A token expected to be numeric failed to parse
    ParseFailure {
        /// Side whose token failed
        side: Side,
    },
    /// Two numbers differ beyond tolerance
    NumericMismatch {
        /// Candidate value
        candidate: f64,
        /// Reference value
        reference: f64,
        /// Absolute difference, when it exceeds the absolute tolerance
        abs_diff: Option<f64>,
        /// Relative difference, when it exceeds the relative tolerance
        rel_diff: Option<f64>,
    },
    /// A reference interval with `lower > upper` or a NaN bound
    InvalidInterval {
        /// Lower bound as given
        lower: f64,
        /// Upper bound as given
        upper: f64,
    },
    /// A candidate value outside its reference interval
    OutsideInterval {
        /// Candidate value
        value: f64,
        /// Lower bound
        lower: f64,
        /// Upper bound
        upper: f64,
    },
    /// Whitespace runs differ
    WhitespaceMismatch,
}

impl DiffKind {
    /// Severity of this kind of entry.
    pub fn severity(&self) -> Severity {
        match self {
            Self::OutsideInterval { .. } | Self::WhitespaceMismatch => Severity::Informational,
            _ => Severity::Difference,
        }
    }
}

/// One discrepancy at a line and token position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffEntry {
    /// 1-based line number
    pub line: usize,
    /// 1-based token ordinal; `None` for line-level entries and for the
    /// whitespace preceding the first token
    pub token: Option<usize>,
    /// What was found
    pub kind: DiffKind,
}

impl DiffEntry {
    /// Create an entry.
    pub fn new(line: usize, token: Option<usize>, kind: DiffKind) -> Self {
        Self { line, token, kind }
    }

    /// Severity of the entry.
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// Whether the entry counts as a difference.
    pub fn is_difference(&self) -> bool {
        self.severity() == Severity::Difference
    }
}

impl fmt::Display for DiffEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = self.token.unwrap_or(1);
        write!(f, "line {:>3}: ", self.line)?;
        match &self.kind {
            DiffKind::EndedEarly { ended } => {
                write!(f, "{} ended before {}.", ended, ended.other().file_number())
            }
            DiffKind::MissingToken { side } => write!(f, "{} misses {}-th token.", side, token),
            DiffKind::ExcessToken { side } => {
                write!(f, "{} has excess {}-th token.", side, token)
            }
            DiffKind::ParseFailure { side } => write!(
                f,
                "{}, {}-th entry cannot be parsed as float.",
                side, token
            ),
            DiffKind::NumericMismatch {
                candidate,
                reference,
                abs_diff,
                rel_diff,
            } => {
                write!(
                    f,
                    "{}-th float differs: {:>8} != {:<8}",
                    token,
                    format_general(*candidate),
                    format_general(*reference)
                )?;
                if let Some(abs_diff) = abs_diff {
                    write!(f, "  absdiff = {:>9}", format_scientific(*abs_diff))?;
                }
                if let Some(rel_diff) = rel_diff {
                    write!(f, "  reldiff = {:>9}", format_scientific(*rel_diff))?;
                }
                Ok(())
            }
            DiffKind::InvalidInterval { lower, upper } => write!(
                f,
                "interval [{}, {}] is invalid.",
                format_general(*lower),
                format_general(*upper)
            ),
            DiffKind::OutsideInterval {
                value,
                lower,
                upper,
            } => write!(
                f,
                "{}-th value {} outside interval [{}, {}].",
                token,
                format_general(*value),
                format_general(*lower),
                format_general(*upper)
            ),
            DiffKind::WhitespaceMismatch => match self.token {
                Some(after) => write!(f, "whitespace mismatch after {}-th token.", after),
                None => f.write_str("whitespace mismatch before 1-th token."),
            },
        }
    }
}

/// Final result of one comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the candidate output is accepted
    pub accepted: bool,
    /// Interval case counters
    pub tally: Tally,
    /// Number of entries with [`Severity::Difference`]
    pub diff_count: usize,
    /// Line pairs in which both streams supplied a line
    pub lines_compared: usize,
    /// Whitespace differences seen, reported or not
    pub whitespace_mismatches: usize,
    /// Entries in line, then token order
    pub report: Vec<DiffEntry>,
    /// Hypothesis test result; `None` when no interval case was evaluated
    pub statistics: Option<StatisticalDecision>,
}

impl Verdict {
    /// Entries counted as differences.
    pub fn differences(&self) -> impl Iterator<Item = &DiffEntry> {
        self.report.iter().filter(|e| e.is_difference())
    }

    /// Whether the hypothesis test (if any) retained H0.
    pub fn statistically_accepted(&self) -> bool {
        self.statistics.as_ref().map_or(true, |s| s.accepted)
    }

    /// Closing summary line, present when differences were found.
    pub fn summary_line(&self) -> Option<String> {
        (self.diff_count > 0).then(|| {
            format!(
                "Found {} differences in {} lines",
                self.diff_count, self.lines_compared
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ended_early_message() {
        let entry = DiffEntry::new(
            4,
            None,
            DiffKind::EndedEarly {
                ended: Side::Candidate,
            },
        );
        assert_eq!(entry.to_string(), "line   4: file 1 ended before 2.");
        assert!(entry.is_difference());
    }

    #[test]
    fn test_numeric_mismatch_message() {
        let entry = DiffEntry::new(
            12,
            Some(3),
            DiffKind::NumericMismatch {
                candidate: 1.5,
                reference: 2.0,
                abs_diff: Some(0.5),
                rel_diff: Some(0.25),
            },
        );
        assert_eq!(
            entry.to_string(),
            "line  12: 3-th float differs:      1.5 != 2         absdiff = 5.00000E-01  reldiff = 2.50000E-01"
        );
    }

    #[test]
    fn test_informational_kinds() {
        let ws = DiffEntry::new(1, Some(2), DiffKind::WhitespaceMismatch);
        assert_eq!(ws.severity(), Severity::Informational);
        assert_eq!(ws.to_string(), "line   1: whitespace mismatch after 2-th token.");

        let leading = DiffEntry::new(1, None, DiffKind::WhitespaceMismatch);
        assert_eq!(
            leading.to_string(),
            "line   1: whitespace mismatch before 1-th token."
        );
    }

    #[test]
    fn test_summary_line() {
        let verdict = Verdict {
            accepted: false,
            tally: Tally::new(),
            diff_count: 2,
            lines_compared: 10,
            whitespace_mismatches: 0,
            report: vec![],
            statistics: None,
        };
        assert_eq!(
            verdict.summary_line().as_deref(),
            Some("Found 2 differences in 10 lines")
        );
        assert!(verdict.statistically_accepted());
    }
}
