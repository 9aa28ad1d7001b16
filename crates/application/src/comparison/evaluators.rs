//! Line evaluators.
//!
//! Each line pair is routed to exactly one evaluator: the token evaluator
//! compares tokens under the numeric tolerance policy, the interval
//! evaluator checks a single value against a `lower upper` reference line
//! and feeds the statistical accumulator.

use super::accumulator::StatisticalAccumulator;
use super::comparator::{compare_slots, parse_float, NumericDifference};
use super::interval::{IntervalError, IntervalReference};
use super::reporter::DiffReporter;
use super::tokenizer::TokenizedLine;
use check_estimation_domain::{ComparisonOutcome, DiffKind, Side, Tolerance};
use tracing::debug;

/// One tokenized line pair.
#[derive(Debug, Clone, Copy)]
pub struct LineInput<'l, 'a> {
    /// 1-based line number
    pub number: usize,
    /// Candidate line
    pub candidate: &'l TokenizedLine<'a>,
    /// Reference line
    pub reference: &'l TokenizedLine<'a>,
}

/// Evaluates a line pair, recording discrepancies and interval cases.
pub trait LineEvaluator {
    /// Evaluate one line pair.
    fn evaluate(
        &self,
        input: &LineInput<'_, '_>,
        reporter: &mut DiffReporter,
        accumulator: &mut StatisticalAccumulator,
    );

    /// Get the evaluator type name.
    fn name(&self) -> &'static str;
}

/// Token-by-token comparison with numeric tolerance.
#[derive(Debug, Clone, Copy)]
pub struct TokenEvaluator {
    tolerance: Tolerance,
}

impl TokenEvaluator {
    /// Create an evaluator with the given tolerance.
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }
}

impl LineEvaluator for TokenEvaluator {
    fn evaluate(
        &self,
        input: &LineInput<'_, '_>,
        reporter: &mut DiffReporter,
        _accumulator: &mut StatisticalAccumulator,
    ) {
        let (candidate, reference) = (input.candidate, input.reference);

        if candidate.leading != reference.leading {
            reporter.record_whitespace(input.number, None);
        }

        let slots = candidate.len().max(reference.len());
        for slot in 0..slots {
            let (c, r) = (candidate.get(slot), reference.get(slot));
            let Some(outcome) = compare_slots(c, r, &self.tolerance) else {
                break;
            };

            if let Some(kind) = describe(outcome, &self.tolerance) {
                reporter.record(input.number, Some(slot + 1), kind);
            }
            if outcome.halts_line() {
                break;
            }

            // Gaps are only comparable when both lines continue or both end
            let c_continues = slot + 1 < candidate.len();
            let r_continues = slot + 1 < reference.len();
            if let (Some(c), Some(r)) = (c, r) {
                if c_continues == r_continues && c.trailing != r.trailing {
                    reporter.record_whitespace(input.number, Some(slot + 1));
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "tokens"
    }
}

/// Range containment check for `lower upper` reference lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalEvaluator;

impl IntervalEvaluator {
    /// Whether the line pair is an interval case: a reference line of two
    /// numbers against anything but a two-token candidate line.
    pub fn applies_to(&self, input: &LineInput<'_, '_>) -> bool {
        match input.reference.tokens.as_slice() {
            [lower, upper] => {
                input.candidate.len() != 2
                    && parse_float(lower.text).is_some()
                    && parse_float(upper.text).is_some()
            }
            _ => false,
        }
    }
}

impl LineEvaluator for IntervalEvaluator {
    fn evaluate(
        &self,
        input: &LineInput<'_, '_>,
        reporter: &mut DiffReporter,
        accumulator: &mut StatisticalAccumulator,
    ) {
        let line = input.number;
        let (Some(lower), Some(upper)) = (input.reference.get(0), input.reference.get(1)) else {
            return;
        };

        let interval = match IntervalReference::parse(lower.text, upper.text) {
            Ok(interval) => interval,
            Err(IntervalError::Unparseable { token }) => {
                reporter.record(line, Some(token), DiffKind::ParseFailure { side: Side::Reference });
                return;
            }
            Err(IntervalError::Invalid { lower, upper }) => {
                reporter.record(line, None, DiffKind::InvalidInterval { lower, upper });
                return;
            }
        };

        let value = match input.candidate.tokens.as_slice() {
            [] => {
                reporter.record(line, Some(1), DiffKind::MissingToken { side: Side::Candidate });
                return;
            }
            [token] => token,
            [_, ..] => {
                reporter.record(line, Some(2), DiffKind::ExcessToken { side: Side::Candidate });
                return;
            }
        };

        let Some(value) = parse_float(value.text) else {
            reporter.record(line, Some(1), DiffKind::ParseFailure { side: Side::Candidate });
            return;
        };

        if !accumulator.observe(&interval, value) {
            debug!(line, value, lower = interval.lower, upper = interval.upper, "value outside interval");
            reporter.record(
                line,
                Some(1),
                DiffKind::OutsideInterval {
                    value,
                    lower: interval.lower,
                    upper: interval.upper,
                },
            );
        }
    }

    fn name(&self) -> &'static str {
        "interval"
    }
}

/// Turn a non-matching outcome into a diff entry kind.
fn describe(outcome: ComparisonOutcome, tolerance: &Tolerance) -> Option<DiffKind> {
    match outcome {
        ComparisonOutcome::ExactMatch | ComparisonOutcome::NumericWithinTolerance => None,
        ComparisonOutcome::NumericOutOfTolerance {
            candidate,
            reference,
        } => {
            let (abs_diff, rel_diff) = if candidate.is_finite() && reference.is_finite() {
                let diff = NumericDifference::between(candidate, reference);
                (
                    (diff.absolute > tolerance.absolute()).then_some(diff.absolute),
                    (diff.relative > tolerance.relative()).then_some(diff.relative),
                )
            } else {
                (None, None)
            };
            Some(DiffKind::NumericMismatch {
                candidate,
                reference,
                abs_diff,
                rel_diff,
            })
        }
        ComparisonOutcome::ParseFailure(side) => Some(DiffKind::ParseFailure { side }),
        ComparisonOutcome::MissingToken(side) => Some(DiffKind::MissingToken { side }),
        ComparisonOutcome::ExcessToken(side) => Some(DiffKind::ExcessToken { side }),
    }
}
