//! Output formatters

use anyhow::Result;
use check_estimation_domain::format::format_general;
use check_estimation_domain::{DiffEntry, DiffKind, StatisticalDecision, Verdict};
use std::io::Write;

/// JSON formatter
pub struct JsonFormatter;

impl JsonFormatter {
    /// Write the verdict as pretty JSON followed by a newline
    pub fn write<W: Write>(verdict: &Verdict, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, verdict)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Plain text formatter
///
/// Prints counted differences and whitespace mismatches in report order,
/// a statistics line when the hypothesis test rejects, and the summary line
/// when differences were found. An accepted verdict without whitespace
/// findings prints nothing.
pub struct PlainFormatter;

impl PlainFormatter {
    /// Write the verdict as diagnostic lines
    pub fn write<W: Write>(verdict: &Verdict, out: &mut W) -> Result<()> {
        for entry in verdict.report.iter().filter(|e| Self::is_printed(e)) {
            writeln!(out, "{}", entry)?;
        }

        if let Some(decision) = verdict.statistics.as_ref().filter(|d| !d.accepted) {
            writeln!(out, "{}", Self::statistics_line(decision))?;
        }

        if let Some(summary) = verdict.summary_line() {
            writeln!(out, "{}", summary)?;
        }

        Ok(())
    }

    fn is_printed(entry: &DiffEntry) -> bool {
        entry.is_difference() || entry.kind == DiffKind::WhitespaceMismatch
    }

    /// Describe a statistical decision in one line
    pub fn statistics_line(decision: &StatisticalDecision) -> String {
        let verdict = if decision.accepted { "accepted" } else { "rejected" };
        let relation = if decision.accepted { ">=" } else { "<" };
        format!(
            "statistics: {} of {} values inside their intervals, upper bound {} {} {} at alpha = {}: {}.",
            decision.tally.successes,
            decision.tally.trials,
            format_general(decision.interval.upper),
            relation,
            format_general(decision.parameters.target_probability()),
            format_general(decision.parameters.alpha()),
            verdict
        )
    }
}
