//! Comparison Engine - drives one run over a candidate and a reference stream
//!
//! The engine pulls line pairs until both streams are exhausted or one of
//! them ends early, routes every pair to an evaluator, and finally hands the
//! interval tally to the hypothesis test.

use super::accumulator::StatisticalAccumulator;
use super::evaluators::{IntervalEvaluator, LineEvaluator, LineInput, TokenEvaluator};
use super::reader::LineReader;
use super::reporter::DiffReporter;
use super::tokenizer::tokenize;
use crate::statistics::HypothesisTest;
use check_estimation_domain::{
    AppResult, CompareMode, ComparatorConfig, DiffKind, InputError, Side, StreamSource,
    TestParameters, Tolerance, UsageError, Verdict,
};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing::{debug, info, instrument};

/// The comparison engine
#[derive(Debug, Clone)]
pub struct ComparisonEngine {
    config: ComparatorConfig,
}

impl ComparisonEngine {
    /// Create an engine for one immutable configuration.
    pub fn new(config: ComparatorConfig) -> Self {
        Self { config }
    }

    /// Configuration in effect.
    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    /// Compare two buffered streams and form the verdict.
    ///
    /// Fails only when a stream cannot be read or a line exceeds the
    /// configured maximum length; every other discrepancy ends up in the
    /// verdict's report.
    #[instrument(skip_all, fields(mode = %self.config.mode))]
    pub fn compare<C: BufRead, R: BufRead>(&self, candidate: C, reference: R) -> AppResult<Verdict> {
        let mut reader = LineReader::new(candidate, reference, self.config.max_line_length);
        let mut reporter = DiffReporter::new(self.config.ignore_whitespace);
        let mut accumulator = StatisticalAccumulator::new();

        let token_evaluator = TokenEvaluator::new(self.config.tolerance);
        let interval_evaluator = IntervalEvaluator;
        let mut lines_compared = 0;

        loop {
            let pair = reader.next_pair()?;
            let number = pair.number;

            let (candidate, reference) = match (pair.candidate, pair.reference) {
                (Some(candidate), Some(reference)) => (candidate, reference),
                (None, None) => break,
                (None, Some(_)) => {
                    reporter.record(number, None, DiffKind::EndedEarly { ended: Side::Candidate });
                    break;
                }
                (Some(_), None) => {
                    reporter.record(number, None, DiffKind::EndedEarly { ended: Side::Reference });
                    break;
                }
            };
            lines_compared += 1;

            let (candidate, reference) = (tokenize(&candidate), tokenize(&reference));
            let input = LineInput {
                number,
                candidate: &candidate,
                reference: &reference,
            };

            let evaluator: &dyn LineEvaluator = match self.config.mode {
                CompareMode::Interval if interval_evaluator.applies_to(&input) => &interval_evaluator,
                _ => &token_evaluator,
            };
            evaluator.evaluate(&input, &mut reporter, &mut accumulator);
        }

        let tally = accumulator.tally();
        debug!(
            lines = lines_compared,
            differences = reporter.diff_count(),
            trials = tally.trials,
            successes = tally.successes,
            "Scan finished"
        );

        let statistics = HypothesisTest::new(self.config.parameters).evaluate(tally);
        let verdict = reporter.finish(tally, statistics, lines_compared);

        info!(
            accepted = verdict.accepted,
            differences = verdict.diff_count,
            lines = verdict.lines_compared,
            "Comparison complete"
        );

        Ok(verdict)
    }

    /// Open both sources and compare them.
    ///
    /// At most one source may be standard input.
    #[instrument(skip_all, fields(candidate = %candidate, reference = %reference))]
    pub fn compare_sources(
        &self,
        candidate: &StreamSource,
        reference: &StreamSource,
    ) -> AppResult<Verdict> {
        if candidate.is_stdin() && reference.is_stdin() {
            return Err(UsageError::BothStandardInput.into());
        }

        let candidate = open_source(candidate)?;
        let reference = open_source(reference)?;
        self.compare(candidate, reference)
    }
}

fn open_source(source: &StreamSource) -> AppResult<Box<dyn BufRead>> {
    match source {
        StreamSource::StandardInput => Ok(Box::new(io::stdin().lock())),
        StreamSource::File(path) => {
            let file = File::open(path).map_err(|source| InputError::Open {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Builder for ComparisonEngine
pub struct ComparisonEngineBuilder {
    config: ComparatorConfig,
}

impl ComparisonEngineBuilder {
    /// Start from the given tolerance and defaults elsewhere.
    pub fn new(tolerance: Tolerance) -> Self {
        Self {
            config: ComparatorConfig::new(tolerance),
        }
    }

    pub fn config(mut self, config: ComparatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn mode(mut self, mode: CompareMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn parameters(mut self, parameters: TestParameters) -> Self {
        self.config.parameters = parameters;
        self
    }

    pub fn ignore_whitespace(mut self, ignore: bool) -> Self {
        self.config.ignore_whitespace = ignore;
        self
    }

    pub fn max_line_length(mut self, limit: usize) -> Self {
        self.config.max_line_length = limit;
        self
    }

    pub fn build(self) -> ComparisonEngine {
        ComparisonEngine::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use check_estimation_domain::AppError;

    fn engine(mode: CompareMode) -> ComparisonEngine {
        ComparisonEngineBuilder::new(Tolerance::new(1e-7, 1e-7).unwrap())
            .mode(mode)
            .build()
    }

    #[test]
    fn test_identical_streams() {
        let text = "1 2 3\nhello world\n4.5\n";
        let verdict = engine(CompareMode::Tokens)
            .compare(text.as_bytes(), text.as_bytes())
            .unwrap();

        assert!(verdict.accepted);
        assert_eq!(verdict.diff_count, 0);
        assert_eq!(verdict.lines_compared, 3);
        assert!(verdict.report.is_empty());
        assert!(verdict.statistics.is_none());
    }

    #[test]
    fn test_candidate_ends_early_stops_scan() {
        let verdict = engine(CompareMode::Tokens)
            .compare("1\n".as_bytes(), "1\n2\n3\n".as_bytes())
            .unwrap();

        assert!(!verdict.accepted);
        assert_eq!(verdict.diff_count, 1);
        assert_eq!(verdict.lines_compared, 1);
        assert_eq!(verdict.report[0].to_string(), "line   2: file 1 ended before 2.");
    }

    #[test]
    fn test_reference_ends_early() {
        let verdict = engine(CompareMode::Tokens)
            .compare("1\n2\n".as_bytes(), "1\n".as_bytes())
            .unwrap();

        assert_eq!(verdict.report[0].to_string(), "line   2: file 2 ended before 1.");
    }

    #[test]
    fn test_token_count_mismatch_continues_with_next_line() {
        let verdict = engine(CompareMode::Tokens)
            .compare("5\nx\n".as_bytes(), "5 5\ny\n".as_bytes())
            .unwrap();

        assert_eq!(verdict.diff_count, 2);
        assert_eq!(verdict.lines_compared, 2);
        assert_eq!(verdict.report[1].line, 2);
    }

    #[test]
    fn test_interval_mode_mixes_cases() {
        let verdict = engine(CompareMode::Interval)
            .compare("3\n1 2 3\n".as_bytes(), "0 10\n1 2 3\n".as_bytes())
            .unwrap();

        assert!(verdict.accepted);
        assert_eq!(verdict.tally.trials, 1);
        assert_eq!(verdict.tally.successes, 1);
        assert!(verdict.statistics.is_some());
    }

    #[test]
    fn test_tokens_mode_treats_interval_lines_as_tokens() {
        let verdict = engine(CompareMode::Tokens)
            .compare("3\n".as_bytes(), "0 10\n".as_bytes())
            .unwrap();

        // numeric mismatch on the 1st token, then the missing 2nd token
        assert!(verdict.tally.is_empty());
        assert_eq!(verdict.diff_count, 2);
    }

    #[test]
    fn test_line_too_long_is_fatal() {
        let engine = ComparisonEngineBuilder::new(Tolerance::exact())
            .max_line_length(8)
            .build();

        let err = engine
            .compare("short\n".as_bytes(), "much too long\n".as_bytes())
            .unwrap_err();

        assert_eq!(err.error_code(), "LINE_TOO_LONG");
    }

    #[test]
    fn test_both_stdin_rejected() {
        let err = engine(CompareMode::Interval)
            .compare_sources(&StreamSource::StandardInput, &StreamSource::StandardInput)
            .unwrap_err();

        assert!(matches!(err, AppError::Usage(UsageError::BothStandardInput)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let missing = StreamSource::from_arg("/nonexistent/check-estimation/answer.txt");
        let err = engine(CompareMode::Interval)
            .compare_sources(&missing, &missing)
            .unwrap_err();

        assert!(matches!(err, AppError::Input(InputError::Open { .. })));
        assert_eq!(err.exit_code(), 1);
    }
}
