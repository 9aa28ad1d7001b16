//! Fluent builder for comparison scenarios.

use crate::fixtures::{interval_case, interval_streams, write_fixture};
use check_estimation_domain::StreamSource;
use std::path::{Path, PathBuf};

/// Candidate and reference streams assembled line by line
#[derive(Debug, Clone, Default)]
pub struct EstimationScenario {
    candidate: String,
    reference: String,
}

/// Paths of a scenario written to disk
#[derive(Debug, Clone)]
pub struct ScenarioFiles {
    /// Candidate output (file 1)
    pub candidate: PathBuf,
    /// Reference output (file 2)
    pub reference: PathBuf,
}

impl ScenarioFiles {
    /// Both files as stream sources, candidate first.
    pub fn sources(&self) -> (StreamSource, StreamSource) {
        (
            StreamSource::File(self.candidate.clone()),
            StreamSource::File(self.reference.clone()),
        )
    }
}

impl EstimationScenario {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line pair; newlines are added.
    pub fn with_line(mut self, candidate: &str, reference: &str) -> Self {
        self.candidate.push_str(candidate);
        self.candidate.push('\n');
        self.reference.push_str(reference);
        self.reference.push('\n');
        self
    }

    /// Append one interval case.
    pub fn with_interval_case(mut self, value: f64, lower: f64, upper: f64) -> Self {
        let (c, r) = interval_case(value, lower, upper);
        self.candidate.push_str(&c);
        self.reference.push_str(&r);
        self
    }

    /// Append `trials` interval cases with `successes` hits.
    pub fn with_interval_cases(mut self, successes: u64, trials: u64) -> Self {
        let (c, r) = interval_streams(successes, trials);
        self.candidate.push_str(&c);
        self.reference.push_str(&r);
        self
    }

    /// Append a line to the reference only, so the candidate ends early.
    pub fn with_reference_only(mut self, reference: &str) -> Self {
        self.reference.push_str(reference);
        self.reference.push('\n');
        self
    }

    /// Append a line to the candidate only, so the reference ends early.
    pub fn with_candidate_only(mut self, candidate: &str) -> Self {
        self.candidate.push_str(candidate);
        self.candidate.push('\n');
        self
    }

    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Write both streams into `dir` as `candidate.out` and `reference.ans`.
    pub fn write_files(&self, dir: &Path) -> anyhow::Result<ScenarioFiles> {
        Ok(ScenarioFiles {
            candidate: write_fixture(dir, "candidate.out", &self.candidate)?,
            reference: write_fixture(dir, "reference.ans", &self.reference)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_appends_in_order() {
        let scenario = EstimationScenario::new()
            .with_line("a", "a")
            .with_interval_case(2.5, 0.0, 3.0)
            .with_reference_only("tail");

        assert_eq!(scenario.candidate(), "a\n2.5\n");
        assert_eq!(scenario.reference(), "a\n0 3\ntail\n");
    }

    #[test]
    fn test_write_files() {
        let dir = tempfile::tempdir().unwrap();
        let files = EstimationScenario::new()
            .with_line("1", "1")
            .write_files(dir.path())
            .unwrap();

        assert_eq!(std::fs::read_to_string(&files.candidate).unwrap(), "1\n");
        assert!(files.reference.ends_with("reference.ans"));
    }
}
