//! Output rendering for verdicts

use anyhow::Result;
use check_estimation_domain::Verdict;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

mod formatters;

pub use formatters::{JsonFormatter, PlainFormatter};

/// Output format enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One diagnostic line per discrepancy (default)
    #[default]
    Plain,
    /// The full verdict as JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Write a verdict in the requested format.
pub fn write_verdict<W: Write>(verdict: &Verdict, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Plain => PlainFormatter::write(verdict, out),
        OutputFormat::Json => JsonFormatter::write(verdict, out),
    }
}
