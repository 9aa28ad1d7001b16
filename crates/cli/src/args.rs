//! Command-line arguments.

use crate::output::OutputFormat;
use check_estimation_common::CheckerSettings;
use check_estimation_domain::{AppResult, CompareMode, StreamSource, UsageError};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "check_estimation")]
#[command(version, about = "Compare program output with reference intervals for random estimates")]
#[command(long_about = "Compare program output in <FILE1> with reference output in <FILE2>.\n\n\
    Reference lines holding two numbers `L R` are intervals for a single estimate on the \
    matching output line; the share of estimates inside their intervals is tested against \
    --probability at significance level --alpha (Wilson score interval with continuity \
    correction). Other lines are compared token by token with numeric tolerance.\n\n\
    When one <FILE> is given as `-', it is read from standard input. The first argument \
    <IGNORED> is ignored, but needed for compatibility.")]
pub struct Cli {
    /// Significance level of the test [default: 0.05]
    #[arg(short, long, value_name = "VAL", allow_negative_numbers = true)]
    pub alpha: Option<f64>,

    /// Target probability of an estimate falling inside its interval [default: 0.95]
    #[arg(short, long, value_name = "VAL", allow_negative_numbers = true)]
    pub probability: Option<f64>,

    /// Absolute tolerance for numeric tokens [default: 1e-7]
    #[arg(long, value_name = "VAL", allow_negative_numbers = true)]
    pub abs_tolerance: Option<f64>,

    /// Relative tolerance for numeric tokens [default: 1e-7]
    #[arg(long, value_name = "VAL", allow_negative_numbers = true)]
    pub rel_tolerance: Option<f64>,

    /// Line interpretation: `interval` or `tokens` [default: interval]
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<CompareMode>,

    /// Do not report whitespace differences
    #[arg(long)]
    pub ignore_whitespace: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE", env = "CHECK_ESTIMATION_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub show_config: bool,

    /// Unused, kept for call-signature compatibility
    #[arg(value_name = "IGNORED", required_unless_present = "show_config")]
    pub ignored: Option<String>,

    /// Program output to check, `-` for standard input
    #[arg(value_name = "FILE1", required_unless_present = "show_config")]
    pub file1: Option<String>,

    /// Reference output, `-` for standard input
    #[arg(value_name = "FILE2", required_unless_present = "show_config")]
    pub file2: Option<String>,
}

impl Cli {
    /// Override loaded settings with the flags given on the command line.
    pub fn apply_to(&self, settings: &mut CheckerSettings) {
        if let Some(alpha) = self.alpha {
            settings.alpha = alpha;
        }
        if let Some(probability) = self.probability {
            settings.probability = probability;
        }
        if let Some(abs_tolerance) = self.abs_tolerance {
            settings.abs_tolerance = abs_tolerance;
        }
        if let Some(rel_tolerance) = self.rel_tolerance {
            settings.rel_tolerance = rel_tolerance;
        }
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if self.ignore_whitespace {
            settings.ignore_whitespace = true;
        }
        if self.verbose {
            settings.log_level = "debug".to_string();
        }
        if self.log_json {
            settings.log_json = true;
        }
    }

    /// Candidate and reference sources.
    ///
    /// clap only makes the positionals optional under `--show-config`, and
    /// the binary never asks for sources in that case. Callers driving a
    /// parsed `Cli` themselves get `NotEnoughArguments` instead.
    pub fn sources(&self) -> AppResult<(StreamSource, StreamSource)> {
        match (&self.file1, &self.file2) {
            (Some(file1), Some(file2)) => {
                let sources = (StreamSource::from_arg(file1), StreamSource::from_arg(file2));
                if sources.0.is_stdin() && sources.1.is_stdin() {
                    return Err(UsageError::BothStandardInput.into());
                }
                Ok(sources)
            }
            _ => Err(UsageError::NotEnoughArguments.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_positionals_and_options() {
        let cli = Cli::try_parse_from([
            "check_estimation",
            "-a",
            "0.01",
            "--probability=0.9",
            "-m",
            "tokens",
            "testdata.in",
            "program.out",
            "-",
        ])
        .unwrap();

        assert_eq!(cli.alpha, Some(0.01));
        assert_eq!(cli.probability, Some(0.9));
        assert_eq!(cli.mode, Some(CompareMode::Tokens));

        let (candidate, reference) = cli.sources().unwrap();
        assert_eq!(candidate, StreamSource::from_arg("program.out"));
        assert!(reference.is_stdin());
    }

    #[test]
    fn test_missing_positionals_rejected() {
        let err = Cli::try_parse_from(["check_estimation", "only", "two"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unparseable_alpha_rejected() {
        let err = Cli::try_parse_from(["check_estimation", "-a", "abc", "x", "y", "z"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_show_config_without_files_has_no_sources() {
        let cli = Cli::try_parse_from(["check_estimation", "--show-config"]).unwrap();

        assert!(cli.show_config);
        assert!(matches!(
            cli.sources(),
            Err(check_estimation_domain::AppError::Usage(UsageError::NotEnoughArguments))
        ));
    }

    #[test]
    fn test_both_stdin_rejected() {
        let cli = Cli::try_parse_from(["check_estimation", "x", "-", "-"]).unwrap();
        assert!(matches!(
            cli.sources(),
            Err(check_estimation_domain::AppError::Usage(UsageError::BothStandardInput))
        ));
    }

    #[test]
    fn test_apply_overrides() {
        let cli = Cli::try_parse_from([
            "check_estimation",
            "--abs-tolerance",
            "0.5",
            "--ignore-whitespace",
            "-v",
            "x",
            "a",
            "b",
        ])
        .unwrap();
        let mut settings = CheckerSettings::default();

        cli.apply_to(&mut settings);

        assert_eq!(settings.abs_tolerance, 0.5);
        assert_eq!(settings.rel_tolerance, 1e-7);
        assert!(settings.ignore_whitespace);
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.mode, CompareMode::Interval);
    }
}
