//! Configuration management for the checker.
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. A TOML file given with `--config` or `CHECK_ESTIMATION_CONFIG`
//! 3. Environment variables prefixed with `CHECK_ESTIMATION_`
//! 4. Command-line flags (applied by the binary)
//!
//! ## Example Configuration
//!
//! ```toml
//! alpha = 0.01
//! probability = 0.9
//! abs_tolerance = 1e-6
//! rel_tolerance = 1e-6
//! mode = "interval"
//! ignore_whitespace = true
//! ```

use anyhow::{Context, Result};
use check_estimation_domain::{
    AppError, AppResult, CompareMode, ComparatorConfig, TestParameters, Tolerance, UsageError,
    DEFAULT_ALPHA, DEFAULT_MAX_LINE_LENGTH, DEFAULT_PROBABILITY,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Prefix of environment variables holding settings.
pub const ENV_PREFIX: &str = "CHECK_ESTIMATION";

/// Environment variable naming a configuration file.
pub const CONFIG_PATH_ENV: &str = "CHECK_ESTIMATION_CONFIG";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Checker settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckerSettings {
    /// Significance level of the hypothesis test
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Target success probability
    #[serde(default = "default_probability")]
    pub probability: f64,

    /// Absolute tolerance for numeric tokens
    #[serde(default = "default_tolerance")]
    pub abs_tolerance: f64,

    /// Relative tolerance for numeric tokens
    #[serde(default = "default_tolerance")]
    pub rel_tolerance: f64,

    /// Line interpretation
    #[serde(default = "default_mode")]
    pub mode: CompareMode,

    /// Suppress whitespace mismatch entries
    #[serde(default)]
    pub ignore_whitespace: bool,

    /// Maximum line length in bytes
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Log level (trace, debug, info, warn, error, off)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub log_json: bool,
}

// Default value functions
fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn default_probability() -> f64 {
    DEFAULT_PROBABILITY
}

fn default_tolerance() -> f64 {
    1e-7
}

fn default_mode() -> CompareMode {
    CompareMode::Interval
}

fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CheckerSettings {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            probability: default_probability(),
            abs_tolerance: default_tolerance(),
            rel_tolerance: default_tolerance(),
            mode: default_mode(),
            ignore_whitespace: false,
            max_line_length: default_max_line_length(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl CheckerSettings {
    /// Load settings from the optional file and the process environment.
    ///
    /// The result is not validated; callers apply their own overrides first
    /// and then call [`CheckerSettings::validate`].
    ///
    /// Without `config_path`, the file named by `CHECK_ESTIMATION_CONFIG` is
    /// used if that variable is set. A named file must exist.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = config_path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));
        Self::load_from(path.as_deref(), None)
    }

    /// Load settings from the optional file and an explicit environment map.
    ///
    /// `environment` replaces the process environment when given; keys carry
    /// the `CHECK_ESTIMATION_` prefix.
    pub fn load_from(
        config_path: Option<&Path>,
        environment: Option<HashMap<String, String>>,
    ) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }

        let config = builder
            // Example: CHECK_ESTIMATION_ABS_TOLERANCE=1e-6
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(environment),
            )
            .build()
            .map_err(invalid_configuration)
            .context("Failed to build configuration")?;

        let settings: CheckerSettings = config
            .try_deserialize()
            .map_err(invalid_configuration)
            .context("Failed to deserialize configuration")?;

        Ok(settings)
    }

    /// Validate the settings
    pub fn validate(&self) -> AppResult<()> {
        TestParameters::new(self.alpha, self.probability)?;
        Tolerance::new(self.abs_tolerance, self.rel_tolerance)?;

        if self.max_line_length == 0 {
            return Err(UsageError::InvalidParameter {
                name: "max_line_length".to_string(),
                value: "0".to_string(),
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(UsageError::InvalidParameter {
                name: "log_level".to_string(),
                value: self.log_level.clone(),
                reason: format!("must be one of: {}", LOG_LEVELS.join(", ")),
            }
            .into());
        }

        Ok(())
    }

    /// Build the immutable comparator configuration.
    pub fn into_comparator_config(&self) -> AppResult<ComparatorConfig> {
        let tolerance = Tolerance::new(self.abs_tolerance, self.rel_tolerance)?;
        let parameters = TestParameters::new(self.alpha, self.probability)?;

        Ok(ComparatorConfig::new(tolerance)
            .with_mode(self.mode)
            .with_parameters(parameters)
            .with_ignore_whitespace(self.ignore_whitespace)
            .with_max_line_length(self.max_line_length))
    }

    /// Render the settings as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

fn invalid_configuration(err: config::ConfigError) -> AppError {
    UsageError::InvalidConfiguration(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use check_estimation_testing::write_fixture;

    fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults() {
        let settings = CheckerSettings::load_from(None, env(&[])).unwrap();

        assert_eq!(settings, CheckerSettings::default());
        assert_eq!(settings.mode, CompareMode::Interval);
        assert_eq!(settings.alpha, 0.05);
        assert_eq!(settings.probability, 0.95);
    }

    #[test]
    fn test_file_then_environment() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            dir.path(),
            "checker.toml",
            "alpha = 0.01\nprobability = 0.9\nmode = \"tokens\"\n",
        )
        .unwrap();

        let settings = CheckerSettings::load_from(
            Some(&path),
            env(&[
                ("CHECK_ESTIMATION_PROBABILITY", "0.8"),
                ("CHECK_ESTIMATION_IGNORE_WHITESPACE", "true"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.alpha, 0.01);
        assert_eq!(settings.probability, 0.8);
        assert_eq!(settings.mode, CompareMode::Tokens);
        assert!(settings.ignore_whitespace);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = CheckerSettings::load_from(Some(&dir.path().join("absent.toml")), env(&[]));
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_values_load_and_fail_validation() {
        let settings =
            CheckerSettings::load_from(None, env(&[("CHECK_ESTIMATION_ALPHA", "1.5")])).unwrap();
        assert_eq!(settings.alpha, 1.5);

        let err = settings.validate().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_malformed_values_are_usage_errors() {
        let err = CheckerSettings::load_from(None, env(&[("CHECK_ESTIMATION_ALPHA", "lots")]))
            .unwrap_err();

        let app_error = err.downcast_ref::<AppError>().unwrap();
        assert_eq!(app_error.exit_code(), 2);
    }

    #[test]
    fn test_validation() {
        let mut settings = CheckerSettings::default();
        assert!(settings.validate().is_ok());

        settings.abs_tolerance = -1.0;
        assert!(settings.validate().is_err());

        settings = CheckerSettings::default();
        settings.max_line_length = 0;
        assert!(settings.validate().is_err());

        settings = CheckerSettings::default();
        settings.log_level = "chatty".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_into_comparator_config() {
        let settings = CheckerSettings {
            ignore_whitespace: true,
            max_line_length: 4096,
            ..CheckerSettings::default()
        };

        let config = settings.into_comparator_config().unwrap();

        assert_eq!(config.mode, CompareMode::Interval);
        assert!(config.ignore_whitespace);
        assert_eq!(config.max_line_length, 4096);
        assert_eq!(config.tolerance.absolute(), 1e-7);
        assert_eq!(config.parameters.alpha(), 0.05);
    }

    #[test]
    fn test_toml_round_trip() {
        let settings = CheckerSettings::default();
        let rendered = settings.to_toml().unwrap();

        assert!(rendered.contains("mode = \"interval\""));
        let parsed: CheckerSettings = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, settings);
    }
}
