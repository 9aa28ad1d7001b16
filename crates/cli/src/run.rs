//! One invocation of the checker: resolve settings, compare, render.

use crate::args::Cli;
use crate::output::write_verdict;
use anyhow::{Context, Result};
use check_estimation_application::ComparisonEngine;
use check_estimation_common::CheckerSettings;
use check_estimation_domain::{AppError, Verdict};
use std::io::Write;
use tracing::{debug, info};

/// Load layered settings and apply command-line overrides.
pub fn load_settings(cli: &Cli) -> Result<CheckerSettings> {
    let loaded =
        CheckerSettings::load(cli.config.as_deref()).context("Failed to load configuration")?;
    finalize_settings(cli, loaded)
}

/// Apply command-line overrides on top of loaded settings, then validate.
///
/// Flags win over the file and the environment, so a bad value in either is
/// only an error if no flag replaces it.
pub fn finalize_settings(cli: &Cli, mut settings: CheckerSettings) -> Result<CheckerSettings> {
    cli.apply_to(&mut settings);
    settings.validate()?;
    Ok(settings)
}

/// Run the comparison and write the rendered verdict to `out`.
///
/// Returns `None` when only the configuration was printed.
pub fn execute<W: Write>(cli: &Cli, settings: &CheckerSettings, out: &mut W) -> Result<Option<Verdict>> {
    if cli.show_config {
        out.write_all(settings.to_toml()?.as_bytes())?;
        return Ok(None);
    }

    let (candidate, reference) = cli.sources()?;
    let engine = ComparisonEngine::new(settings.into_comparator_config()?);
    debug!(?settings, "Effective settings");

    let verdict = engine.compare_sources(&candidate, &reference)?;
    write_verdict(&verdict, cli.format, out)?;

    info!(
        accepted = verdict.accepted,
        differences = verdict.diff_count,
        whitespace = verdict.whitespace_mismatches,
        "Verdict written"
    );

    Ok(Some(verdict))
}

/// Process exit status for a failed invocation.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<AppError>()
        .map_or(1, AppError::exit_code)
}
