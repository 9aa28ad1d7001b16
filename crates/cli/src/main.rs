//! check_estimation
//!
//! Compares program output with reference intervals for non-deterministic
//! estimates. The verdict is printed on stdout; the exit status is 0 for any
//! verdict and non-zero only for usage (2) or input (1) errors.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};

use check_estimation_cli::{run, Cli};
use check_estimation_common::init_tracing;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup colored output
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Handle errors
    if let Err(e) = try_main(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        if cli.verbose {
            eprintln!("\n{}", "Backtrace:".dimmed());
            eprintln!("{:?}", e);
        }
        std::process::exit(run::exit_code(&e));
    }
}

fn try_main(cli: &Cli) -> Result<()> {
    let settings = run::load_settings(cli)?;
    init_tracing(&settings.log_level, settings.log_json)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run::execute(cli, &settings, &mut out)?;
    out.flush()?;

    Ok(())
}
