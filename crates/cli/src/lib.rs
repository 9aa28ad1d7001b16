//! Estimation checker CLI library
//!
//! Argument parsing, settings resolution and verdict rendering for the
//! `check_estimation` binary. The binary itself only wires these together
//! with telemetry and process exit codes.

pub mod args;
pub mod output;
pub mod run;

pub use args::Cli;
pub use output::{JsonFormatter, OutputFormat, PlainFormatter};

/// Re-export common types
pub use anyhow::{Context, Result};
