//! Common utilities shared by the estimation checker binaries.
//!
//! This crate provides:
//! - Layered configuration loading (defaults, TOML file, environment)
//! - Telemetry setup writing structured logs to standard error

pub mod config;
pub mod telemetry;

// Re-export commonly used types
pub use config::{CheckerSettings, CONFIG_PATH_ENV, ENV_PREFIX};
pub use telemetry::init_tracing;

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
