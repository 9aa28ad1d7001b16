//! Check Estimation Domain Types
//!
//! This crate provides the data model shared by every layer of the estimation
//! checker: which stream a value came from, the immutable comparator
//! configuration, per-token comparison outcomes, the statistical tally and
//! decision, and the final verdict with its diff report.
//!
//! ## Architecture
//!
//! - **side**: Candidate/reference sides and stream sources
//! - **parameters**: Tolerances, test parameters and comparator configuration
//! - **outcome**: Outcome of comparing one token pair
//! - **statistics**: Tally, confidence interval and statistical decision
//! - **report**: Diff entries and the final verdict
//! - **format**: C-style number rendering used in diagnostics
//! - **errors**: Usage and input error hierarchy with exit codes
//!
//! ## Usage
//!
//! ```rust
//! use check_estimation_domain::{Side, Tally, TestParameters};
//!
//! let params = TestParameters::default();
//! assert_eq!(params.alpha(), 0.05);
//!
//! let mut tally = Tally::new();
//! tally.record(true);
//! tally.record(false);
//! assert_eq!(tally.success_rate(), Some(0.5));
//!
//! assert_eq!(Side::Candidate.file_number(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod format;
pub mod outcome;
pub mod parameters;
pub mod report;
pub mod side;
pub mod statistics;

// Re-export commonly used types
pub use errors::{AppError, AppResult, InputError, UsageError};
pub use outcome::ComparisonOutcome;
pub use parameters::{
    CompareMode, ComparatorConfig, TestParameters, Tolerance, DEFAULT_ALPHA,
    DEFAULT_MAX_LINE_LENGTH, DEFAULT_PROBABILITY,
};
pub use report::{DiffEntry, DiffKind, Severity, Verdict};
pub use side::{Side, StreamSource, STDIN_SENTINEL};
pub use statistics::{ConfidenceInterval, StatisticalDecision, Tally};
