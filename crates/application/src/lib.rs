//! Application layer for the estimation checker
//!
//! This crate implements one comparison run over a candidate stream and a
//! reference stream.
//!
//! ## Modules
//!
//! - `comparison` - Line reader, tokenizer, token and interval evaluators,
//!   diff reporter and the [`ComparisonEngine`] that drives them
//! - `statistics` - Normal distribution helpers, Wilson score intervals and
//!   the one-sided hypothesis test applied to interval cases

pub mod comparison;
pub mod statistics;

// Re-export commonly used types
pub use comparison::{
    compare_tokens, floats_equal, parse_float, tokenize, ComparisonEngine,
    ComparisonEngineBuilder, DiffReporter, IntervalReference, LineReader,
    StatisticalAccumulator,
};
pub use statistics::{decide, HypothesisTest};

pub use check_estimation_domain::{AppError, AppResult};
