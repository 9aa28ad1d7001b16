//! Testing utilities for the estimation checker
//!
//! This crate provides:
//! - Fixtures producing candidate/reference stream pairs
//! - A fluent [`EstimationScenario`] builder for mixed interval and token lines
//! - Helpers that materialise scenarios as temporary files
//!
//! # Examples
//!
//! ```
//! use check_estimation_testing::EstimationScenario;
//!
//! let scenario = EstimationScenario::new()
//!     .with_line("answer 42", "answer 42")
//!     .with_interval_cases(95, 100);
//!
//! assert_eq!(scenario.reference().lines().count(), 101);
//! ```

pub mod builders;
pub mod fixtures;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;

// Re-export testing dependencies for convenience
pub use proptest;
pub use tempfile;
