//! Comparison module - streaming diff of candidate and reference output
//!
//! Lines are pulled in pairs from both streams, split into tokens, and handed
//! to a line evaluator: the token evaluator applies exact/numeric comparison,
//! the interval evaluator feeds interval cases into the statistical
//! accumulator. Discrepancies are collected by the diff reporter.

mod accumulator;
mod comparator;
mod engine;
mod evaluators;
mod interval;
mod reader;
mod reporter;
mod tokenizer;

pub use accumulator::*;
pub use comparator::*;
pub use engine::*;
pub use evaluators::*;
pub use interval::*;
pub use reader::*;
pub use reporter::*;
pub use tokenizer::*;
