//! Statistics module - inference on interval case tallies
//!
//! Interval cases are Bernoulli trials. The hypothesis test decides whether
//! the observed success rate is consistent with the target probability,
//! using the Wilson score interval with continuity correction.

mod hypothesis;
mod normal;
mod wilson;

pub use hypothesis::*;
pub use normal::*;
pub use wilson::*;
