//! Outcome of comparing one candidate/reference token pair.

use crate::side::Side;
use serde::{Deserialize, Serialize};

/// Result of comparing one token slot.
///
/// Produced once per token pair and never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum ComparisonOutcome {
    /// Byte-identical tokens
    ExactMatch,
    /// Different text, equal under the numeric policy
    NumericWithinTolerance,
    /// Both numeric, outside every tolerance
    NumericOutOfTolerance {
        /// Candidate value
        candidate: f64,
        /// Reference value
        reference: f64,
    },
    /// The token on this side is not a number; the candidate side is
    /// named when neither token parses
    ParseFailure(Side),
    /// This side has no token where the other side has one
    MissingToken(Side),
    /// This side has a token where the other side has none
    ExcessToken(Side),
}

impl ComparisonOutcome {
    /// Whether the pair is considered equal.
    pub fn is_match(&self) -> bool {
        matches!(self, Self::ExactMatch | Self::NumericWithinTolerance)
    }

    /// Whether the rest of the line must be skipped after this outcome.
    pub fn halts_line(&self) -> bool {
        matches!(
            self,
            Self::ParseFailure(_) | Self::MissingToken(_) | Self::ExcessToken(_)
        )
    }
}
