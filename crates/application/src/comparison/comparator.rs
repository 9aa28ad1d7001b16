//! Token comparison under the numeric equality policy.
//!
//! Tokens are first compared byte for byte. Otherwise both are parsed as
//! floating-point numbers and compared with absolute/relative tolerance;
//! NaN equals NaN and infinities are equal when their signs match.

use super::tokenizer::Token;
use check_estimation_domain::{ComparisonOutcome, Side, Tolerance};

/// Parse a token as a floating-point number.
///
/// Accepts decimal and exponential notation with an optional sign, and the
/// case-insensitive literals `inf`, `infinity` and `nan`. Parsing does not
/// depend on the process locale. Non-UTF-8 tokens never parse.
pub fn parse_float(token: &[u8]) -> Option<f64> {
    std::str::from_utf8(token).ok()?.parse::<f64>().ok()
}

/// Absolute and relative distance between a candidate and a reference value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericDifference {
    /// `|candidate - reference|`
    pub absolute: f64,
    /// `|candidate - reference| / |reference|`
    pub relative: f64,
}

impl NumericDifference {
    /// Distance of `candidate` from `reference`; the relative part is taken
    /// against the reference value.
    pub fn between(candidate: f64, reference: f64) -> Self {
        let delta = candidate - reference;
        Self {
            absolute: delta.abs(),
            relative: (delta / reference).abs(),
        }
    }
}

/// Numeric equality policy.
pub fn floats_equal(candidate: f64, reference: f64, tolerance: &Tolerance) -> bool {
    // Finite values are compared with some tolerance
    if candidate.is_finite() && reference.is_finite() {
        let diff = NumericDifference::between(candidate, reference);
        return diff.absolute <= tolerance.absolute() || diff.relative <= tolerance.relative();
    }

    if candidate.is_nan() && reference.is_nan() {
        return true;
    }

    if candidate.is_infinite() && reference.is_infinite() {
        return candidate.is_sign_positive() == reference.is_sign_positive();
    }

    // Values in different classes are always different
    false
}

/// Compare one candidate token with its reference token.
pub fn compare_tokens(candidate: &[u8], reference: &[u8], tolerance: &Tolerance) -> ComparisonOutcome {
    if candidate == reference {
        return ComparisonOutcome::ExactMatch;
    }

    match (parse_float(candidate), parse_float(reference)) {
        // The candidate is checked first, so two bad tokens blame file 1
        (None, _) => ComparisonOutcome::ParseFailure(Side::Candidate),
        (Some(_), None) => ComparisonOutcome::ParseFailure(Side::Reference),
        (Some(c), Some(r)) if floats_equal(c, r, tolerance) => {
            ComparisonOutcome::NumericWithinTolerance
        }
        (Some(c), Some(r)) => ComparisonOutcome::NumericOutOfTolerance {
            candidate: c,
            reference: r,
        },
    }
}

/// Compare the tokens occupying one slot of a line pair.
///
/// Returns `None` when neither side has a token at this slot. Missing and
/// excess tokens are reported from the candidate's point of view.
pub fn compare_slots(
    candidate: Option<&Token<'_>>,
    reference: Option<&Token<'_>>,
    tolerance: &Tolerance,
) -> Option<ComparisonOutcome> {
    match (candidate, reference) {
        (Some(c), Some(r)) => Some(compare_tokens(c.text, r.text, tolerance)),
        (None, Some(_)) => Some(ComparisonOutcome::MissingToken(Side::Candidate)),
        (Some(_), None) => Some(ComparisonOutcome::ExcessToken(Side::Candidate)),
        (None, None) => None,
    }
}
