//! Tests for verdict and diff entry serialization
//!
//! The JSON shape is consumed by external tooling, so field names and enum
//! tags are part of the interface.

use check_estimation_domain::{
    ComparisonOutcome, DiffEntry, DiffKind, Side, Tally, TestParameters, Verdict,
};

fn make_verdict(report: Vec<DiffEntry>) -> Verdict {
    let diff_count = report.iter().filter(|e| e.is_difference()).count();
    Verdict {
        accepted: diff_count == 0,
        tally: Tally {
            successes: 9,
            trials: 10,
        },
        diff_count,
        lines_compared: 10,
        whitespace_mismatches: 0,
        report,
        statistics: None,
    }
}

#[test]
fn test_diff_kind_is_tagged() {
    // Arrange
    let entry = DiffEntry::new(3, Some(2), DiffKind::ParseFailure { side: Side::Reference });

    // Act
    let json = serde_json::to_value(&entry).unwrap();

    // Assert
    assert_eq!(json["line"], 3);
    assert_eq!(json["token"], 2);
    assert_eq!(json["kind"]["kind"], "parse_failure");
    assert_eq!(json["kind"]["side"], "reference");
}

#[test]
fn test_verdict_round_trips_through_json() {
    // Arrange
    let verdict = make_verdict(vec![
        DiffEntry::new(1, Some(1), DiffKind::WhitespaceMismatch),
        DiffEntry::new(
            2,
            Some(1),
            DiffKind::ParseFailure {
                side: Side::Candidate,
            },
        ),
    ]);

    // Act
    let json = serde_json::to_string(&verdict).unwrap();
    let restored: Verdict = serde_json::from_str(&json).unwrap();

    // Assert
    assert_eq!(restored, verdict);
    assert_eq!(restored.diff_count, 1);
    assert!(!restored.accepted);
    assert_eq!(restored.differences().count(), 1);
}

#[test]
fn test_outcome_serialization() {
    let json = serde_json::to_value(ComparisonOutcome::MissingToken(Side::Candidate)).unwrap();
    assert_eq!(json["outcome"], "missing_token");
}

#[test]
fn test_parameters_serialize_with_snake_case_fields() {
    let json = serde_json::to_value(TestParameters::default()).unwrap();
    assert_eq!(json["alpha"], 0.05);
    assert_eq!(json["target_probability"], 0.95);
}

#[test]
fn test_outcome_detail_carries_side() {
    let json = serde_json::to_value(ComparisonOutcome::ParseFailure(Side::Reference)).unwrap();
    assert_eq!(json["outcome"], "parse_failure");
    assert_eq!(json["detail"], "reference");
}
