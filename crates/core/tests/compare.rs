//! Tests for code comparison.

mod common;

use orderkey_core::{
    CompareResult, DecodeError, DecodeOptions, Difference, MAX_DIFFERENCES, compare,
};

fn cmp(a: &str, b: &str) -> CompareResult {
    compare(a, b, &DecodeOptions::default()).expect("compare should succeed")
}

fn texts(r: &CompareResult) -> Vec<String> {
    r.differences.iter().map(ToString::to_string).collect()
}

#[test]
fn hyphenated_and_compact_forms_are_identical() {
    let r = cmp(
        "DSX-2-Z-S0-9010-L9005-B-N-01000-VM-ES-B0",
        "DSX2ZS09010L9005BN01000VMESB0",
    );
    assert!(r.identical);
    assert_eq!(
        r.formatted_code.as_deref(),
        Some("DSX-2-Z-S0-9010-L9005-B-N-01000-VM-ES-B0")
    );
    assert!(r.differences.is_empty());
}

#[test]
fn case_and_whitespace_are_ignored() {
    let r = cmp("  ew-21-2-s0-elox-b9005-090-000-000 ", "EW212S0ELOXB9005090000000");
    assert!(r.identical);
}

#[test]
fn every_code_is_identical_to_itself() {
    for (code, _) in common::CANONICAL {
        assert!(cmp(code, code).identical, "{code}");
        assert!(cmp(code, &code.to_lowercase()).identical, "{code}");
    }
}

#[test]
fn identical_unknown_codes_fall_back_to_normalized_text() {
    let r = cmp("xyz-123", "XYZ123");
    assert!(r.identical);
    assert_eq!(r.formatted_code.as_deref(), Some("XYZ123"));
}

#[test]
fn single_character_difference() {
    let r = cmp(
        "DSX-2-Z-S0-9010-L9005-B-N-01000-VM-ES-B0",
        "DSX-2-Z-S0-9005-L9005-B-N-01000-VM-ES-B0",
    );
    assert!(!r.identical);
    assert_eq!(texts(&r), ["Position 10: '1' vs '0'", "Position 11: '0' vs '5'"]);
    assert_eq!(
        r.formatted_code1.as_deref(),
        Some("DSX-2-Z-S0-9010-L9005-B-N-01000-VM-ES-B0")
    );
    assert_eq!(
        r.formatted_code2.as_deref(),
        Some("DSX-2-Z-S0-9005-L9005-B-N-01000-VM-ES-B0")
    );
}

#[test]
fn family_then_length_then_positions() {
    let r = cmp(
        "DSX2ZS09010L9005BN01000VMESB0",
        "ASK212N01000VMSVDK2GD1I0KHSKVSS1SDSE0",
    );
    assert!(!r.identical);
    assert_eq!(r.differences.len(), MAX_DIFFERENCES);
    assert_eq!(
        r.differences[0],
        Difference::Family {
            left: "DSX".into(),
            right: "ASK".into()
        }
    );
    assert_eq!(
        r.differences[1],
        Difference::Length {
            left: 29,
            right: 37
        }
    );
    assert!(
        r.differences[2..]
            .iter()
            .all(|d| matches!(d, Difference::Position { .. }))
    );
    assert_eq!(texts(&r)[0], "Unterschiedliche Produkttypen: DSX vs ASK");
    assert_eq!(texts(&r)[1], "Unterschiedliche Längen: 29 vs 37 Zeichen");
}

#[test]
fn shorter_code_reports_missing_positions() {
    let r = cmp("DSX2Z", "DSX2ZS0");
    assert_eq!(
        texts(&r),
        [
            "Unterschiedliche Längen: 5 vs 7 Zeichen",
            "Position 6: '(fehlt)' vs 'S'",
            "Position 7: '(fehlt)' vs '0'",
        ]
    );
    // Both still decode; the shorter one with standard values.
    assert_eq!(
        r.formatted_code1.as_deref(),
        Some("DSX-2-Z-S0-9005-L9005-B-N-01000-VM-E0-B0")
    );
}

#[test]
fn undecodable_side_is_marked_invalid() {
    let r = cmp("DSX2Z", "XYZ123");
    assert!(!r.identical);
    assert!(r.formatted_code1.is_some());
    assert!(r.formatted_code2.is_none());
    assert_eq!(
        r.differences[0],
        Difference::Family {
            left: "DSX".into(),
            right: "XYZ".into()
        }
    );
}

#[test]
fn missing_input_is_a_hard_failure() {
    for (a, b) in [("", "DSX"), ("DSX", ""), ("-", "  ")] {
        let err = compare(a, b, &DecodeOptions::default()).unwrap_err();
        assert_eq!(err, DecodeError::MissingCompareInput);
        assert_eq!(err.to_string(), "Beide Codes sind erforderlich");
    }
}

#[test]
fn serialized_differences_are_tagged() {
    let r = cmp("EW212", "EW213");
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["identical"], false);
    assert_eq!(json["differences"][0]["kind"], "position");
    assert_eq!(json["differences"][0]["position"], 5);
    assert_eq!(json["differences"][0]["left"], "2");
}
