//! Malformed input tests
//!
//! Each test feeds one kind of broken document and checks that the error is
//! reported with the right entity and category, and that no value comes back.

use crate::*;
use flagmodel::{EntityKind, MalformedKind};

fn flag_error(input: &str) -> flagmodel::DecodeError {
    match decode_flag(input.as_bytes()) {
        Ok(f) => panic!("expected an error, decoded flag {:?}", f.key),
        Err(e) => e
            .decode_error()
            .cloned()
            .expect("decode errors are malformed-input errors"),
    }
}

#[test]
fn test_truncated_flag_is_rejected() {
    init_logging();
    let result = decode_flag(br#"{"key": "a""#);
    let err = result.unwrap_err();
    assert!(err.is_malformed());

    let err = flag_error(r#"{"key": "a""#);
    assert_eq!(err.entity(), EntityKind::Flag);
    assert_eq!(err.kind(), MalformedKind::Truncated);
}

#[test]
fn test_syntax_error_is_rejected() {
    let err = flag_error(r#"{"key": "a",, }"#);
    assert_eq!(err.kind(), MalformedKind::Syntax);
}

#[test]
fn test_string_where_object_expected_is_rejected() {
    let err = flag_error(r#"{"key":"a","fallthrough":"variation 0"}"#);
    assert_eq!(err.kind(), MalformedKind::Structure);
}

#[test]
fn test_string_where_list_expected_is_rejected() {
    let err = flag_error(r#"{"key":"a","rules":"none"}"#);
    assert_eq!(err.kind(), MalformedKind::Structure);
}

#[test]
fn test_fractional_variation_is_rejected() {
    let err = flag_error(r#"{"key":"a","offVariation":1.5}"#);
    assert_eq!(err.kind(), MalformedKind::Structure);
}

#[test]
fn test_non_object_document_is_rejected() {
    let err = flag_error(r#""just a string""#);
    assert_eq!(err.kind(), MalformedKind::Structure);
}

#[test]
fn test_empty_input_is_rejected() {
    let err = flag_error("");
    assert_eq!(err.kind(), MalformedKind::Truncated);
}

#[test]
fn test_malformed_segment_names_segment() {
    let err = decode_segment(br#"{"key":"s","rules":[{"weight":"heavy"}]}"#).unwrap_err();
    let err = err.decode_error().expect("malformed");
    assert_eq!(err.entity(), EntityKind::Segment);
    assert_eq!(err.kind(), MalformedKind::Structure);
}

#[test]
fn test_error_reports_position() {
    let err = flag_error("{\n  \"key\": \"a\",\n  \"on\": maybe\n}");
    assert_eq!(err.line(), 3);
    assert!(err.column() > 0);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let f = flag(r#"{"key":"a","clientSideAvailability":{"usingMobileKey":true},"_site":{}}"#);
    assert_eq!(f.key, "a");
}

#[test]
fn test_repeated_key_keeps_last_value() {
    let f = flag(r#"{"key":"a","key":"b","offVariation":0,"offVariation":2}"#);
    assert_eq!(f.key, "b");
    assert_eq!(f.off_variation, 2);
}

#[test]
fn test_repeated_key_inside_rule_keeps_last_value() {
    let f = flag(r#"{"key":"a","rules":[{"id":"r","variation":1,"variation":2}]}"#);
    assert_eq!(f.rules[0].variation_or_rollout.variation, 2);

    let s = segment(r#"{"key":"s","rules":[{"id":"r","weight":10,"weight":20}]}"#);
    assert_eq!(s.rules[0].weight, 20);
}

#[test]
fn test_error_message_names_position_once() {
    let err = flag_error(r#"{"key": "a",, }"#);
    let text = err.to_string();
    assert_eq!(text.matches("line 1 column").count(), 1, "{text}");
}
