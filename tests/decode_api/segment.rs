//! Segment decode tests

use crate::*;
use flagmodel::{AttrRef, Operator};

#[test]
fn test_segment_scalars_and_lists() {
    let s = segment(
        r#"{
            "key": "beta-testers",
            "version": 7,
            "deleted": false,
            "included": ["alice", "bob"],
            "excluded": ["mallory"],
            "salt": "seg-salt"
        }"#,
    );

    assert_eq!(s.key, "beta-testers");
    assert_eq!(s.version, 7);
    assert!(!s.deleted);
    assert_eq!(s.included, vec!["alice", "bob"]);
    assert_eq!(s.excluded, vec!["mallory"]);
    assert_eq!(s.salt, "seg-salt");
    assert!(s.rules.is_empty());
}

#[test]
fn test_rule_weight_absent_is_sentinel() {
    let s = segment(r#"{"key":"s","rules":[{"id":"r1","clauses":[]}]}"#);
    assert_eq!(s.rules[0].weight, -1);
    assert_eq!(s.rules[0].weight, NO_WEIGHT);
    assert!(!s.rules[0].has_weight());
}

#[test]
fn test_rule_weight_null_is_sentinel() {
    let s = segment(r#"{"key":"s","rules":[{"id":"r1","weight":null}]}"#);
    assert_eq!(s.rules[0].weight, NO_WEIGHT);
}

#[test]
fn test_rule_weight_is_preserved_exactly() {
    let s = segment(r#"{"key":"s","rules":[{"id":"r1","weight":50000}]}"#);
    assert_eq!(s.rules[0].weight, 50_000);
    assert!(s.rules[0].has_weight());
}

#[test]
fn test_rule_weight_zero_is_zero() {
    let s = segment(r#"{"key":"s","rules":[{"id":"r1","weight":0}]}"#);
    assert_eq!(s.rules[0].weight, 0);
}

#[test]
fn test_rule_bucket_by_absent_is_key() {
    let s = segment(r#"{"key":"s","rules":[{"id":"r1"}]}"#);
    assert_eq!(s.rules[0].bucket_by, AttrRef::default());
    assert!(s.rules[0].bucket_by.is_key());
}

#[test]
fn test_rule_bucket_by_email() {
    let s = segment(r#"{"key":"s","rules":[{"id":"r1","bucketBy":"email"}]}"#);
    assert_eq!(s.rules[0].bucket_by, AttrRef::email());
}

#[test]
fn test_rule_clauses() {
    let s = segment(
        r#"{"key":"s","rules":[{"id":"r1","clauses":[
            {"attribute":"plan","op":"in","values":["gold","platinum"]},
            {"attribute":"key","op":"segmentMatch","values":["other-seg"],"negate":true}
        ]}]}"#,
    );
    let clauses = &s.rules[0].clauses;
    assert_eq!(clauses.len(), 2);
    assert_eq!(clauses[0].attribute, AttrRef::new("plan"));
    assert!(!clauses[0].negate);
    assert_eq!(clauses[1].op, Operator::SegmentMatch);
    assert!(clauses[1].negate);
    assert!(clauses[1].has_value(&Value::from("other-seg")));
}

#[test]
fn test_omitted_and_empty_lists_are_indistinguishable() {
    let omitted = segment(r#"{"key":"s"}"#);
    let empty = segment(r#"{"key":"s","included":[],"excluded":[],"rules":[]}"#);
    assert_eq!(omitted, empty);
    assert_eq!(omitted.rules.len(), 0);
}

#[test]
fn test_preprocessing_has_run() {
    let s = segment(r#"{"key":"s","included":["a"],"excluded":["b"]}"#);
    assert!(s.index.included.contains("a"));
    assert!(s.index.excluded.contains("b"));
    assert!(s.is_included("a"));
    assert!(s.is_excluded("b"));
}

#[test]
fn test_encode_then_decode_is_identity() {
    let original = segment(
        r#"{"key":"s","version":3,"included":["a"],"rules":[
            {"id":"r1","weight":10000,"bucketBy":"email"},
            {"id":"r2"}
        ]}"#,
    );
    let encoded = encode_segment(&original).unwrap();
    assert_eq!(segment(&encoded), original);
}
