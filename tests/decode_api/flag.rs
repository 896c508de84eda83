//! Flag decode tests

use crate::*;
use flagmodel::{AttrRef, Operator, UnixMillis, WeightedVariation};

// =============================================================================
// END-TO-END
// =============================================================================

#[test]
fn test_minimal_flag_end_to_end() {
    let f = flag(
        r#"{"key":"flag1","on":true,"offVariation":null,"fallthrough":{"variation":0},"variations":[true,false],"version":1}"#,
    );

    assert_eq!(f.key, "flag1");
    assert!(f.on);
    assert_eq!(f.off_variation, NO_VARIATION);
    assert_eq!(f.fallthrough.variation, 0);
    assert_eq!(f.variations, vec![Value::Bool(true), Value::Bool(false)]);
    assert_eq!(f.version, 1);
    assert!(f.prerequisites.is_empty());
    assert!(f.targets.is_empty());
    assert!(f.rules.is_empty());
}

#[test]
fn test_full_flag_scalars() {
    let f = flag(full_flag_json());

    assert_eq!(f.key, "checkout-redesign");
    assert_eq!(f.version, 42);
    assert!(!f.deleted);
    assert_eq!(f.off_variation, 1);
    assert!(f.client_side);
    assert_eq!(f.salt, "abc123");
    assert!(f.track_events);
    assert!(!f.track_events_fallthrough);
    assert_eq!(f.debug_events_until_date, UnixMillis(1_700_000_000_000));
    assert_eq!(f.off_value(), Some(&Value::from("treatment")));
}

#[test]
fn test_full_flag_prerequisites_and_targets() {
    let f = flag(full_flag_json());

    assert_eq!(f.prerequisites.len(), 1);
    assert_eq!(f.prerequisites[0].key, "new-cart");
    assert_eq!(f.prerequisites[0].variation, 1);

    assert_eq!(f.targets.len(), 2);
    assert_eq!(f.targets[0].values, vec!["alice", "bob"]);
    assert_eq!(f.target_for("carol").map(|t| t.variation), Some(1));
    assert!(f.target_for("dave").is_none());
}

#[test]
fn test_full_flag_rules() {
    let f = flag(full_flag_json());
    assert_eq!(f.rules.len(), 2);

    let fixed = &f.rules[0];
    assert_eq!(fixed.id, "rule-country");
    assert_eq!(fixed.variation_or_rollout.variation, 1);
    assert!(fixed.variation_or_rollout.rollout.is_empty());
    assert!(fixed.track_events);

    let rollout = &f.rules[1];
    assert_eq!(rollout.variation_or_rollout.variation, NO_VARIATION);
    assert_eq!(
        rollout.variation_or_rollout.rollout.variations,
        vec![
            WeightedVariation { variation: 0, weight: 25_000 },
            WeightedVariation { variation: 1, weight: 75_000 },
        ]
    );
    assert_eq!(rollout.variation_or_rollout.rollout.bucket_by, AttrRef::email());
    assert!(!rollout.track_events);
}

#[test]
fn test_clause_is_structural_copy() {
    let f = flag(full_flag_json());
    let clause = &f.rules[0].clauses[0];

    assert_eq!(clause.attribute, AttrRef::country());
    assert_eq!(clause.op, Operator::In);
    assert_eq!(clause.values, vec![Value::from("US"), Value::from("CA")]);
    assert!(clause.negate);
}

// =============================================================================
// SENTINELS
// =============================================================================

#[test]
fn test_off_variation_absent_is_sentinel() {
    assert_eq!(flag(r#"{"key":"a"}"#).off_variation, NO_VARIATION);
}

#[test]
fn test_off_variation_null_is_sentinel() {
    assert_eq!(flag(r#"{"key":"a","offVariation":null}"#).off_variation, NO_VARIATION);
}

#[test]
fn test_off_variation_zero_is_zero() {
    assert_eq!(flag(r#"{"key":"a","offVariation":0}"#).off_variation, 0);
}

#[test]
fn test_off_variation_three_is_three() {
    assert_eq!(flag(r#"{"key":"a","offVariation":3}"#).off_variation, 3);
}

#[test]
fn test_rule_variation_absent_is_sentinel() {
    let f = flag(r#"{"key":"a","rules":[{"id":"r"}]}"#);
    assert_eq!(f.rules[0].variation_or_rollout.variation, NO_VARIATION);
}

#[test]
fn test_rule_with_neither_half_is_kept() {
    init_logging();
    let f = flag(r#"{"key":"a","rules":[{"id":"r","clauses":[]}]}"#);
    let vr = &f.rules[0].variation_or_rollout;
    assert_eq!(vr.variation, NO_VARIATION);
    assert!(vr.rollout.variations.is_empty());
    assert!(vr.rollout.bucket_by.is_key());
}

#[test]
fn test_rule_with_both_halves_is_kept() {
    let f = flag(
        r#"{"key":"a","rules":[{"id":"r","variation":1,"rollout":{"variations":[{"variation":0,"weight":100000}]}}]}"#,
    );
    let vr = &f.rules[0].variation_or_rollout;
    assert_eq!(vr.variation, 1);
    assert_eq!(vr.rollout.variations.len(), 1);
}

#[test]
fn test_rollout_without_bucket_by_uses_key() {
    let f = flag(r#"{"key":"a","fallthrough":{"rollout":{"variations":[]}}}"#);
    assert!(f.fallthrough.rollout.bucket_by.is_key());
}

#[test]
fn test_unknown_operator_decodes() {
    let f = flag(
        r#"{"key":"a","rules":[{"id":"r","clauses":[{"attribute":"key","op":"someFutureOp","values":[]}]}]}"#,
    );
    assert_eq!(
        f.rules[0].clauses[0].op,
        Operator::Unknown("someFutureOp".to_string())
    );
}

#[test]
fn test_out_of_range_variation_is_not_validated() {
    let f = flag(r#"{"key":"a","offVariation":9,"variations":[true]}"#);
    assert_eq!(f.off_variation, 9);
    assert!(f.off_value().is_none());
}

// =============================================================================
// LISTS
// =============================================================================

#[test]
fn test_omitted_lists_are_empty() {
    let f = flag(r#"{"key":"a"}"#);
    assert_eq!(f.prerequisites.len(), 0);
    assert_eq!(f.targets.len(), 0);
    assert_eq!(f.rules.len(), 0);
    assert_eq!(f.variations.len(), 0);
}

#[test]
fn test_empty_lists_are_empty() {
    let f = flag(r#"{"key":"a","prerequisites":[],"targets":[],"rules":[]}"#);
    assert_eq!(f.prerequisites.len(), 0);
    assert_eq!(f.targets.len(), 0);
    assert_eq!(f.rules.len(), 0);
}

#[test]
fn test_omitted_and_empty_lists_are_indistinguishable() {
    let omitted = flag(r#"{"key":"a"}"#);
    let empty = flag(r#"{"key":"a","prerequisites":[],"targets":[],"rules":[]}"#);
    let null = flag(r#"{"key":"a","prerequisites":null,"targets":null,"rules":null}"#);
    assert_eq!(omitted, empty);
    assert_eq!(omitted, null);
}

// =============================================================================
// PREPROCESSING
// =============================================================================

#[test]
fn test_preprocessing_has_run() {
    let f = flag(full_flag_json());

    assert!(f.targets[0].index.keys.contains("alice"));
    let in_clause = &f.rules[0].clauses[0];
    assert!(in_clause.index.values.contains(&Value::from("CA")));
    // endsWith is not an exact-match operator
    assert!(f.rules[1].clauses[0].index.values.is_empty());
}

#[test]
fn test_raw_decoder_skips_preprocessing() {
    let decoder = Decoder::builder().no_preprocessing().build();
    let f = decoder.decode_flag(full_flag_json().as_bytes()).unwrap();

    assert!(f.targets[0].index.keys.is_empty());
    // Lookups still work by scanning
    assert!(f.targets[0].contains("bob"));
}

// =============================================================================
// ENCODING
// =============================================================================

#[test]
fn test_encode_then_decode_is_identity() {
    let original = flag(full_flag_json());
    let encoded = encode_flag(&original).unwrap();
    let decoded = flag(&encoded);
    assert_eq!(decoded, original);
}

#[test]
fn test_encoded_sentinel_is_null() {
    let original = flag(r#"{"key":"a"}"#);
    let encoded = encode_flag(&original).unwrap();
    let json: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert!(json["offVariation"].is_null());
}
