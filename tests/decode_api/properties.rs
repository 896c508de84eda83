//! Property tests for sentinel resolution and list normalization

use crate::*;
use proptest::prelude::*;

fn optional_field(name: &str, value: Option<i64>, explicit_null: bool) -> String {
    match (value, explicit_null) {
        (Some(v), _) => format!(r#","{name}":{v}"#),
        (None, true) => format!(r#","{name}":null"#),
        (None, false) => String::new(),
    }
}

proptest! {
    #[test]
    fn off_variation_resolves_to_value_or_sentinel(
        value in proptest::option::of(0i64..1_000),
        explicit_null in any::<bool>(),
    ) {
        let doc = format!(r#"{{"key":"p"{}}}"#, optional_field("offVariation", value, explicit_null));
        let f = decode_flag(doc.as_bytes()).unwrap();
        prop_assert_eq!(f.off_variation, value.unwrap_or(NO_VARIATION));
    }

    #[test]
    fn rule_variation_resolves_to_value_or_sentinel(
        value in proptest::option::of(0i64..1_000),
        explicit_null in any::<bool>(),
    ) {
        let doc = format!(
            r#"{{"key":"p","rules":[{{"id":"r"{}}}]}}"#,
            optional_field("variation", value, explicit_null)
        );
        let f = decode_flag(doc.as_bytes()).unwrap();
        prop_assert_eq!(f.rules[0].variation_or_rollout.variation, value.unwrap_or(NO_VARIATION));
    }

    #[test]
    fn segment_weight_is_preserved_or_sentinel(
        value in proptest::option::of(0i64..=100_000),
        explicit_null in any::<bool>(),
    ) {
        let doc = format!(
            r#"{{"key":"s","rules":[{{"id":"r"{}}}]}}"#,
            optional_field("weight", value, explicit_null)
        );
        let s = decode_segment(doc.as_bytes()).unwrap();
        prop_assert_eq!(s.rules[0].weight, value.unwrap_or(NO_WEIGHT));
    }

    #[test]
    fn target_lists_keep_length_and_order(keys in proptest::collection::vec("[a-z]{1,8}", 0..16)) {
        let values = serde_json::to_string(&keys).unwrap();
        let doc = format!(r#"{{"key":"p","targets":[{{"values":{values},"variation":0}}]}}"#);
        let f = decode_flag(doc.as_bytes()).unwrap();
        prop_assert_eq!(&f.targets[0].values, &keys);
        for key in &keys {
            prop_assert!(f.targets[0].contains(key));
        }
    }

    #[test]
    fn arbitrary_bytes_never_panic(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        // Either outcome is fine; decoding must not panic
        let _ = decode_flag(&data);
        let _ = decode_segment(&data);
    }
}
