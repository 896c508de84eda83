//! Model-to-wire encoding
//!
//! Sentinels map back to wire absence: `NO_VARIATION` becomes an omitted
//! `variation` (or `"offVariation": null`), `NO_WEIGHT` an omitted `weight`,
//! and an empty rollout an omitted `rollout`. Preprocessing indices are not
//! part of the wire format and are dropped.

use super::rep::{
    ClauseRep, FlagRep, FlagRuleRep, PrerequisiteRep, RolloutRep, SegmentRep, SegmentRuleRep,
    TargetRep, VariationOrRolloutRep, WeightedVariationRep,
};
use flagmodel_core::{
    Clause, Flag, FlagRule, Segment, SegmentRule, VariationOrRollout, NO_VARIATION, NO_WEIGHT,
};

/// Encode a flag as a wire document
pub fn encode_flag(flag: &Flag) -> serde_json::Result<String> {
    serde_json::to_string(&FlagRep::from(flag))
}

/// Encode a segment as a wire document
pub fn encode_segment(segment: &Segment) -> serde_json::Result<String> {
    serde_json::to_string(&SegmentRep::from(segment))
}

fn sentinel_to_option(value: i64, sentinel: i64) -> Option<i64> {
    (value != sentinel).then_some(value)
}

impl From<&Flag> for FlagRep {
    fn from(flag: &Flag) -> Self {
        FlagRep {
            key: flag.key.clone(),
            on: flag.on,
            prerequisites: flag
                .prerequisites
                .iter()
                .map(|p| PrerequisiteRep {
                    key: p.key.clone(),
                    variation: p.variation,
                })
                .collect(),
            targets: flag
                .targets
                .iter()
                .map(|t| TargetRep {
                    values: t.values.clone(),
                    variation: t.variation,
                })
                .collect(),
            rules: flag.rules.iter().map(FlagRuleRep::from).collect(),
            fallthrough: VariationOrRolloutRep::from(&flag.fallthrough),
            off_variation: sentinel_to_option(flag.off_variation, NO_VARIATION),
            variations: flag.variations.clone(),
            client_side: flag.client_side,
            salt: flag.salt.clone(),
            track_events: flag.track_events,
            track_events_fallthrough: flag.track_events_fallthrough,
            debug_events_until_date: flag.debug_events_until_date,
            version: flag.version,
            deleted: flag.deleted,
        }
    }
}

impl From<&FlagRule> for FlagRuleRep {
    fn from(rule: &FlagRule) -> Self {
        FlagRuleRep {
            variation_or_rollout: VariationOrRolloutRep::from(&rule.variation_or_rollout),
            id: rule.id.clone(),
            clauses: rule.clauses.iter().map(ClauseRep::from).collect(),
            track_events: rule.track_events,
        }
    }
}

impl From<&VariationOrRollout> for VariationOrRolloutRep {
    fn from(vr: &VariationOrRollout) -> Self {
        let rollout = (!vr.rollout.is_empty()).then(|| RolloutRep {
            variations: vr
                .rollout
                .variations
                .iter()
                .map(|wv| WeightedVariationRep {
                    variation: wv.variation,
                    weight: wv.weight,
                })
                .collect(),
            bucket_by: vr.rollout.bucket_by.clone(),
        });
        VariationOrRolloutRep {
            variation: sentinel_to_option(vr.variation, NO_VARIATION),
            rollout,
        }
    }
}

impl From<&Clause> for ClauseRep {
    fn from(clause: &Clause) -> Self {
        ClauseRep {
            attribute: clause.attribute.clone(),
            op: clause.op.clone(),
            values: clause.values.clone(),
            negate: clause.negate,
        }
    }
}

impl From<&Segment> for SegmentRep {
    fn from(segment: &Segment) -> Self {
        SegmentRep {
            key: segment.key.clone(),
            included: segment.included.clone(),
            excluded: segment.excluded.clone(),
            salt: segment.salt.clone(),
            rules: segment.rules.iter().map(SegmentRuleRep::from).collect(),
            version: segment.version,
            deleted: segment.deleted,
        }
    }
}

impl From<&SegmentRule> for SegmentRuleRep {
    fn from(rule: &SegmentRule) -> Self {
        SegmentRuleRep {
            id: rule.id.clone(),
            clauses: rule.clauses.iter().map(ClauseRep::from).collect(),
            weight: sentinel_to_option(rule.weight, NO_WEIGHT),
            bucket_by: (!rule.bucket_by.is_key()).then(|| rule.bucket_by.clone()),
        }
    }
}
