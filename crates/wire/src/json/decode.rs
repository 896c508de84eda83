//! Wire-to-model mapping
//!
//! Every function here is total: once a document has parsed into its wire
//! representation, mapping it to the domain model cannot fail. Optional wire
//! fields are resolved to sentinels or defaults at this boundary so nothing
//! downstream tests for absence.

use super::error::{DecodeError, EntityKind};
use super::rep::{
    ClauseRep, FlagRep, FlagRuleRep, SegmentRep, SegmentRuleRep, VariationOrRolloutRep,
};
use flagmodel_core::{
    Clause, Flag, FlagRule, Prerequisite, Rollout, Segment, SegmentRule, Target,
    VariationOrRollout, WeightedVariation, NO_VARIATION, NO_WEIGHT,
};
use serde::de::DeserializeOwned;

/// Parse `data` as a wire representation
///
/// The bytes go through a `serde_json::Value` first so that a repeated
/// object key keeps its last value instead of failing the derived struct.
/// Syntax and truncation errors carry a position; shape errors found in
/// the second step do not.
pub(crate) fn parse<T: DeserializeOwned>(data: &[u8], entity: EntityKind) -> Result<T, DecodeError> {
    let document: serde_json::Value =
        serde_json::from_slice(data).map_err(|e| DecodeError::malformed(entity, &e))?;
    serde_json::from_value(document).map_err(|e| DecodeError::malformed(entity, &e))
}

/// Resolve an optional variation index: absent becomes [`NO_VARIATION`]
pub fn resolve_variation(value: Option<i64>) -> i64 {
    value.unwrap_or(NO_VARIATION)
}

/// Resolve an optional segment rule weight: absent becomes [`NO_WEIGHT`]
pub fn resolve_weight(value: Option<i64>) -> i64 {
    value.unwrap_or(NO_WEIGHT)
}

/// Map a flag representation to the model
///
/// Does not run preprocessing; [`Decoder`](crate::Decoder) does that.
pub fn flag_from_rep(rep: FlagRep) -> Flag {
    let prerequisites = rep
        .prerequisites
        .into_iter()
        .map(|p| Prerequisite {
            key: p.key,
            variation: p.variation,
        })
        .collect();

    let targets = rep
        .targets
        .into_iter()
        .map(|t| Target {
            values: t.values,
            variation: t.variation,
            ..Target::default()
        })
        .collect();

    let rules = rep.rules.into_iter().map(decode_flag_rule).collect();

    Flag {
        key: rep.key,
        on: rep.on,
        version: rep.version,
        deleted: rep.deleted,
        prerequisites,
        targets,
        rules,
        fallthrough: decode_variation_or_rollout(rep.fallthrough),
        off_variation: resolve_variation(rep.off_variation),
        variations: rep.variations,
        client_side: rep.client_side,
        salt: rep.salt,
        track_events: rep.track_events,
        track_events_fallthrough: rep.track_events_fallthrough,
        debug_events_until_date: rep.debug_events_until_date,
    }
}

fn decode_flag_rule(rep: FlagRuleRep) -> FlagRule {
    FlagRule {
        variation_or_rollout: decode_variation_or_rollout(rep.variation_or_rollout),
        id: rep.id,
        clauses: decode_clauses(rep.clauses),
        track_events: rep.track_events,
    }
}

/// Map a segment representation to the model
///
/// Does not run preprocessing; [`Decoder`](crate::Decoder) does that.
pub fn segment_from_rep(rep: SegmentRep) -> Segment {
    Segment {
        key: rep.key,
        version: rep.version,
        deleted: rep.deleted,
        included: rep.included,
        excluded: rep.excluded,
        salt: rep.salt,
        rules: rep.rules.into_iter().map(decode_segment_rule).collect(),
        ..Segment::default()
    }
}

fn decode_segment_rule(rep: SegmentRuleRep) -> SegmentRule {
    SegmentRule {
        id: rep.id,
        clauses: decode_clauses(rep.clauses),
        weight: resolve_weight(rep.weight),
        bucket_by: rep.bucket_by.unwrap_or_default(),
    }
}

/// Map the shared `{variation, rollout}` pair
///
/// An absent rollout decodes to an empty one, so absence and an explicitly
/// empty rollout are indistinguishable afterwards.
pub fn decode_variation_or_rollout(rep: VariationOrRolloutRep) -> VariationOrRollout {
    let rollout = match rep.rollout {
        Some(r) => Rollout {
            variations: r
                .variations
                .into_iter()
                .map(|wv| WeightedVariation {
                    variation: wv.variation,
                    weight: wv.weight,
                })
                .collect(),
            bucket_by: r.bucket_by,
        },
        None => Rollout::default(),
    };
    VariationOrRollout {
        variation: resolve_variation(rep.variation),
        rollout,
    }
}

/// Map clauses element by element, preserving order
pub fn decode_clauses(reps: Vec<ClauseRep>) -> Vec<Clause> {
    reps.into_iter()
        .map(|c| Clause {
            attribute: c.attribute,
            op: c.op,
            values: c.values,
            negate: c.negate,
            ..Clause::default()
        })
        .collect()
}
