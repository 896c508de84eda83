//! Wire representation of flag and segment documents
//!
//! These structs mirror the JSON schema field for field. Fields the schema
//! lets a document leave unset are `Option`s so that "absent" stays distinct
//! from "zero" until the decoder resolves it. Every other field tolerates both
//! omission and an explicit `null`, which read as the type's zero value.

use flagmodel_core::{AttrRef, Operator, UnixMillis, Value};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Read `null` as the type's default instead of failing
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Flag document
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlagRep {
    /// `key`
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    /// `on`
    #[serde(deserialize_with = "null_as_default")]
    pub on: bool,
    /// `prerequisites`
    #[serde(deserialize_with = "null_as_default")]
    pub prerequisites: Vec<PrerequisiteRep>,
    /// `targets`
    #[serde(deserialize_with = "null_as_default")]
    pub targets: Vec<TargetRep>,
    /// `rules`
    #[serde(deserialize_with = "null_as_default")]
    pub rules: Vec<FlagRuleRep>,
    /// `fallthrough`
    #[serde(deserialize_with = "null_as_default")]
    pub fallthrough: VariationOrRolloutRep,
    /// `offVariation`; `None` when absent or `null`
    pub off_variation: Option<i64>,
    /// `variations`
    #[serde(deserialize_with = "null_as_default")]
    pub variations: Vec<Value>,
    /// `clientSide`
    #[serde(deserialize_with = "null_as_default")]
    pub client_side: bool,
    /// `salt`
    #[serde(deserialize_with = "null_as_default")]
    pub salt: String,
    /// `trackEvents`
    #[serde(deserialize_with = "null_as_default")]
    pub track_events: bool,
    /// `trackEventsFallthrough`
    #[serde(deserialize_with = "null_as_default")]
    pub track_events_fallthrough: bool,
    /// `debugEventsUntilDate`
    #[serde(deserialize_with = "null_as_default")]
    pub debug_events_until_date: UnixMillis,
    /// `version`
    #[serde(deserialize_with = "null_as_default")]
    pub version: i64,
    /// `deleted`
    #[serde(deserialize_with = "null_as_default")]
    pub deleted: bool,
}

/// `prerequisites[]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PrerequisiteRep {
    /// `key`
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    /// `variation`
    #[serde(deserialize_with = "null_as_default")]
    pub variation: i64,
}

/// `targets[]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TargetRep {
    /// `values`
    #[serde(deserialize_with = "null_as_default")]
    pub values: Vec<String>,
    /// `variation`
    #[serde(deserialize_with = "null_as_default")]
    pub variation: i64,
}

/// `rules[]` of a flag
///
/// The `variation`/`rollout` pair is shared with `fallthrough` and is
/// flattened in from [`VariationOrRolloutRep`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlagRuleRep {
    /// `variation` and `rollout`
    #[serde(flatten)]
    pub variation_or_rollout: VariationOrRolloutRep,
    /// `id`
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// `clauses`
    #[serde(deserialize_with = "null_as_default")]
    pub clauses: Vec<ClauseRep>,
    /// `trackEvents`
    #[serde(deserialize_with = "null_as_default")]
    pub track_events: bool,
}

/// `{variation, rollout}` pair used by rules and by `fallthrough`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VariationOrRolloutRep {
    /// `variation`; `None` when absent or `null`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<i64>,
    /// `rollout`; `None` when absent or `null`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollout: Option<RolloutRep>,
}

impl VariationOrRolloutRep {
    /// Both halves set, or neither
    ///
    /// Decoding accepts this; the evaluation engine decides what it means.
    pub fn is_ambiguous(&self) -> bool {
        self.variation.is_some() == self.rollout.is_some()
    }
}

/// `rollout`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RolloutRep {
    /// `variations`
    #[serde(deserialize_with = "null_as_default")]
    pub variations: Vec<WeightedVariationRep>,
    /// `bucketBy`
    #[serde(deserialize_with = "null_as_default")]
    pub bucket_by: AttrRef,
}

/// `rollout.variations[]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WeightedVariationRep {
    /// `variation`
    #[serde(deserialize_with = "null_as_default")]
    pub variation: i64,
    /// `weight`
    #[serde(deserialize_with = "null_as_default")]
    pub weight: i64,
}

/// `clauses[]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClauseRep {
    /// `attribute`
    #[serde(deserialize_with = "null_as_default")]
    pub attribute: AttrRef,
    /// `op`
    #[serde(deserialize_with = "null_as_default")]
    pub op: Operator,
    /// `values`, matched as an OR
    #[serde(deserialize_with = "null_as_default")]
    pub values: Vec<Value>,
    /// `negate`
    #[serde(deserialize_with = "null_as_default")]
    pub negate: bool,
}

/// Segment document
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SegmentRep {
    /// `key`
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    /// `included`
    #[serde(deserialize_with = "null_as_default")]
    pub included: Vec<String>,
    /// `excluded`
    #[serde(deserialize_with = "null_as_default")]
    pub excluded: Vec<String>,
    /// `salt`
    #[serde(deserialize_with = "null_as_default")]
    pub salt: String,
    /// `rules`
    #[serde(deserialize_with = "null_as_default")]
    pub rules: Vec<SegmentRuleRep>,
    /// `version`
    #[serde(deserialize_with = "null_as_default")]
    pub version: i64,
    /// `deleted`
    #[serde(deserialize_with = "null_as_default")]
    pub deleted: bool,
}

/// `rules[]` of a segment
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SegmentRuleRep {
    /// `id`
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// `clauses`
    #[serde(deserialize_with = "null_as_default")]
    pub clauses: Vec<ClauseRep>,
    /// `weight`; `None` when absent or `null`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    /// `bucketBy`; `None` when absent or `null`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_by: Option<AttrRef>,
}

/// Full data set: `{"flags": {key: flag}, "segments": {key: segment}}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AllDataRep {
    /// `flags`
    #[serde(deserialize_with = "null_as_default")]
    pub flags: HashMap<String, FlagRep>,
    /// `segments`
    #[serde(deserialize_with = "null_as_default")]
    pub segments: HashMap<String, SegmentRep>,
}
