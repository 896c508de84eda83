//! Variation selection: a fixed variation or a weighted rollout

use crate::types::{AttrRef, NO_VARIATION};

/// Fixed variation index or percentage rollout
///
/// Used both as a flag rule's outcome and as the flag's fallthrough. Exactly
/// one of the two is expected to be meaningful, but that is not enforced
/// here; a value with `variation == NO_VARIATION` and an empty rollout is
/// representable and left to the evaluation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariationOrRollout {
    /// Fixed variation index, or [`NO_VARIATION`]
    pub variation: i64,
    /// Rollout; empty when the wire document had none
    pub rollout: Rollout,
}

impl VariationOrRollout {
    /// A fixed variation
    pub fn fixed(variation: i64) -> Self {
        VariationOrRollout {
            variation,
            rollout: Rollout::default(),
        }
    }

    /// A rollout with no fixed variation
    pub fn rollout(rollout: Rollout) -> Self {
        VariationOrRollout {
            variation: NO_VARIATION,
            rollout,
        }
    }

    /// Fixed variation index, if one was specified
    pub fn variation_index(&self) -> Option<usize> {
        usize::try_from(self.variation).ok()
    }
}

impl Default for VariationOrRollout {
    fn default() -> Self {
        VariationOrRollout {
            variation: NO_VARIATION,
            rollout: Rollout::default(),
        }
    }
}

/// Weighted distribution over variations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rollout {
    /// Buckets in wire order
    pub variations: Vec<WeightedVariation>,
    /// Attribute hashed to pick a bucket
    pub bucket_by: AttrRef,
}

impl Rollout {
    /// An absent rollout and an explicitly empty one look the same after decode
    pub fn is_empty(&self) -> bool {
        self.variations.is_empty() && self.bucket_by.is_key()
    }

    /// Sum of all bucket weights
    ///
    /// Weight units belong to the evaluation engine; this is a raw sum.
    pub fn total_weight(&self) -> i64 {
        self.variations.iter().map(|wv| wv.weight).sum()
    }
}

/// One rollout bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WeightedVariation {
    /// Variation index
    pub variation: i64,
    /// Bucket weight, preserved unchanged from the wire
    pub weight: i64,
}
