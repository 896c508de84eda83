//! User segment model

use super::clause::Clause;
use crate::types::{AttrRef, NO_WEIGHT};
use rustc_hash::FxHashSet;

/// A reusable segment referenced by `segmentMatch` clauses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    /// Segment key
    pub key: String,
    /// Document version
    pub version: i64,
    /// Tombstone marker
    pub deleted: bool,
    /// Context keys always in the segment
    pub included: Vec<String>,
    /// Context keys never in the segment
    pub excluded: Vec<String>,
    /// Bucketing salt
    pub salt: String,
    /// Membership rules
    pub rules: Vec<SegmentRule>,
    /// Lookup index filled in by preprocessing
    pub index: SegmentIndex,
}

/// Preprocessing bookkeeping for a segment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentIndex {
    /// Set of `included`
    pub included: FxHashSet<String>,
    /// Set of `excluded`
    pub excluded: FxHashSet<String>,
}

impl Segment {
    /// Check the explicit include list
    pub fn is_included(&self, context_key: &str) -> bool {
        if self.index.included.is_empty() {
            self.included.iter().any(|k| k == context_key)
        } else {
            self.index.included.contains(context_key)
        }
    }

    /// Check the explicit exclude list
    pub fn is_excluded(&self, context_key: &str) -> bool {
        if self.index.excluded.is_empty() {
            self.excluded.iter().any(|k| k == context_key)
        } else {
            self.index.excluded.contains(context_key)
        }
    }
}

/// Segment membership rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentRule {
    /// Rule id
    pub id: String,
    /// Clauses, all of which must match
    pub clauses: Vec<Clause>,
    /// Percentage weight, or [`NO_WEIGHT`] to include every match
    pub weight: i64,
    /// Attribute hashed for weighted rules
    pub bucket_by: AttrRef,
}

impl SegmentRule {
    /// Whether the wire document gave this rule an explicit weight
    pub fn has_weight(&self) -> bool {
        self.weight != NO_WEIGHT
    }
}

impl Default for SegmentRule {
    fn default() -> Self {
        SegmentRule {
            id: String::new(),
            clauses: Vec::new(),
            weight: NO_WEIGHT,
            bucket_by: AttrRef::default(),
        }
    }
}
