//! Clause: a single predicate over a context attribute

use crate::types::{AttrRef, Operator};
use crate::value::Value;
use rustc_hash::FxHashSet;

/// Predicate comparing a context attribute against a list of values
///
/// Values are matched as an OR. `negate` inverts the final result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clause {
    /// Attribute to read from the context
    pub attribute: AttrRef,
    /// Comparison operator
    pub op: Operator,
    /// Comparison values, in wire order
    pub values: Vec<Value>,
    /// Invert the match result
    pub negate: bool,
    /// Lookup index filled in by preprocessing
    pub index: ClauseIndex,
}

/// Preprocessing bookkeeping for a clause
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseIndex {
    /// Set of `values`, built only for exact-match operators
    pub values: FxHashSet<Value>,
}

impl Clause {
    /// Check whether `candidate` is one of this clause's values
    ///
    /// Uses the preprocessed set when there is one, otherwise scans.
    pub fn has_value(&self, candidate: &Value) -> bool {
        if self.index.values.is_empty() {
            self.values.contains(candidate)
        } else {
            self.index.values.contains(candidate)
        }
    }
}
