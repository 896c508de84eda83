//! Post-decode preprocessing hook
//!
//! The decoder hands every freshly built [`Flag`] and [`Segment`] to a
//! [`Preprocessor`] exactly once, before returning it. The entity has no other
//! owner at that point, so the hook mutates it in place without locking.

use crate::model::{Clause, Flag, Segment};
use tracing::trace;

/// Post-decode normalization applied to each decoded entity
pub trait Preprocessor: Send + Sync {
    /// Called once per successfully decoded flag
    fn preprocess_flag(&self, flag: &mut Flag);

    /// Called once per successfully decoded segment
    fn preprocess_segment(&self, segment: &mut Segment);
}

/// Leaves entities exactly as decoded
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPreprocessor;

impl Preprocessor for NoopPreprocessor {
    fn preprocess_flag(&self, _flag: &mut Flag) {}

    fn preprocess_segment(&self, _segment: &mut Segment) {}
}

/// Builds hash-set lookup indices for targets, clauses, and segment lists
///
/// Running it more than once yields the same indices.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexingPreprocessor;

impl IndexingPreprocessor {
    fn index_clauses(clauses: &mut [Clause]) {
        for clause in clauses {
            clause.index.values.clear();
            if clause.op.is_exact_match() {
                clause.index.values.extend(clause.values.iter().cloned());
            }
        }
    }
}

impl Preprocessor for IndexingPreprocessor {
    fn preprocess_flag(&self, flag: &mut Flag) {
        for target in &mut flag.targets {
            target.index.keys = target.values.iter().cloned().collect();
        }
        for rule in &mut flag.rules {
            Self::index_clauses(&mut rule.clauses);
        }
        trace!(
            key = %flag.key,
            targets = flag.targets.len(),
            rules = flag.rules.len(),
            "indexed flag"
        );
    }

    fn preprocess_segment(&self, segment: &mut Segment) {
        segment.index.included = segment.included.iter().cloned().collect();
        segment.index.excluded = segment.excluded.iter().cloned().collect();
        for rule in &mut segment.rules {
            Self::index_clauses(&mut rule.clauses);
        }
        trace!(
            key = %segment.key,
            included = segment.included.len(),
            excluded = segment.excluded.len(),
            "indexed segment"
        );
    }
}
