//! Domain model for flagmodel
//!
//! This crate defines the normalized, non-nullable model that the wire
//! decoder produces and the evaluation engine consumes:
//!
//! - [`Flag`], [`Segment`] and their nested rules, clauses, and rollouts
//! - [`Value`]: generic JSON value for variations and clause values
//! - [`AttrRef`], [`Operator`], [`UnixMillis`]: small collaborator types
//! - [`Preprocessor`]: the post-decode hook

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod model;
pub mod preprocess;
pub mod types;
pub mod value;

pub use model::{
    Clause, ClauseIndex, Flag, FlagRule, Prerequisite, Rollout, Segment, SegmentIndex,
    SegmentRule, Target, TargetIndex, VariationOrRollout, WeightedVariation,
};
pub use preprocess::{IndexingPreprocessor, NoopPreprocessor, Preprocessor};
pub use types::{AttrRef, Operator, UnixMillis, NO_VARIATION, NO_WEIGHT};
pub use value::Value;
