//! Normalized flag and segment model
//!
//! Nothing in this module is nullable: optional wire fields have already been
//! resolved to sentinels ([`NO_VARIATION`](crate::NO_VARIATION),
//! [`NO_WEIGHT`](crate::NO_WEIGHT)), defaults, or empty containers by the
//! time a value of these types exists.

mod clause;
mod flag;
mod rollout;
mod segment;

pub use clause::{Clause, ClauseIndex};
pub use flag::{Flag, FlagRule, Prerequisite, Target, TargetIndex};
pub use rollout::{Rollout, VariationOrRollout, WeightedVariation};
pub use segment::{Segment, SegmentIndex, SegmentRule};
