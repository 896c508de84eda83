//! Public types for the flagmodel API.
//!
//! This module re-exports types from the internal crates with a flat public
//! interface.

// Model
pub use flagmodel_core::{
    Clause, Flag, FlagRule, Prerequisite, Rollout, Segment, SegmentRule, Target,
    VariationOrRollout, WeightedVariation,
};

// Preprocessing bookkeeping
pub use flagmodel_core::{ClauseIndex, SegmentIndex, TargetIndex};

// Collaborator types and sentinels
pub use flagmodel_core::{AttrRef, Operator, UnixMillis, Value, NO_VARIATION, NO_WEIGHT};

// Preprocessing hook
pub use flagmodel_core::{IndexingPreprocessor, NoopPreprocessor, Preprocessor};

// Decoder
pub use flagmodel_wire::{
    AllData, DecodeError, DecodeOptions, Decoder, DecoderBuilder, EntityKind, MalformedKind,
};
