//! JSON wire format for flag and segment documents
//!
//! - [`rep`]: wire representation, one struct per schema object
//! - `decode`: total mapping from wire representation to model
//! - `encode`: mapping back, with sentinels restored to wire absence
//! - `error`: the malformed-input error

mod decode;
mod encode;
mod error;
pub mod rep;

pub(crate) use decode::parse;
pub use decode::{
    decode_clauses, decode_variation_or_rollout, flag_from_rep, resolve_variation,
    resolve_weight, segment_from_rep,
};
pub use encode::{encode_flag, encode_segment};
pub use error::{DecodeError, EntityKind, MalformedKind};
