//! Wire decoding for flagmodel
//!
//! This crate turns flag and segment JSON documents into the normalized
//! model of `flagmodel-core`, and back.
//!
//! ## Sentinel Resolution
//!
//! | Wire field | Absent / `null` decodes to |
//! |------------|----------------------------|
//! | `offVariation` | `NO_VARIATION` (-1) |
//! | rule / fallthrough `variation` | `NO_VARIATION` (-1) |
//! | rule / fallthrough `rollout` | empty rollout, `key` bucket |
//! | segment rule `weight` | `NO_WEIGHT` (-1) |
//! | segment rule `bucketBy` | `key` attribute |
//! | any list | empty list |
//!
//! ## Examples
//!
//! ```
//! use flagmodel_wire::{decode_flag, encode_flag};
//!
//! let flag = decode_flag(br#"{"key":"f","fallthrough":{"variation":0},"variations":[true,false]}"#)
//!     .unwrap();
//! assert_eq!(flag.fallthrough.variation, 0);
//! assert_eq!(flag.off_variation, -1);
//!
//! let json = encode_flag(&flag).unwrap();
//! assert!(json.contains(r#""offVariation":null"#));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod decoder;
pub mod json;
mod options;

pub use decoder::{decode_flag, decode_segment, AllData, Decoder, DecoderBuilder};
pub use json::{
    decode_clauses, decode_variation_or_rollout, encode_flag, encode_segment, flag_from_rep,
    resolve_variation, resolve_weight, segment_from_rep, DecodeError, EntityKind, MalformedKind,
};
pub use options::DecodeOptions;
