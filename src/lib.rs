//! # flagmodel
//!
//! Decoding of feature-flag and segment documents into a normalized model.
//!
//! The wire format distinguishes "field absent" from "field present with a
//! zero value" (an unset off-variation is not variation 0). The model this
//! crate produces has no nullable fields: every optional wire field is
//! resolved at the decode boundary to a reserved sentinel, a documented
//! default, or an empty container, and a preprocessing hook builds lookup
//! indices before the entity is returned.
//!
//! ## Quick Start
//!
//! ```
//! use flagmodel::prelude::*;
//!
//! let flag = decode_flag(br#"{
//!     "key": "flag1",
//!     "on": true,
//!     "offVariation": null,
//!     "fallthrough": {"variation": 0},
//!     "variations": [true, false],
//!     "version": 1
//! }"#)?;
//!
//! assert_eq!(flag.off_variation, NO_VARIATION);
//! assert_eq!(flag.fallthrough.variation, 0);
//! assert_eq!(flag.variation(0), Some(&Value::Bool(true)));
//! # Ok::<(), flagmodel::Error>(())
//! ```
//!
//! ## Layers
//!
//! - `flagmodel-core` - the model, collaborator types, preprocessing hook
//! - `flagmodel-wire` - wire representation, decoder, encoder

#![warn(missing_docs)]

mod error;
mod types;

pub mod prelude;

pub use error::{Error, Result};
pub use types::*;

/// Decode a flag document with the default decoder
pub fn decode_flag(data: &[u8]) -> Result<Flag> {
    flagmodel_wire::decode_flag(data).map_err(Error::from)
}

/// Decode a segment document with the default decoder
pub fn decode_segment(data: &[u8]) -> Result<Segment> {
    flagmodel_wire::decode_segment(data).map_err(Error::from)
}

/// Encode a flag as a wire document
pub fn encode_flag(flag: &Flag) -> Result<String> {
    flagmodel_wire::encode_flag(flag).map_err(Error::from)
}

/// Encode a segment as a wire document
pub fn encode_segment(segment: &Segment) -> Result<String> {
    flagmodel_wire::encode_segment(segment).map_err(Error::from)
}
