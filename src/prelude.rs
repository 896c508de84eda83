//! Convenient imports for flagmodel.
//!
//! ```
//! use flagmodel::prelude::*;
//!
//! let segment = decode_segment(br#"{"key":"beta","rules":[{"id":"r1"}]}"#)?;
//! assert_eq!(segment.rules[0].weight, NO_WEIGHT);
//! # Ok::<(), flagmodel::Error>(())
//! ```

// Entry points
pub use crate::{decode_flag, decode_segment, encode_flag, encode_segment};
pub use crate::types::{DecodeOptions, Decoder};

// Error handling
pub use crate::error::{Error, Result};

// Model
pub use crate::types::{Flag, Segment, Value, VariationOrRollout};

// Sentinels
pub use crate::types::{NO_VARIATION, NO_WEIGHT};
