//! Unified error type for flagmodel.
//!
//! Wraps the wire crate's errors in a small, stable enum.

use flagmodel_wire::DecodeError;
use thiserror::Error;

/// All flagmodel errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Input did not parse as the expected document
    #[error("malformed input: {0}")]
    MalformedInput(#[from] DecodeError),

    /// Encoding failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for flagmodel operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a malformed-input error.
    ///
    /// The caller decides whether to drop the update, log it, or treat it
    /// as fatal; nothing here retries.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedInput(_))
    }

    /// The underlying decode error, if any.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            Error::MalformedInput(e) => Some(e),
            Error::Serialization(_) => None,
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
