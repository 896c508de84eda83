//! Decode errors
//!
//! Decoding has one failure mode: the input does not parse as the expected
//! wire schema. Once parsing succeeds, mapping to the domain model cannot
//! fail. The error carries enough context (entity, position, category) for a
//! caller to log it and decide whether to drop the update.

use serde_json::error::Category;
use std::fmt;
use thiserror::Error;

/// Which document was being decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A single flag document
    Flag,
    /// A single segment document
    Segment,
    /// A full `{flags, segments}` data set
    AllData,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Flag => "flag",
            EntityKind::Segment => "segment",
            EntityKind::AllData => "data set",
        })
    }
}

/// Why the input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MalformedKind {
    /// Not valid JSON
    Syntax,
    /// Valid JSON of the wrong shape (e.g. a string where an object belongs)
    Structure,
    /// Input ended mid-document
    Truncated,
}

impl MalformedKind {
    fn from_category(category: Category) -> Self {
        match category {
            Category::Eof => MalformedKind::Truncated,
            Category::Data => MalformedKind::Structure,
            Category::Syntax | Category::Io => MalformedKind::Syntax,
        }
    }
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MalformedKind::Syntax => "syntax",
            MalformedKind::Structure => "structure",
            MalformedKind::Truncated => "truncated",
        })
    }
}

/// Decode error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Input did not parse as the wire schema
    #[error("malformed {entity} ({kind}): {message}")]
    MalformedInput {
        /// Document being decoded
        entity: EntityKind,
        /// Failure category
        kind: MalformedKind,
        /// Parser message, including the position when there is one
        message: String,
        /// 1-based line of the failure, 0 for shape errors
        line: usize,
        /// 1-based column of the failure, 0 for shape errors
        column: usize,
    },
}

impl DecodeError {
    pub(crate) fn malformed(entity: EntityKind, err: &serde_json::Error) -> Self {
        DecodeError::MalformedInput {
            entity,
            kind: MalformedKind::from_category(err.classify()),
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }

    /// Document being decoded when the error occurred
    pub fn entity(&self) -> EntityKind {
        match self {
            DecodeError::MalformedInput { entity, .. } => *entity,
        }
    }

    /// Failure category
    pub fn kind(&self) -> MalformedKind {
        match self {
            DecodeError::MalformedInput { kind, .. } => *kind,
        }
    }

    /// 1-based line of the failure
    ///
    /// Zero when the input was valid JSON of the wrong shape.
    pub fn line(&self) -> usize {
        match self {
            DecodeError::MalformedInput { line, .. } => *line,
        }
    }

    /// 1-based column of the failure
    pub fn column(&self) -> usize {
        match self {
            DecodeError::MalformedInput { column, .. } => *column,
        }
    }
}
