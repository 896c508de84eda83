//! Core types shared by the flag and segment model
//!
//! This module defines the small value types the model is built from:
//! - [`AttrRef`]: reference to a context attribute
//! - [`Operator`]: clause comparison operator
//! - [`UnixMillis`]: millisecond timestamp
//! - [`NO_VARIATION`]: sentinel for "no variation specified"

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// Variation index meaning "no variation specified"
///
/// Legitimate variation indices are always `>= 0`, so this value never
/// collides with a real index.
pub const NO_VARIATION: i64 = -1;

/// Segment rule weight meaning "no explicit weight"
pub const NO_WEIGHT: i64 = -1;

/// Reference to a context attribute
///
/// Used by clauses (the attribute to compare) and by rollouts and segment
/// rules (the attribute to bucket by). The default is the canonical `key`
/// attribute.
///
/// # Examples
///
/// ```
/// use flagmodel_core::AttrRef;
///
/// assert_eq!(AttrRef::default(), AttrRef::key());
/// assert_eq!(AttrRef::new("email").as_str(), "email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttrRef(String);

impl AttrRef {
    const BUILTINS: [&'static str; 10] = [
        "key",
        "secondary",
        "ip",
        "country",
        "email",
        "firstName",
        "lastName",
        "avatar",
        "name",
        "anonymous",
    ];

    /// Create a reference to a named attribute
    pub fn new(name: impl Into<String>) -> Self {
        AttrRef(name.into())
    }

    /// The canonical `key` attribute
    pub fn key() -> Self {
        AttrRef::new("key")
    }

    /// The built-in `email` attribute
    pub fn email() -> Self {
        AttrRef::new("email")
    }

    /// The built-in `country` attribute
    pub fn country() -> Self {
        AttrRef::new("country")
    }

    /// The built-in `name` attribute
    pub fn name() -> Self {
        AttrRef::new("name")
    }

    /// Attribute name as it appears on the wire
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this refers to the canonical `key` attribute
    pub fn is_key(&self) -> bool {
        self.0 == "key"
    }

    /// Check if this is one of the built-in attributes rather than a custom one
    pub fn is_builtin(&self) -> bool {
        Self::BUILTINS.contains(&self.0.as_str())
    }
}

impl Default for AttrRef {
    fn default() -> Self {
        AttrRef::key()
    }
}

impl fmt::Display for AttrRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AttrRef {
    fn from(s: &str) -> Self {
        AttrRef::new(s)
    }
}

impl Serialize for AttrRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AttrRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(AttrRef)
    }
}

/// Clause comparison operator
///
/// Operator strings are not validated at decode time: a name this crate does
/// not know decodes to [`Operator::Unknown`] and is left for the evaluation
/// engine to treat as a non-match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `in`: attribute equals one of the values
    In,
    /// `endsWith`
    EndsWith,
    /// `startsWith`
    StartsWith,
    /// `matches`: regular expression match
    Matches,
    /// `contains`
    Contains,
    /// `lessThan`
    LessThan,
    /// `lessThanOrEqual`
    LessThanOrEqual,
    /// `greaterThan`
    GreaterThan,
    /// `greaterThanOrEqual`
    GreaterThanOrEqual,
    /// `before`: date comparison
    Before,
    /// `after`: date comparison
    After,
    /// `segmentMatch`: values are segment keys
    SegmentMatch,
    /// `semVerEqual`
    SemVerEqual,
    /// `semVerLessThan`
    SemVerLessThan,
    /// `semVerGreaterThan`
    SemVerGreaterThan,
    /// Operator name not recognized by this crate
    Unknown(String),
}

impl Operator {
    /// Parse from the wire name; never fails
    pub fn from_wire_name(name: &str) -> Self {
        match name {
            "in" => Operator::In,
            "endsWith" => Operator::EndsWith,
            "startsWith" => Operator::StartsWith,
            "matches" => Operator::Matches,
            "contains" => Operator::Contains,
            "lessThan" => Operator::LessThan,
            "lessThanOrEqual" => Operator::LessThanOrEqual,
            "greaterThan" => Operator::GreaterThan,
            "greaterThanOrEqual" => Operator::GreaterThanOrEqual,
            "before" => Operator::Before,
            "after" => Operator::After,
            "segmentMatch" => Operator::SegmentMatch,
            "semVerEqual" => Operator::SemVerEqual,
            "semVerLessThan" => Operator::SemVerLessThan,
            "semVerGreaterThan" => Operator::SemVerGreaterThan,
            other => Operator::Unknown(other.to_string()),
        }
    }

    /// Wire name of this operator
    pub fn wire_name(&self) -> &str {
        match self {
            Operator::In => "in",
            Operator::EndsWith => "endsWith",
            Operator::StartsWith => "startsWith",
            Operator::Matches => "matches",
            Operator::Contains => "contains",
            Operator::LessThan => "lessThan",
            Operator::LessThanOrEqual => "lessThanOrEqual",
            Operator::GreaterThan => "greaterThan",
            Operator::GreaterThanOrEqual => "greaterThanOrEqual",
            Operator::Before => "before",
            Operator::After => "after",
            Operator::SegmentMatch => "segmentMatch",
            Operator::SemVerEqual => "semVerEqual",
            Operator::SemVerLessThan => "semVerLessThan",
            Operator::SemVerGreaterThan => "semVerGreaterThan",
            Operator::Unknown(name) => name,
        }
    }

    /// Whether clause values for this operator are matched by exact lookup
    ///
    /// These are the operators whose values the indexing preprocessor
    /// turns into a hash set.
    pub fn is_exact_match(&self) -> bool {
        matches!(self, Operator::In | Operator::SegmentMatch)
    }
}

impl Default for Operator {
    fn default() -> Self {
        Operator::Unknown(String::new())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Operator::from_wire_name(&name))
    }
}

/// Timestamp in milliseconds since the Unix epoch
///
/// Zero means "not set".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnixMillis(pub u64);

impl UnixMillis {
    /// Raw millisecond count
    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Check if the timestamp is set (non-zero)
    pub fn is_set(&self) -> bool {
        self.0 != 0
    }
}

impl Serialize for UnixMillis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for UnixMillis {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(UnixMillis)
    }
}
