//! Feature flag model

use super::clause::Clause;
use super::rollout::VariationOrRollout;
use crate::types::{UnixMillis, NO_VARIATION};
use crate::value::Value;
use rustc_hash::FxHashSet;

/// A feature flag
///
/// Every optional wire field has been resolved: `off_variation` is
/// [`NO_VARIATION`] when the document had none, and all lists are empty
/// rather than missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    /// Flag key
    pub key: String,
    /// Targeting enabled
    pub on: bool,
    /// Document version
    pub version: i64,
    /// Tombstone marker
    pub deleted: bool,
    /// Flags that must evaluate to a given variation first
    pub prerequisites: Vec<Prerequisite>,
    /// Individual context targets
    pub targets: Vec<Target>,
    /// Targeting rules, in evaluation order
    pub rules: Vec<FlagRule>,
    /// Outcome when no target or rule matches
    pub fallthrough: VariationOrRollout,
    /// Variation served when the flag is off, or [`NO_VARIATION`]
    pub off_variation: i64,
    /// Variation values
    pub variations: Vec<Value>,
    /// Visible to client-side SDKs
    pub client_side: bool,
    /// Bucketing salt
    pub salt: String,
    /// Send full events for every evaluation
    pub track_events: bool,
    /// Send full events for fallthrough evaluations
    pub track_events_fallthrough: bool,
    /// Debug events are sent until this time
    pub debug_events_until_date: UnixMillis,
}

impl Default for Flag {
    fn default() -> Self {
        Flag {
            key: String::new(),
            on: false,
            version: 0,
            deleted: false,
            prerequisites: Vec::new(),
            targets: Vec::new(),
            rules: Vec::new(),
            fallthrough: VariationOrRollout::default(),
            off_variation: NO_VARIATION,
            variations: Vec::new(),
            client_side: false,
            salt: String::new(),
            track_events: false,
            track_events_fallthrough: false,
            debug_events_until_date: UnixMillis::default(),
        }
    }
}

impl Flag {
    /// Value of the variation at `index`
    ///
    /// Out-of-range and sentinel indices return `None`; decode does not check
    /// indices against the variation list.
    pub fn variation(&self, index: i64) -> Option<&Value> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.variations.get(i))
    }

    /// Value served when the flag is off, if any
    pub fn off_value(&self) -> Option<&Value> {
        self.variation(self.off_variation)
    }

    /// Target list entry whose keys contain `context_key`
    pub fn target_for(&self, context_key: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.contains(context_key))
    }
}

/// Prerequisite flag reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Prerequisite {
    /// Key of the prerequisite flag
    pub key: String,
    /// Variation the prerequisite must yield
    pub variation: i64,
}

/// Individual targeting list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    /// Targeted context keys
    pub values: Vec<String>,
    /// Variation served to them
    pub variation: i64,
    /// Lookup index filled in by preprocessing
    pub index: TargetIndex,
}

/// Preprocessing bookkeeping for a target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetIndex {
    /// Set of `values`
    pub keys: FxHashSet<String>,
}

impl Target {
    /// Check whether `context_key` is targeted
    pub fn contains(&self, context_key: &str) -> bool {
        if self.index.keys.is_empty() {
            self.values.iter().any(|v| v == context_key)
        } else {
            self.index.keys.contains(context_key)
        }
    }
}

/// Targeting rule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagRule {
    /// Outcome when the rule matches
    pub variation_or_rollout: VariationOrRollout,
    /// Rule id
    pub id: String,
    /// Clauses, all of which must match
    pub clauses: Vec<Clause>,
    /// Send full events when this rule matches
    pub track_events: bool,
}
