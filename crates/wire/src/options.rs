//! Decoder options

/// Options controlling a [`Decoder`](crate::Decoder)
///
/// None of these change what a document decodes to, only whether the
/// preprocessing hook runs and what gets logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Warn when a rule or fallthrough sets both `variation` and `rollout`, or neither
    pub warn_on_ambiguous_variation: bool,
    /// Run the preprocessing hook after each decode
    pub preprocess: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            warn_on_ambiguous_variation: true,
            preprocess: true,
        }
    }
}

impl DecodeOptions {
    /// No ambiguity warnings
    pub fn quiet() -> Self {
        DecodeOptions {
            warn_on_ambiguous_variation: false,
            ..Default::default()
        }
    }

    /// Skip the preprocessing hook entirely
    ///
    /// For tooling that wants the entity exactly as the wire described it.
    pub fn raw() -> Self {
        DecodeOptions {
            preprocess: false,
            ..Default::default()
        }
    }
}
