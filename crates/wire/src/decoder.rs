//! Decoder entry point
//!
//! A [`Decoder`] parses raw bytes into the wire representation, maps it to
//! the model, then runs the preprocessing hook once before handing the
//! entity back. It holds no mutable state and is safe to share across
//! threads.

use crate::json::rep::{AllDataRep, FlagRep, SegmentRep, VariationOrRolloutRep};
use crate::json::{flag_from_rep, parse, segment_from_rep, DecodeError, EntityKind};
use crate::options::DecodeOptions;
use flagmodel_core::{Flag, IndexingPreprocessor, NoopPreprocessor, Preprocessor, Segment};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

static DEFAULT_DECODER: Lazy<Decoder> = Lazy::new(Decoder::default);

/// Decode a flag document with the default decoder
///
/// # Example
///
/// ```
/// use flagmodel_wire::decode_flag;
///
/// let flag = decode_flag(br#"{"key":"flag1","on":true,"offVariation":null}"#).unwrap();
/// assert_eq!(flag.key, "flag1");
/// assert_eq!(flag.off_variation, -1);
/// ```
pub fn decode_flag(data: &[u8]) -> Result<Flag, DecodeError> {
    DEFAULT_DECODER.decode_flag(data)
}

/// Decode a segment document with the default decoder
pub fn decode_segment(data: &[u8]) -> Result<Segment, DecodeError> {
    DEFAULT_DECODER.decode_segment(data)
}

/// Every flag and segment in a full data set, keyed by entity key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllData {
    /// Flags by key
    pub flags: HashMap<String, Flag>,
    /// Segments by key
    pub segments: HashMap<String, Segment>,
}

/// Flag and segment decoder
///
/// # Example
///
/// ```
/// use flagmodel_wire::{DecodeOptions, Decoder};
///
/// let decoder = Decoder::builder()
///     .options(DecodeOptions::quiet())
///     .build();
/// let segment = decoder.decode_segment(br#"{"key":"beta","included":["alice"]}"#).unwrap();
/// assert!(segment.is_included("alice"));
/// ```
#[derive(Clone)]
pub struct Decoder {
    options: DecodeOptions,
    preprocessor: Arc<dyn Preprocessor>,
}

impl Decoder {
    /// Create a builder for decoder configuration
    pub fn builder() -> DecoderBuilder {
        DecoderBuilder::new()
    }

    /// Options in effect
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode a flag document
    ///
    /// Fails only when `data` is not a well-formed flag document; no partial
    /// flag is returned in that case.
    pub fn decode_flag(&self, data: &[u8]) -> Result<Flag, DecodeError> {
        let rep: FlagRep = parse(data, EntityKind::Flag).map_err(|e| {
            debug!(error = %e, "rejected flag document");
            e
        })?;
        Ok(self.finish_flag(rep))
    }

    /// Decode a segment document
    ///
    /// Fails only when `data` is not a well-formed segment document; no
    /// partial segment is returned in that case.
    pub fn decode_segment(&self, data: &[u8]) -> Result<Segment, DecodeError> {
        let rep: SegmentRep = parse(data, EntityKind::Segment).map_err(|e| {
            debug!(error = %e, "rejected segment document");
            e
        })?;
        Ok(self.finish_segment(rep))
    }

    /// Decode a full `{"flags": {..}, "segments": {..}}` data set
    ///
    /// Either map may be missing. One malformed entry rejects the whole set.
    pub fn decode_all(&self, data: &[u8]) -> Result<AllData, DecodeError> {
        let rep: AllDataRep = parse(data, EntityKind::AllData).map_err(|e| {
            debug!(error = %e, "rejected data set");
            e
        })?;
        let all = AllData {
            flags: rep
                .flags
                .into_iter()
                .map(|(key, flag)| (key, self.finish_flag(flag)))
                .collect(),
            segments: rep
                .segments
                .into_iter()
                .map(|(key, segment)| (key, self.finish_segment(segment)))
                .collect(),
        };
        debug!(
            flags = all.flags.len(),
            segments = all.segments.len(),
            "decoded data set"
        );
        Ok(all)
    }

    fn finish_flag(&self, rep: FlagRep) -> Flag {
        if self.options.warn_on_ambiguous_variation && !rep.deleted {
            warn_ambiguous_variations(&rep);
        }

        let mut flag = flag_from_rep(rep);
        if self.options.preprocess {
            self.preprocessor.preprocess_flag(&mut flag);
        }
        debug!(
            key = %flag.key,
            version = flag.version,
            rules = flag.rules.len(),
            "decoded flag"
        );
        flag
    }

    fn finish_segment(&self, rep: SegmentRep) -> Segment {
        let mut segment = segment_from_rep(rep);
        if self.options.preprocess {
            self.preprocessor.preprocess_segment(&mut segment);
        }
        debug!(
            key = %segment.key,
            version = segment.version,
            rules = segment.rules.len(),
            "decoded segment"
        );
        segment
    }
}

fn warn_ambiguous_variations(rep: &FlagRep) {
    if rep.fallthrough.is_ambiguous() {
        warn_ambiguous(&rep.key, "fallthrough", &rep.fallthrough);
    }
    for (i, rule) in rep.rules.iter().enumerate() {
        if rule.variation_or_rollout.is_ambiguous() {
            warn_ambiguous(&rep.key, &format!("rules[{i}]"), &rule.variation_or_rollout);
        }
    }
}

fn warn_ambiguous(flag_key: &str, position: &str, rep: &VariationOrRolloutRep) {
    warn!(
        flag = flag_key,
        position,
        has_variation = rep.variation.is_some(),
        has_rollout = rep.rollout.is_some(),
        "variation and rollout should be set exactly once; leaving to evaluation"
    );
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::builder().build()
    }
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Builder for decoder configuration
///
/// # Example
///
/// ```
/// use flagmodel_wire::Decoder;
///
/// // Indexing preprocessor, default options
/// let decoder = Decoder::builder().build();
///
/// // Raw decode, no hook
/// let raw = Decoder::builder().no_preprocessing().build();
/// assert!(!raw.options().preprocess);
/// ```
pub struct DecoderBuilder {
    options: DecodeOptions,
    preprocessor: Arc<dyn Preprocessor>,
}

impl DecoderBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        DecoderBuilder {
            options: DecodeOptions::default(),
            preprocessor: Arc::new(IndexingPreprocessor),
        }
    }

    /// Replace the decode options
    pub fn options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Use a custom preprocessing hook
    pub fn preprocessor(mut self, preprocessor: impl Preprocessor + 'static) -> Self {
        self.preprocessor = Arc::new(preprocessor);
        self
    }

    /// Skip preprocessing
    pub fn no_preprocessing(mut self) -> Self {
        self.options.preprocess = false;
        self.preprocessor = Arc::new(NoopPreprocessor);
        self
    }

    /// Build the decoder
    pub fn build(self) -> Decoder {
        Decoder {
            options: self.options,
            preprocessor: self.preprocessor,
        }
    }
}

impl Default for DecoderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
