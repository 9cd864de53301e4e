//! Pipeline runner: builds a ranker and selector and executes them in order.
//!
//! [`SummaryPipeline`] holds a runtime-selected [`Ranker`], the term
//! normalizer for the run and a configured [`SentenceSelector`]. Calling
//! [`SummaryPipeline::run`] rates the document, then selects the summary.
//!
//! # Construction
//!
//! Use [`SummaryPipeline::from_spec`] (or [`SummaryPipeline::from_json`]) to
//! build a validated pipeline from a [`SummarySpec`], or
//! [`SummaryPipeline::new`] to wire a custom ranker directly.

use std::sync::Arc;

use crate::errors::{Result, SummarizerError};
use crate::nlp::{Stemmer, StopwordFilter};
use crate::pipeline::spec::SummarySpec;
use crate::pipeline::traits::{LeadRanker, Ranker};
use crate::pipeline::validation::{ValidationEngine, ValidationReport};
use crate::stats::TermNormalizer;
use crate::summarizer::{SentenceSelector, SummaryResult};
use crate::types::{Document, LengthSpec, Rating};
use crate::variants::{Edmundson, KlSum, LexRank, Lsa, Luhn, SumBasic, Variant};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Stage names reported in tracing spans.
pub const STAGE_RATE: &str = "rate";
pub const STAGE_SELECT: &str = "select";

// ============================================================================
// Ranker factory
// ============================================================================

/// Instantiate the ranker the spec selects, configured from its section.
pub fn build_ranker(spec: &SummarySpec) -> Box<dyn Ranker> {
    match spec.method {
        Variant::Luhn => Box::new(Luhn::with_config(spec.luhn.clone())),
        Variant::Edmundson => Box::new(Edmundson::with_config(spec.edmundson.clone())),
        Variant::Lsa => Box::new(Lsa::with_config(spec.lsa.clone())),
        Variant::LexRank => Box::new(LexRank::with_config(spec.lex_rank.clone())),
        Variant::TextRank => Box::new(LexRank::with_config(spec.text_rank.clone())),
        Variant::SumBasic => Box::new(SumBasic::with_config(spec.sum_basic.clone())),
        Variant::KlSum => Box::new(KlSum::with_config(spec.kl_sum)),
        Variant::Lead => Box::new(LeadRanker),
    }
}

// ============================================================================
// SummaryPipeline
// ============================================================================

/// A ready-to-run summarizer: ranker + normalizer + selector + length.
pub struct SummaryPipeline {
    ranker: Box<dyn Ranker>,
    normalizer: TermNormalizer,
    selector: SentenceSelector,
    length: LengthSpec,
}

impl std::fmt::Debug for SummaryPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryPipeline")
            .field("ranker", &self.ranker.name())
            .field("normalizer", &self.normalizer)
            .field("selector", &self.selector)
            .field("length", &self.length)
            .finish()
    }
}

impl SummaryPipeline {
    /// Wire a pipeline from parts, with the default selector.
    pub fn new(ranker: Box<dyn Ranker>, normalizer: TermNormalizer, length: LengthSpec) -> Self {
        Self {
            ranker,
            normalizer,
            selector: SentenceSelector::new(),
            length,
        }
    }

    /// Build a pipeline from a spec.
    ///
    /// The spec is validated first; any error-severity diagnostic aborts
    /// construction with [`SummarizerError::InvalidSpec`]. Warnings are
    /// logged and otherwise ignored.
    pub fn from_spec(spec: &SummarySpec) -> Result<Self> {
        let report = ValidationEngine::with_defaults().validate(spec);
        Self::check_report(&report)?;

        let length = spec.length.to_length_spec()?;
        let stopwords = match &spec.stop_words {
            Some(words) => StopwordFilter::from_list(words.as_slice()),
            None => StopwordFilter::new(&spec.language),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            method = spec.method.as_str(),
            %length,
            stopwords = stopwords.len(),
            "pipeline built from spec"
        );

        Ok(Self {
            ranker: build_ranker(spec),
            normalizer: TermNormalizer::new(stopwords),
            selector: SentenceSelector::with_config(spec.selector.clone()),
            length,
        })
    }

    /// Parse, validate and build a pipeline from a JSON spec.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_spec(&SummarySpec::from_json(json)?)
    }

    fn check_report(report: &ValidationReport) -> Result<()> {
        #[cfg(feature = "tracing")]
        for warning in report.warnings() {
            tracing::warn!(code = %warning.code, path = %warning.path, "{}", warning.message);
        }

        if report.has_errors() {
            return Err(SummarizerError::InvalidSpec(report.error_summary()));
        }
        Ok(())
    }

    /// Replace the selector.
    pub fn with_selector(mut self, selector: SentenceSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Use `stemmer` when normalizing terms.
    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.normalizer = std::mem::take(&mut self.normalizer).with_shared_stemmer(stemmer);
        self
    }

    /// Change the requested summary length.
    pub fn with_length(mut self, length: LengthSpec) -> Self {
        self.length = length;
        self
    }

    pub fn ranker(&self) -> &dyn Ranker {
        self.ranker.as_ref()
    }

    pub fn normalizer(&self) -> &TermNormalizer {
        &self.normalizer
    }

    pub fn length(&self) -> LengthSpec {
        self.length
    }

    /// Rate every body sentence without selecting.
    pub fn rate(&self, document: &Document) -> Result<Rating> {
        trace_stage!(STAGE_RATE);
        self.ranker.rate(document, &self.normalizer)
    }

    /// Summarize `document`: rate, then select.
    ///
    /// Selected sentences come back in document order with their scores.
    pub fn run<'a>(&self, document: &'a Document) -> Result<SummaryResult<'a>> {
        self.length.validate()?;

        let rating = self.rate(document)?;

        let result = {
            trace_stage!(STAGE_SELECT);
            self.selector.select_scored(&rating, document, self.length)?
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            ranker = self.ranker.name(),
            sentences = result.total,
            requested = result.requested,
            selected = result.len(),
            "summary complete"
        );

        Ok(result)
    }
}
