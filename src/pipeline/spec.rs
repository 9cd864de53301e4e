//! Summary specification types.
//!
//! A [`SummarySpec`] is the JSON document that picks a ranking method, the
//! summary length, stop words, selection options and per-method tunables.
//! It is the input to the [`super::validation::ValidationEngine`] and to
//! [`super::runner::SummaryPipeline::from_spec`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "method": "lex_rank",
//!   "length": "20%",
//!   "language": "en",
//!   "selector": { "rounding": "half_up", "min_words": 4 },
//!   "lex_rank": { "threshold": 0.1 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SummarizerError};
use crate::summarizer::SelectorConfig;
use crate::types::LengthSpec;
use crate::variants::{
    EdmundsonConfig, KlSumConfig, LexRankConfig, LsaConfig, LuhnConfig, SumBasicConfig, Variant,
};

/// The only spec version understood by this crate.
pub const SPEC_VERSION: u32 = 1;

/// Top-level summary specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Ranking method.
    #[serde(default)]
    pub method: Variant,

    /// Sentence count (`3`, `"3"`) or percentage (`"20%"`).
    #[serde(default)]
    pub length: LengthInput,

    /// Language of the built-in stop-word list.
    #[serde(default = "default_language")]
    pub language: String,

    /// Explicit stop words; replaces the built-in list when set.
    #[serde(default)]
    pub stop_words: Option<Vec<String>>,

    #[serde(default)]
    pub selector: SelectorConfig,

    // Per-method sections. Only the selected method's section is used.
    #[serde(default)]
    pub luhn: LuhnConfig,

    #[serde(default)]
    pub edmundson: EdmundsonConfig,

    #[serde(default)]
    pub lsa: LsaConfig,

    #[serde(default)]
    pub lex_rank: LexRankConfig,

    #[serde(default = "LexRankConfig::text_rank")]
    pub text_rank: LexRankConfig,

    #[serde(default)]
    pub sum_basic: SumBasicConfig,

    #[serde(default)]
    pub kl_sum: KlSumConfig,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

fn default_language() -> String {
    "en".to_string()
}

impl SummarySpec {
    /// A v1 spec for `method` with every other field at its default.
    pub fn new(method: Variant) -> Self {
        Self {
            v: SPEC_VERSION,
            method,
            length: LengthInput::default(),
            language: default_language(),
            stop_words: None,
            selector: SelectorConfig::default(),
            luhn: LuhnConfig::default(),
            edmundson: EdmundsonConfig::default(),
            lsa: LsaConfig::default(),
            lex_rank: LexRankConfig::default(),
            text_rank: LexRankConfig::text_rank(),
            sum_basic: SumBasicConfig::default(),
            kl_sum: KlSumConfig::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }

    /// Parse a spec from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SummarizerError::InvalidSpec(e.to_string()))
    }

    pub fn with_length(mut self, length: LengthSpec) -> Self {
        self.length = LengthInput::from(length);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_stop_words<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.stop_words = Some(words.iter().map(|w| w.as_ref().to_string()).collect());
        self
    }

    pub fn with_selector(mut self, selector: SelectorConfig) -> Self {
        self.selector = selector;
        self
    }

    /// JSON pointer of the selected method's config section.
    pub fn method_section(&self) -> &'static str {
        match self.method {
            Variant::Luhn => "/luhn",
            Variant::Edmundson => "/edmundson",
            Variant::Lsa => "/lsa",
            Variant::LexRank => "/lex_rank",
            Variant::TextRank => "/text_rank",
            Variant::SumBasic => "/sum_basic",
            Variant::KlSum => "/kl_sum",
            Variant::Lead => "/lead",
        }
    }

    /// Validate the selected method's config section.
    ///
    /// KL-Sum and the lead baseline have no range-checked tunables.
    pub fn validate_method(&self) -> Result<()> {
        match self.method {
            Variant::Luhn => self.luhn.validate(),
            Variant::Edmundson => self.edmundson.validate(),
            Variant::Lsa => self.lsa.validate(),
            Variant::LexRank => self.lex_rank.validate(),
            Variant::TextRank => self.text_rank.validate(),
            Variant::SumBasic => self.sum_basic.validate(),
            Variant::KlSum | Variant::Lead => Ok(()),
        }
    }
}

/// Summary length as written in JSON: a bare integer or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LengthInput {
    Count(i64),
    Text(String),
}

impl Default for LengthInput {
    fn default() -> Self {
        LengthInput::Text("20%".to_string())
    }
}

impl LengthInput {
    /// Resolve to a validated [`LengthSpec`].
    pub fn to_length_spec(&self) -> Result<LengthSpec> {
        match self {
            LengthInput::Count(n) if *n <= 0 => Err(SummarizerError::invalid_length(format!(
                "sentence count must be greater than 0, got {n}"
            ))),
            LengthInput::Count(n) => Ok(LengthSpec::Sentences(*n as usize)),
            LengthInput::Text(text) => text.parse(),
        }
    }
}

impl From<LengthSpec> for LengthInput {
    fn from(length: LengthSpec) -> Self {
        match length {
            LengthSpec::Sentences(n) => LengthInput::Count(n as i64),
            LengthSpec::Percent(_) => LengthInput::Text(length.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rounding;
    use crate::variants::lex_rank::Similarity;
    use crate::variants::Divergence;

    #[test]
    fn test_deserialize_minimal_spec() {
        let spec: SummarySpec = serde_json::from_str(r#"{ "v": 1 }"#).unwrap();
        assert_eq!(spec.v, 1);
        assert_eq!(spec.method, Variant::LexRank);
        assert_eq!(spec.length, LengthInput::Text("20%".into()));
        assert_eq!(spec.language, "en");
        assert_eq!(spec.text_rank.similarity, Similarity::Overlap);
        assert!(!spec.strict);
    }

    #[test]
    fn test_deserialize_full_spec() {
        let json = r#"{
            "v": 1,
            "method": "sum_basic",
            "length": 3,
            "language": "de",
            "stop_words": ["und", "der"],
            "selector": { "rounding": "ceil", "min_words": 4 },
            "sum_basic": { "decay": "square" },
            "strict": true
        }"#;
        let spec: SummarySpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.method, Variant::SumBasic);
        assert_eq!(spec.length, LengthInput::Count(3));
        assert_eq!(spec.stop_words.as_deref().map(|w| w.len()), Some(2));
        assert_eq!(spec.selector.rounding, Rounding::Ceil);
        assert_eq!(spec.selector.min_words, Some(4));
        assert_eq!(spec.sum_basic.decay, crate::variants::sum_basic::Decay::Square);
        assert!(spec.strict);
        assert!(spec.unknown_fields.is_empty());
    }

    #[test]
    fn test_unknown_fields_captured() {
        let spec: SummarySpec =
            serde_json::from_str(r#"{ "v": 1, "bogus_top_level": 42 }"#).unwrap();
        assert!(spec.unknown_fields.contains_key("bogus_top_level"));
    }

    #[test]
    fn test_length_input() {
        assert_eq!(
            LengthInput::Count(4).to_length_spec().unwrap(),
            LengthSpec::Sentences(4)
        );
        assert_eq!(
            LengthInput::Text("50%".into()).to_length_spec().unwrap(),
            LengthSpec::Percent(50.0)
        );
        assert_eq!(
            LengthInput::Text("7".into()).to_length_spec().unwrap(),
            LengthSpec::Sentences(7)
        );
        assert!(LengthInput::Count(0).to_length_spec().is_err());
        assert!(LengthInput::Count(-2).to_length_spec().is_err());
        assert!(LengthInput::Text("lots".into()).to_length_spec().is_err());
    }

    #[test]
    fn test_builder_round_trip() {
        let spec = SummarySpec::new(Variant::Lsa)
            .with_length(LengthSpec::Percent(30.0))
            .with_stop_words(&["the"]);
        let json = serde_json::to_string(&spec).unwrap();
        let back = SummarySpec::from_json(&json).unwrap();

        assert_eq!(back.method, Variant::Lsa);
        assert_eq!(back.length.to_length_spec().unwrap(), LengthSpec::Percent(30.0));
        assert_eq!(back.stop_words, Some(vec!["the".to_string()]));
    }

    #[test]
    fn test_method_section_validation() {
        let mut spec = SummarySpec::new(Variant::Lsa);
        spec.lsa.min_topics = 0;
        assert!(spec.validate_method().is_err());

        spec.method = Variant::KlSum;
        assert!(spec.validate_method().is_ok());
        assert_eq!(spec.method_section(), "/kl_sum");

        spec.method = Variant::Lead;
        assert!(spec.validate_method().is_ok());
        assert_eq!(spec.method_section(), "/lead");
    }

    #[test]
    fn test_kl_sum_section() {
        let spec = SummarySpec::from_json(
            r#"{ "v": 1, "method": "kl_sum", "kl_sum": { "divergence": "jensen_shannon" } }"#,
        )
        .unwrap();
        assert_eq!(spec.kl_sum.divergence, Divergence::JensenShannon);
        assert!(spec.unknown_fields.is_empty());

        let spec = SummarySpec::new(Variant::KlSum);
        assert_eq!(spec.kl_sum.divergence, Divergence::KullbackLeibler);
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        let err = SummarySpec::from_json(r#"{ "method": "lsa" }"#).unwrap_err();
        assert!(matches!(err, SummarizerError::InvalidSpec(_)));
    }
}
