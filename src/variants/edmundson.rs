//! Edmundson heuristic ranker
//!
//! Weighted sum of four per-sentence features:
//!
//! - **cue**: bonus words add, stigma words subtract
//! - **title**: content words shared with the title
//! - **location**: bonuses for sentences at paragraph and document boundaries
//! - **frequency**: raw or TF-IDF weight of the sentence's terms
//!
//! A feature with weight 0 is not computed.

use crate::errors::{Result, SummarizerError};
use crate::pipeline::traits::Ranker;
use crate::stats::{TermDocumentMatrix, TermFrequencies, TermNormalizer, Weighting};
use crate::types::{Document, Rating};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Term weighting used by the frequency feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyFeature {
    /// Sum of `count / max_count` over the sentence's content words
    #[default]
    Raw,
    /// Sum of the sentence's TF-IDF column
    TfIdf,
}

/// Bonuses of the location feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationBonus {
    /// Sentences of the first paragraph
    pub first_paragraph: f64,
    /// Sentences of the last paragraph
    pub last_paragraph: f64,
    /// Leading sentences of every paragraph
    pub first_sentences: f64,
    /// Trailing sentences of every paragraph
    pub last_sentences: f64,
    /// How many leading / trailing sentences of a paragraph get the bonus
    pub boundary_sentences: usize,
}

impl Default for LocationBonus {
    fn default() -> Self {
        Self {
            first_paragraph: 1.0,
            last_paragraph: 1.0,
            first_sentences: 1.0,
            last_sentences: 1.0,
            boundary_sentences: 1,
        }
    }
}

/// Edmundson tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdmundsonConfig {
    /// Weight of the cue feature
    pub cue_weight: f64,
    /// Weight of the title feature
    pub title_weight: f64,
    /// Weight of the location feature
    pub location_weight: f64,
    /// Weight of the frequency feature
    pub frequency_weight: f64,
    /// Words that make a sentence more relevant (required when `cue_weight > 0`)
    pub bonus_words: Option<Vec<String>>,
    /// Words that make a sentence less relevant (required when `cue_weight > 0`)
    pub stigma_words: Option<Vec<String>>,
    /// Score of one bonus word
    pub bonus_value: f64,
    /// Penalty of one stigma word
    pub stigma_value: f64,
    /// Title words; the document headings are used when absent
    pub title_words: Option<Vec<String>>,
    /// Location bonuses
    pub location: LocationBonus,
    /// Frequency feature weighting
    pub frequency: FrequencyFeature,
}

impl Default for EdmundsonConfig {
    fn default() -> Self {
        Self {
            cue_weight: 1.0,
            title_weight: 1.0,
            location_weight: 1.0,
            frequency_weight: 1.0,
            bonus_words: None,
            stigma_words: None,
            bonus_value: 1.0,
            stigma_value: 1.0,
            title_words: None,
            location: LocationBonus::default(),
            frequency: FrequencyFeature::Raw,
        }
    }
}

impl EdmundsonConfig {
    /// Set the four feature weights (cue, title, location, frequency)
    pub fn with_weights(mut self, cue: f64, title: f64, location: f64, frequency: f64) -> Self {
        self.cue_weight = cue;
        self.title_weight = title;
        self.location_weight = location;
        self.frequency_weight = frequency;
        self
    }

    /// Set the bonus and stigma cue words
    pub fn with_cue_words<S: AsRef<str>>(mut self, bonus: &[S], stigma: &[S]) -> Self {
        self.bonus_words = Some(bonus.iter().map(|w| w.as_ref().to_string()).collect());
        self.stigma_words = Some(stigma.iter().map(|w| w.as_ref().to_string()).collect());
        self
    }

    /// Set explicit title words
    pub fn with_title_words<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.title_words = Some(words.iter().map(|w| w.as_ref().to_string()).collect());
        self
    }

    /// Set the location bonuses
    pub fn with_location(mut self, location: LocationBonus) -> Self {
        self.location = location;
        self
    }

    /// Set the frequency feature weighting
    pub fn with_frequency(mut self, frequency: FrequencyFeature) -> Self {
        self.frequency = frequency;
        self
    }

    /// Validate configuration
    ///
    /// Numeric ranges are checked first, then the cue-word lists.
    pub fn validate(&self) -> Result<()> {
        let numbers = [
            ("cue_weight", self.cue_weight),
            ("title_weight", self.title_weight),
            ("location_weight", self.location_weight),
            ("frequency_weight", self.frequency_weight),
            ("bonus_value", self.bonus_value),
            ("stigma_value", self.stigma_value),
            ("location.first_paragraph", self.location.first_paragraph),
            ("location.last_paragraph", self.location.last_paragraph),
            ("location.first_sentences", self.location.first_sentences),
            ("location.last_sentences", self.location.last_sentences),
        ];
        for (name, value) in numbers {
            if !value.is_finite() || value < 0.0 {
                return Err(SummarizerError::invalid_config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        if self.cue_weight > 0.0 {
            if self.bonus_words.is_none() {
                return Err(SummarizerError::MissingCueWords("bonus"));
            }
            if self.stigma_words.is_none() {
                return Err(SummarizerError::MissingCueWords("stigma"));
            }
        }

        Ok(())
    }
}

/// Edmundson ranker
#[derive(Debug, Clone, Default)]
pub struct Edmundson {
    config: EdmundsonConfig,
}

impl Edmundson {
    /// Create an Edmundson ranker with default config
    ///
    /// The default config weights the cue feature, so cue words must be set
    /// before rating.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: EdmundsonConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &EdmundsonConfig {
        &self.config
    }

    fn stemmed_set(words: &[String], normalizer: &TermNormalizer) -> FxHashSet<String> {
        words.iter().filter_map(|w| normalizer.stem(w)).collect()
    }

    /// Cue feature for every sentence
    fn cue_scores(&self, document: &Document, normalizer: &TermNormalizer) -> Vec<f64> {
        let empty = Vec::new();
        let bonus = Self::stemmed_set(self.config.bonus_words.as_ref().unwrap_or(&empty), normalizer);
        let stigma =
            Self::stemmed_set(self.config.stigma_words.as_ref().unwrap_or(&empty), normalizer);

        document
            .sentences()
            .into_iter()
            .map(|sentence| {
                let (mut bonus_hits, mut stigma_hits) = (0usize, 0usize);
                for stem in sentence.words().iter().filter_map(|w| normalizer.stem(w)) {
                    if bonus.contains(&stem) {
                        bonus_hits += 1;
                    }
                    if stigma.contains(&stem) {
                        stigma_hits += 1;
                    }
                }
                self.config.bonus_value * bonus_hits as f64
                    - self.config.stigma_value * stigma_hits as f64
            })
            .collect()
    }

    /// Title feature for every sentence
    fn title_scores(&self, document: &Document, normalizer: &TermNormalizer) -> Vec<f64> {
        let title: FxHashSet<String> = match &self.config.title_words {
            Some(words) => words.iter().filter_map(|w| normalizer.normalize(w)).collect(),
            None => document
                .headings()
                .into_iter()
                .flat_map(|h| normalizer.content_terms(h))
                .collect(),
        };

        document
            .sentences()
            .into_iter()
            .map(|sentence| {
                normalizer
                    .content_terms(sentence)
                    .iter()
                    .filter(|t| title.contains(*t))
                    .count() as f64
            })
            .collect()
    }

    /// Location feature for every sentence
    fn location_scores(&self, document: &Document) -> Vec<f64> {
        let bonus = &self.config.location;
        let paragraphs: Vec<_> = document
            .paragraphs()
            .iter()
            .filter(|p| !p.is_empty())
            .collect();
        let last_paragraph = paragraphs.len().saturating_sub(1);

        let mut scores = Vec::with_capacity(document.num_sentences());
        for (p, paragraph) in paragraphs.iter().enumerate() {
            let len = paragraph.len();
            for (i, _) in paragraph.sentences().enumerate() {
                let mut score = 0.0;
                if p == 0 {
                    score += bonus.first_paragraph;
                }
                if p == last_paragraph {
                    score += bonus.last_paragraph;
                }
                if i < bonus.boundary_sentences {
                    score += bonus.first_sentences;
                }
                if i + bonus.boundary_sentences >= len {
                    score += bonus.last_sentences;
                }
                scores.push(score);
            }
        }
        scores
    }

    /// Frequency feature for every sentence
    fn frequency_scores(&self, document: &Document, normalizer: &TermNormalizer) -> Vec<f64> {
        match self.config.frequency {
            FrequencyFeature::Raw => {
                let frequencies = TermFrequencies::from_document(document, normalizer);
                document
                    .sentences()
                    .into_iter()
                    .map(|sentence| {
                        normalizer
                            .content_terms(sentence)
                            .iter()
                            .map(|t| frequencies.normalized(t))
                            .sum()
                    })
                    .collect()
            }
            FrequencyFeature::TfIdf => {
                let matrix = TermDocumentMatrix::build(document, normalizer, Weighting::TfIdf);
                matrix.columns().iter().map(|c| c.sum()).collect()
            }
        }
    }
}

impl Ranker for Edmundson {
    fn name(&self) -> &'static str {
        "edmundson"
    }

    fn rate(&self, document: &Document, normalizer: &TermNormalizer) -> Result<Rating> {
        self.config.validate()?;

        let n = document.num_sentences();
        let mut scores = vec![0.0; n];
        let mut add = |weight: f64, feature: Vec<f64>| {
            for (score, value) in scores.iter_mut().zip(feature) {
                *score += weight * value;
            }
        };

        let config = &self.config;
        if config.cue_weight > 0.0 {
            add(config.cue_weight, self.cue_scores(document, normalizer));
        }
        if config.title_weight > 0.0 {
            add(config.title_weight, self.title_scores(document, normalizer));
        }
        if config.location_weight > 0.0 {
            add(config.location_weight, self.location_scores(document));
        }
        if config.frequency_weight > 0.0 {
            add(config.frequency_weight, self.frequency_scores(document, normalizer));
        }

        Ok(Rating::new(scores))
    }
}
