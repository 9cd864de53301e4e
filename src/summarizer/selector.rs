//! Rating-driven sentence selection
//!
//! Takes the top-rated sentences of a document and re-emits them in
//! document order, so the summary reads in the original discourse order
//! whatever ranker produced the rating.

use crate::errors::{Result, SummarizerError};
use crate::types::{Document, LengthSpec, Rating, Rounding, Sentence};
use serde::{Deserialize, Serialize};

/// Configuration for sentence selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Rounding applied to percentage lengths
    pub rounding: Rounding,
    /// Minimum sentence length (in words); shorter sentences are never selected
    pub min_words: Option<usize>,
    /// Maximum sentence length (in words); longer sentences are never selected
    pub max_words: Option<usize>,
}

impl SelectorConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_words == Some(0) {
            return Err(SummarizerError::invalid_config("max_words must be > 0"));
        }
        if let (Some(min), Some(max)) = (self.min_words, self.max_words) {
            if min > max {
                return Err(SummarizerError::invalid_config(format!(
                    "min_words ({min}) must be <= max_words ({max})"
                )));
            }
        }
        Ok(())
    }

    fn accepts(&self, sentence: &Sentence) -> bool {
        let len = sentence.len();
        self.min_words.map_or(true, |min| len >= min)
            && self.max_words.map_or(true, |max| len <= max)
    }
}

/// Result of sentence selection
#[derive(Debug, Clone, Default)]
pub struct SummaryResult<'a> {
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence<'a>>,
    /// Sentence count the length resolved to
    pub requested: usize,
    /// Body sentences in the document
    pub total: usize,
}

impl<'a> SummaryResult<'a> {
    /// The selected sentences, in document order
    pub fn sentences(&self) -> Vec<&'a Sentence> {
        self.sentences.iter().map(|s| s.sentence).collect()
    }

    /// Number of selected sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if nothing was selected
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// A selected sentence with its score
#[derive(Debug, Clone)]
pub struct SelectedSentence<'a> {
    /// The sentence
    pub sentence: &'a Sentence,
    /// Rating score
    pub score: f64,
    /// Position in rating order (0 = best)
    pub rank: usize,
}

/// Top-N selector over a rating
#[derive(Debug, Clone, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set the percentage rounding
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.config.rounding = rounding;
        self
    }

    /// Set the sentence length filter
    pub fn with_word_limits(mut self, min_words: Option<usize>, max_words: Option<usize>) -> Self {
        self.config.min_words = min_words;
        self.config.max_words = max_words;
        self
    }

    /// The active configuration
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Select the top sentences, returned in document order
    pub fn select<'a>(
        &self,
        rating: &Rating,
        document: &'a Document,
        length: LengthSpec,
    ) -> Result<Vec<&'a Sentence>> {
        Ok(self.select_scored(rating, document, length)?.sentences())
    }

    /// Select the top sentences with their scores
    ///
    /// Sentences are ordered by score descending, ties by document order;
    /// the top N are returned in document order. N resolves against the
    /// whole document and is capped by the sentences passing the length
    /// filter.
    pub fn select_scored<'a>(
        &self,
        rating: &Rating,
        document: &'a Document,
        length: LengthSpec,
    ) -> Result<SummaryResult<'a>> {
        length.validate()?;
        self.config.validate()?;

        let total = document.num_sentences();
        if rating.len() != total {
            return Err(SummarizerError::RatingMismatch {
                rated: rating.len(),
                expected: total,
            });
        }
        if total == 0 {
            return Ok(SummaryResult::default());
        }

        let sentences = document.sentences();
        let mut candidates: Vec<&Sentence> = sentences
            .into_iter()
            .filter(|s| self.config.accepts(s))
            .collect();
        if candidates.is_empty() {
            return Err(SummarizerError::EmptyAfterFiltering { total });
        }

        let requested = length.resolve(total, self.config.rounding)?;

        candidates.sort_by(|a, b| {
            rating
                .score(b.index())
                .total_cmp(&rating.score(a.index()))
                .then_with(|| a.index().cmp(&b.index()))
        });

        let mut selected: Vec<SelectedSentence<'a>> = candidates
            .into_iter()
            .take(requested)
            .enumerate()
            .map(|(rank, sentence)| SelectedSentence {
                sentence,
                score: rating.score(sentence.index()),
                rank,
            })
            .collect();

        // Sort by document order
        selected.sort_by_key(|s| s.sentence.index());

        Ok(SummaryResult {
            sentences: selected,
            requested,
            total,
        })
    }
}
