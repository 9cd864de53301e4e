//! Luhn frequency-cluster ranker
//!
//! A sentence is as good as its densest cluster of significant words, where
//! significant words are terms in a mid-frequency band: frequent enough to
//! matter, not so common that they appear everywhere.
//!
//! Cluster score: `(significant words in cluster)² / cluster length`.

use crate::errors::{Result, SummarizerError};
use crate::pipeline::traits::Ranker;
use crate::stats::{TermFrequencies, TermNormalizer};
use crate::types::{Document, Rating};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Luhn tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuhnConfig {
    /// Minimum document frequency of a significant word
    pub min_frequency: usize,
    /// Maximum document frequency of a significant word (unbounded if `None`)
    pub max_frequency: Option<usize>,
    /// Terms found in a larger share of sentences are treated as noise
    ///
    /// Only applied to documents of 3 or more sentences.
    pub max_sentence_ratio: f64,
    /// Keep only this share of distinct terms, most frequent first
    pub significant_percentage: f64,
    /// Non-significant words allowed between two significant words of a cluster
    pub max_gap: usize,
}

impl Default for LuhnConfig {
    fn default() -> Self {
        Self {
            min_frequency: 2,
            max_frequency: None,
            max_sentence_ratio: 0.5,
            significant_percentage: 1.0,
            max_gap: 4,
        }
    }
}

impl LuhnConfig {
    /// Set the minimum significant-word frequency
    pub fn with_min_frequency(mut self, min_frequency: usize) -> Self {
        self.min_frequency = min_frequency;
        self
    }

    /// Set the maximum significant-word frequency
    pub fn with_max_frequency(mut self, max_frequency: Option<usize>) -> Self {
        self.max_frequency = max_frequency;
        self
    }

    /// Set the noise cutoff on the share of sentences containing a term
    pub fn with_max_sentence_ratio(mut self, ratio: f64) -> Self {
        self.max_sentence_ratio = ratio;
        self
    }

    /// Set the share of terms eligible as significant
    pub fn with_significant_percentage(mut self, percentage: f64) -> Self {
        self.significant_percentage = percentage;
        self
    }

    /// Set the maximum gap inside a cluster
    pub fn with_max_gap(mut self, max_gap: usize) -> Self {
        self.max_gap = max_gap;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_frequency == 0 {
            return Err(SummarizerError::invalid_config("min_frequency must be > 0"));
        }

        if let Some(max) = self.max_frequency {
            if max < self.min_frequency {
                return Err(SummarizerError::invalid_config(format!(
                    "max_frequency ({max}) must be >= min_frequency ({})",
                    self.min_frequency
                )));
            }
        }

        if !(self.max_sentence_ratio > 0.0 && self.max_sentence_ratio <= 1.0) {
            return Err(SummarizerError::invalid_config(format!(
                "max_sentence_ratio must be in (0, 1], got {}",
                self.max_sentence_ratio
            )));
        }

        if !(self.significant_percentage > 0.0 && self.significant_percentage <= 1.0) {
            return Err(SummarizerError::invalid_config(format!(
                "significant_percentage must be in (0, 1], got {}",
                self.significant_percentage
            )));
        }

        Ok(())
    }
}

/// Luhn ranker
#[derive(Debug, Clone, Default)]
pub struct Luhn {
    config: LuhnConfig,
}

impl Luhn {
    /// Create a Luhn ranker with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: LuhnConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &LuhnConfig {
        &self.config
    }

    /// Significant words of the document
    pub fn significant_words(
        &self,
        document: &Document,
        normalizer: &TermNormalizer,
    ) -> FxHashSet<String> {
        let frequencies = TermFrequencies::from_document(document, normalizer);
        let num_sentences = document.num_sentences();

        // Number of sentences each term occurs in
        let mut sentence_counts: FxHashMap<String, usize> = FxHashMap::default();
        for sentence in document.sentences() {
            let terms: FxHashSet<String> = normalizer.content_terms(sentence).into_iter().collect();
            for term in terms {
                *sentence_counts.entry(term).or_insert(0) += 1;
            }
        }

        let keep = ((frequencies.len() as f64) * self.config.significant_percentage).ceil() as usize;
        let max_sentences = (num_sentences as f64 * self.config.max_sentence_ratio).floor() as usize;

        frequencies
            .most_frequent(keep)
            .into_iter()
            .filter(|&(_, count)| count >= self.config.min_frequency)
            .filter(|&(_, count)| self.config.max_frequency.map_or(true, |max| count <= max))
            .filter(|&(term, _)| {
                num_sentences < 3
                    || sentence_counts.get(term).copied().unwrap_or(0) <= max_sentences
            })
            .map(|(term, _)| term.to_string())
            .collect()
    }

    /// Best cluster score of one sentence given its positional terms
    fn rate_terms(&self, terms: &[Option<String>], significant: &FxHashSet<String>) -> f64 {
        let is_significant =
            |slot: &Option<String>| slot.as_ref().is_some_and(|t| significant.contains(t));

        let positions: Vec<usize> = terms
            .iter()
            .enumerate()
            .filter(|(_, slot)| is_significant(*slot))
            .map(|(i, _)| i)
            .collect();

        let Some(&first) = positions.first() else {
            return 0.0;
        };

        let score = |start: usize, end: usize, count: usize| {
            let length = (end - start + 1) as f64;
            (count * count) as f64 / length
        };

        let mut best = 0.0_f64;
        let (mut start, mut end, mut count) = (first, first, 1);
        for &position in &positions[1..] {
            if position - end - 1 <= self.config.max_gap {
                end = position;
                count += 1;
            } else {
                best = best.max(score(start, end, count));
                (start, end, count) = (position, position, 1);
            }
        }
        best.max(score(start, end, count))
    }
}

impl Ranker for Luhn {
    fn name(&self) -> &'static str {
        "luhn"
    }

    fn rate(&self, document: &Document, normalizer: &TermNormalizer) -> Result<Rating> {
        self.config.validate()?;

        let significant = self.significant_words(document, normalizer);
        let scores = document
            .sentences()
            .into_iter()
            .map(|sentence| self.rate_terms(&normalizer.positional_terms(sentence), &significant))
            .collect();

        Ok(Rating::new(scores))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;
    use crate::nlp::tokenizer::WordTokenizer;

    fn distinct_vocabulary_document() -> Document {
        Document::from_paragraphs(
            &[&[
                "alpha beta gamma delta",
                "rust rust fast rust compiler",
                "ocean waves ocean tides",
                "cats dogs birds fish",
                "music music music music",
            ]],
            &WordTokenizer,
        )
    }

    #[test]
    fn test_densest_clusters_rank_highest() {
        let rating = Luhn::new()
            .rate(&distinct_vocabulary_document(), &TermNormalizer::default())
            .unwrap();

        assert_eq!(rating.score(0), 0.0);
        assert!((rating.score(1) - 9.0 / 4.0).abs() < 1e-12);
        assert!((rating.score(2) - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(rating.score(3), 0.0);
        assert!((rating.score(4) - 4.0).abs() < 1e-12);
        assert_eq!(&rating.ranked()[..2], &[4, 1]);
    }

    #[test]
    fn test_gap_splits_clusters() {
        let luhn = Luhn::with_config(LuhnConfig::default().with_max_gap(1));
        let significant: FxHashSet<String> = ["x".to_string()].into_iter().collect();
        let slot = |t: &str| Some(t.to_string());

        // x _ x _ _ x  -> cluster [0..2] (2 words) then a lone x
        let terms = vec![slot("x"), slot("a"), slot("x"), slot("b"), None, slot("x")];
        let score = luhn.rate_terms(&terms, &significant);
        assert!((score - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_stop_words_count_toward_cluster_length() {
        let luhn = Luhn::new();
        let significant: FxHashSet<String> = ["x".to_string()].into_iter().collect();

        let terms = vec![Some("x".to_string()), None, None, Some("x".to_string())];
        let score = luhn.rate_terms(&terms, &significant);
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_common_terms_are_noise() {
        let doc = Document::from_paragraphs(
            &[&["data data model", "data graph", "data tree", "data list"]],
            &WordTokenizer,
        );
        let significant = Luhn::new().significant_words(&doc, &TermNormalizer::default());
        // "data" appears in every sentence
        assert!(significant.is_empty());
    }

    #[test]
    fn test_no_significant_words_scores_zero() {
        let doc = Document::from_paragraphs(&[&["one two", "three four"]], &WordTokenizer);
        let rating = Luhn::new().rate(&doc, &TermNormalizer::default()).unwrap();
        assert_eq!(rating.scores(), &[0.0, 0.0]);
    }

    #[test]
    fn test_stop_words_never_significant() {
        let doc = Document::from_paragraphs(
            &[&["the the cat", "the dog dog", "a bird"]],
            &WordTokenizer,
        );
        let normalizer = TermNormalizer::new(StopwordFilter::from_list(&["the", "a"]));
        let significant = Luhn::new().significant_words(&doc, &normalizer);

        assert!(significant.contains("dog"));
        assert!(!significant.contains("the"));
    }

    #[test]
    fn test_max_frequency_bound() {
        let config = LuhnConfig::default().with_max_frequency(Some(3));
        let significant = Luhn::with_config(config)
            .significant_words(&distinct_vocabulary_document(), &TermNormalizer::default());

        assert!(significant.contains("rust"));
        assert!(!significant.contains("music"));
    }

    #[test]
    fn test_validate() {
        assert!(LuhnConfig::default().validate().is_ok());
        assert!(LuhnConfig::default().with_min_frequency(0).validate().is_err());
        assert!(LuhnConfig::default()
            .with_min_frequency(3)
            .with_max_frequency(Some(2))
            .validate()
            .is_err());
        assert!(LuhnConfig::default()
            .with_significant_percentage(0.0)
            .validate()
            .is_err());
        assert!(LuhnConfig::default()
            .with_max_sentence_ratio(1.5)
            .validate()
            .is_err());
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: LuhnConfig = serde_json::from_str(r#"{"max_gap": 2}"#).unwrap();
        assert_eq!(config.max_gap, 2);
        assert_eq!(config.min_frequency, 2);
    }
}
