//! KL-Sum greedy divergence ranker
//!
//! Builds the summary one sentence at a time, always adding the sentence
//! that keeps the summary's unigram distribution closest to the document's:
//! the candidate minimizing `KL(P_summary ‖ P_doc)`. Every summary term also
//! occurs in the document, so the divergence is finite and non-negative.
//! The symmetric, bounded Jensen-Shannon divergence can be used instead.
//!
//! The whole document is ordered greedily; the rating encodes the pick order.
//! Sentences without content terms cannot move the distribution and are
//! ranked last, in document order.

use crate::errors::Result;
use crate::pipeline::traits::Ranker;
use crate::similarity::{js_divergence, kl_divergence, to_distribution, Distribution};
use crate::stats::{TermFrequencies, TermNormalizer};
use crate::types::{Document, Rating};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Distance between the summary and document distributions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Divergence {
    /// `KL(P_summary ‖ P_doc)`
    #[default]
    KullbackLeibler,
    /// Jensen-Shannon, bounded by `ln 2`
    JensenShannon,
}

impl Divergence {
    fn between(self, summary: &Distribution, document: &Distribution) -> f64 {
        match self {
            Divergence::KullbackLeibler => kl_divergence(summary, document),
            Divergence::JensenShannon => js_divergence(summary, document),
        }
    }
}

/// KL-Sum tunables
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KlSumConfig {
    pub divergence: Divergence,
}

impl KlSumConfig {
    /// Set the divergence measure
    pub fn with_divergence(mut self, divergence: Divergence) -> Self {
        self.divergence = divergence;
        self
    }
}

/// KL-Sum ranker
#[derive(Debug, Clone, Copy, Default)]
pub struct KlSum {
    config: KlSumConfig,
}

impl KlSum {
    /// Create a KL-Sum ranker
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: KlSumConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &KlSumConfig {
        &self.config
    }

    fn candidate_distribution(summary: &FxHashMap<String, f64>, terms: &[String]) -> Distribution {
        let mut counts = summary.clone();
        for term in terms {
            *counts.entry(term.clone()).or_insert(0.0) += 1.0;
        }
        to_distribution(counts.iter().map(|(t, &c)| (t.as_str(), c)))
    }

    /// Sentence indices in greedy pick order
    pub fn pick_order(&self, document: &Document, normalizer: &TermNormalizer) -> Vec<usize> {
        let sentence_terms: Vec<Vec<String>> = document
            .sentences()
            .into_iter()
            .map(|s| normalizer.content_terms(s))
            .collect();
        let frequencies = TermFrequencies::from_document(document, normalizer);
        let doc_distribution = frequencies.probabilities();

        let (mut remaining, empty): (Vec<usize>, Vec<usize>) =
            (0..sentence_terms.len()).partition(|&i| !sentence_terms[i].is_empty());

        let mut summary: FxHashMap<String, f64> = FxHashMap::default();
        let mut order = Vec::with_capacity(sentence_terms.len());

        while !remaining.is_empty() {
            // Ties keep the earliest sentence
            let mut best = 0;
            let mut best_divergence = f64::INFINITY;
            for (slot, &index) in remaining.iter().enumerate() {
                let candidate = Self::candidate_distribution(&summary, &sentence_terms[index]);
                let divergence = self.config.divergence.between(&candidate, &doc_distribution);
                if divergence < best_divergence {
                    best = slot;
                    best_divergence = divergence;
                }
            }

            let picked = remaining.remove(best);
            for term in &sentence_terms[picked] {
                *summary.entry(term.clone()).or_insert(0.0) += 1.0;
            }
            order.push(picked);
        }

        order.extend(empty);
        order
    }
}

impl Ranker for KlSum {
    fn name(&self) -> &'static str {
        "kl_sum"
    }

    fn rate(&self, document: &Document, normalizer: &TermNormalizer) -> Result<Rating> {
        let order = self.pick_order(document, normalizer);
        Ok(Rating::from_pick_order(&order, document.num_sentences()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;
    use crate::nlp::tokenizer::WordTokenizer;

    #[test]
    fn test_pick_order_tracks_document_distribution() {
        // Document distribution: rust 3/6, compiler 2/6, ocean 1/6
        let doc = Document::from_paragraphs(
            &[&["ocean", "the end", "rust rust compiler", "rust compiler"]],
            &WordTokenizer,
        );
        let normalizer = TermNormalizer::new(StopwordFilter::from_list(&["the", "end"]));
        let order = KlSum::new().pick_order(&doc, &normalizer);

        // s2 is closest on its own; adding s0 then restores the ocean mass;
        // the stop-word-only sentence comes last
        assert_eq!(order, vec![2, 0, 3, 1]);
    }

    #[test]
    fn test_rating_encodes_pick_order() {
        let doc = Document::from_paragraphs(
            &[&["cats purr", "dogs bark loudly", "cats and dogs"]],
            &WordTokenizer,
        );
        let normalizer = TermNormalizer::default();
        let rating = KlSum::new().rate(&doc, &normalizer).unwrap();

        assert_eq!(rating.ranked(), KlSum::new().pick_order(&doc, &normalizer));
        assert_eq!(rating.len(), 3);
    }

    #[test]
    fn test_jensen_shannon_starts_from_matching_sentence() {
        // s2 alone has exactly the document distribution: both measures give 0
        let doc = Document::from_paragraphs(
            &[&["rust compiler", "ocean", "rust compiler ocean"]],
            &WordTokenizer,
        );
        let normalizer = TermNormalizer::default();
        let js = KlSum::with_config(
            KlSumConfig::default().with_divergence(Divergence::JensenShannon),
        );

        let order = js.pick_order(&doc, &normalizer);
        assert_eq!(order[0], 2);
        assert_eq!(order.len(), 3);
        assert_eq!(KlSum::new().pick_order(&doc, &normalizer)[0], 2);
    }

    #[test]
    fn test_divergence_config_from_json() {
        let config: KlSumConfig =
            serde_json::from_str(r#"{ "divergence": "jensen_shannon" }"#).unwrap();
        assert_eq!(config.divergence, Divergence::JensenShannon);

        let config: KlSumConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.divergence, Divergence::KullbackLeibler);
    }

    #[test]
    fn test_empty_document() {
        let rating = KlSum::new()
            .rate(&Document::default(), &TermNormalizer::default())
            .unwrap();
        assert!(rating.is_empty());
    }
}
