//! SumBasic probabilistic-coverage ranker
//!
//! Greedy selection by unigram probability. After a sentence is picked the
//! probabilities of its terms decay, so later picks favour content not yet
//! covered. The whole document is ordered this way; the rating encodes the
//! pick order, so the top N of the rating are exactly the first N picks.

use crate::errors::{Result, SummarizerError};
use crate::pipeline::traits::Ranker;
use crate::stats::{TermFrequencies, TermNormalizer};
use crate::types::{Document, Rating};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// How a sentence's term probabilities combine into its weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scoring {
    /// Sum over the sentence's distinct content terms
    #[default]
    Sum,
    /// Mean over the sentence's content terms (with repetition)
    Average,
}

/// Redundancy update applied to the terms of a picked sentence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decay {
    /// Multiply the probability by a factor in `(0, 1]`
    Factor(f64),
    /// Square the probability
    Square,
    /// Leave probabilities unchanged
    None,
}

impl Default for Decay {
    fn default() -> Self {
        Decay::Factor(0.5)
    }
}

impl Decay {
    fn apply(self, probability: f64) -> f64 {
        match self {
            Decay::Factor(factor) => probability * factor,
            Decay::Square => probability * probability,
            Decay::None => probability,
        }
    }
}

/// SumBasic tunables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SumBasicConfig {
    /// Sentence weight
    pub scoring: Scoring,
    /// Probability update after each pick
    pub decay: Decay,
}

impl SumBasicConfig {
    /// Set the scoring rule
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Set the decay rule
    pub fn with_decay(mut self, decay: Decay) -> Self {
        self.decay = decay;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Decay::Factor(factor) = self.decay {
            if !(factor > 0.0 && factor <= 1.0) {
                return Err(SummarizerError::invalid_config(format!(
                    "decay factor must be in (0, 1], got {factor}"
                )));
            }
        }
        Ok(())
    }
}

/// SumBasic ranker
#[derive(Debug, Clone, Default)]
pub struct SumBasic {
    config: SumBasicConfig,
}

impl SumBasic {
    /// Create a SumBasic ranker with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SumBasicConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &SumBasicConfig {
        &self.config
    }

    fn weight(&self, terms: &[String], probabilities: &FxHashMap<String, f64>) -> f64 {
        if terms.is_empty() {
            return 0.0;
        }
        let p = |t: &String| probabilities.get(t).copied().unwrap_or(0.0);
        match self.config.scoring {
            Scoring::Sum => terms.iter().collect::<FxHashSet<_>>().into_iter().map(p).sum(),
            Scoring::Average => terms.iter().map(p).sum::<f64>() / terms.len() as f64,
        }
    }

    /// Sentence indices in greedy pick order
    pub fn pick_order(&self, document: &Document, normalizer: &TermNormalizer) -> Vec<usize> {
        let sentence_terms: Vec<Vec<String>> = document
            .sentences()
            .into_iter()
            .map(|s| normalizer.content_terms(s))
            .collect();
        let mut probabilities = TermFrequencies::from_document(document, normalizer).probabilities();

        let mut remaining: Vec<usize> = (0..sentence_terms.len()).collect();
        let mut order = Vec::with_capacity(remaining.len());

        while !remaining.is_empty() {
            // Ties keep the earliest sentence
            let mut best = 0;
            let mut best_weight = f64::NEG_INFINITY;
            for (slot, &index) in remaining.iter().enumerate() {
                let weight = self.weight(&sentence_terms[index], &probabilities);
                if weight > best_weight {
                    best = slot;
                    best_weight = weight;
                }
            }

            let picked = remaining.remove(best);
            let picked_terms: FxHashSet<&String> = sentence_terms[picked].iter().collect();
            for term in picked_terms {
                if let Some(p) = probabilities.get_mut(term) {
                    *p = self.config.decay.apply(*p);
                }
            }
            order.push(picked);
        }

        order
    }
}

impl Ranker for SumBasic {
    fn name(&self) -> &'static str {
        "sum_basic"
    }

    fn rate(&self, document: &Document, normalizer: &TermNormalizer) -> Result<Rating> {
        self.config.validate()?;

        let order = self.pick_order(document, normalizer);
        Ok(Rating::from_pick_order(&order, document.num_sentences()))
    }
}
