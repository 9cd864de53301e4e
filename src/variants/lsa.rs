//! Latent semantic analysis ranker
//!
//! Decomposes the TF-IDF term-sentence matrix `A = U Σ Vᵀ` and scores each
//! sentence by its length in the space of the K strongest topics:
//!
//! `score(s) = sqrt(Σ_{k<K} σ_k² · V[s,k]²)`
//!
//! With K equal to the full rank this is the L2 norm of the sentence's TF-IDF
//! column.

use crate::errors::{Result, SummarizerError};
use crate::linalg::JacobiSvd;
use crate::pipeline::traits::Ranker;
use crate::stats::{TermDocumentMatrix, TermNormalizer, Weighting};
use crate::types::{Document, Rating};
use serde::{Deserialize, Serialize};

/// LSA tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LsaConfig {
    /// Fixed topic count; derived from the matrix rank when `None`
    pub topics: Option<usize>,
    /// Lower bound of the derived topic count
    pub min_topics: usize,
    /// Derived topic count = `ceil(rank × reduction_ratio)`
    pub reduction_ratio: f64,
    /// Jacobi sweep limit
    pub max_sweeps: usize,
}

impl Default for LsaConfig {
    fn default() -> Self {
        Self {
            topics: None,
            min_topics: 3,
            reduction_ratio: 1.0,
            max_sweeps: 60,
        }
    }
}

impl LsaConfig {
    /// Use a fixed topic count
    pub fn with_topics(mut self, topics: usize) -> Self {
        self.topics = Some(topics);
        self
    }

    /// Set the minimum derived topic count
    pub fn with_min_topics(mut self, min_topics: usize) -> Self {
        self.min_topics = min_topics;
        self
    }

    /// Set the share of the rank kept as topics
    pub fn with_reduction_ratio(mut self, ratio: f64) -> Self {
        self.reduction_ratio = ratio;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.topics == Some(0) {
            return Err(SummarizerError::invalid_config("topics must be > 0"));
        }

        if self.min_topics == 0 {
            return Err(SummarizerError::invalid_config("min_topics must be > 0"));
        }

        if !(self.reduction_ratio > 0.0 && self.reduction_ratio <= 1.0) {
            return Err(SummarizerError::invalid_config(format!(
                "reduction_ratio must be in (0, 1], got {}",
                self.reduction_ratio
            )));
        }

        if self.max_sweeps == 0 {
            return Err(SummarizerError::invalid_config("max_sweeps must be > 0"));
        }

        Ok(())
    }

    /// Topic count for a matrix of the given rank
    pub fn topic_count(&self, rank: usize) -> usize {
        let wanted = match self.topics {
            Some(topics) => topics,
            None => self
                .min_topics
                .max((rank as f64 * self.reduction_ratio).ceil() as usize),
        };
        wanted.min(rank)
    }
}

/// LSA ranker
#[derive(Debug, Clone, Default)]
pub struct Lsa {
    config: LsaConfig,
}

impl Lsa {
    /// Create an LSA ranker with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: LsaConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &LsaConfig {
        &self.config
    }
}

impl Ranker for Lsa {
    fn name(&self) -> &'static str {
        "lsa"
    }

    fn rate(&self, document: &Document, normalizer: &TermNormalizer) -> Result<Rating> {
        self.config.validate()?;

        let n = document.num_sentences();
        let matrix = TermDocumentMatrix::build(document, normalizer, Weighting::TfIdf);
        if matrix.num_terms() == 0 {
            return Ok(Rating::new(vec![0.0; n]));
        }

        let svd = JacobiSvd::new(self.config.max_sweeps, 1e-10).decompose(matrix.to_dense().view());
        let rank = svd.rank();
        let topics = self.config.topic_count(rank);

        #[cfg(feature = "tracing")]
        {
            if !svd.converged {
                tracing::debug!(sweeps = svd.sweeps, "svd stopped before converging");
            }
            if self.config.topics.is_some_and(|k| k > topics) {
                tracing::debug!(rank, topics, "topic count reduced to matrix rank");
            }
        }

        let scores = (0..n)
            .map(|s| {
                (0..topics)
                    .map(|k| {
                        let weighted = svd.singular_values[k] * svd.v[[s, k]];
                        weighted * weighted
                    })
                    .sum::<f64>()
                    .sqrt()
            })
            .collect();

        Ok(Rating::new(scores))
    }
}
