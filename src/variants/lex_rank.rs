//! LexRank / TextRank graph-centrality ranker
//!
//! Sentences are nodes of a similarity graph; a sentence is central when it
//! is similar to many other central sentences. Centrality is the stationary
//! distribution of a damped random walk over the graph (PageRank).
//!
//! - LexRank: cosine similarity of TF-IDF vectors, binary edges above the
//!   threshold
//! - TextRank: word-overlap similarity, edges weighted by similarity

use crate::errors::{Result, SummarizerError};
use crate::graph::{CsrGraph, GraphBuilder};
use crate::pagerank::StandardPageRank;
use crate::pipeline::traits::Ranker;
use crate::similarity::word_overlap_similarity;
use crate::stats::{TermDocumentMatrix, TermNormalizer, Weighting};
use crate::types::{Document, Rating};
use serde::{Deserialize, Serialize};

/// Pairwise sentence similarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Similarity {
    /// Cosine of TF-IDF vectors
    #[default]
    Cosine,
    /// `|common terms| / (ln|a| + ln|b|)`
    Overlap,
}

/// Graph ranker tunables
///
/// LexRank defaults to binary edges: every pair at or above `threshold` is
/// linked with weight 1 rather than its cosine similarity, which is classic
/// thresholded LexRank. Set `continuous` to weight edges by similarity.
/// The TextRank flavour always weights by similarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexRankConfig {
    /// Similarity measure
    pub similarity: Similarity,
    /// Pairs below this similarity get no edge
    pub threshold: f64,
    /// Keep the similarity as edge weight instead of binary edges
    pub continuous: bool,
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum power iterations
    pub max_iterations: usize,
    /// L1 convergence tolerance
    pub tolerance: f64,
}

impl Default for LexRankConfig {
    fn default() -> Self {
        Self {
            similarity: Similarity::Cosine,
            threshold: 0.1,
            continuous: false,
            damping: 0.85,
            max_iterations: 200,
            tolerance: 1e-4,
        }
    }
}

impl LexRankConfig {
    /// TextRank flavour: word overlap, weighted edges, no threshold
    pub fn text_rank() -> Self {
        Self {
            similarity: Similarity::Overlap,
            threshold: 0.0,
            continuous: true,
            ..Self::default()
        }
    }

    /// Set the similarity measure
    pub fn with_similarity(mut self, similarity: Similarity) -> Self {
        self.similarity = similarity;
        self
    }

    /// Set the edge threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Use similarity-weighted edges
    pub fn with_continuous(mut self, continuous: bool) -> Self {
        self.continuous = continuous;
        self
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(SummarizerError::invalid_config(format!(
                "threshold must be a non-negative number, got {}",
                self.threshold
            )));
        }

        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummarizerError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummarizerError::invalid_config("max_iterations must be > 0"));
        }

        if !(self.tolerance > 0.0) {
            return Err(SummarizerError::invalid_config("tolerance must be > 0"));
        }

        Ok(())
    }
}

/// Graph-centrality ranker
#[derive(Debug, Clone, Default)]
pub struct LexRank {
    config: LexRankConfig,
}

impl LexRank {
    /// Create a LexRank ranker with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a TextRank-flavoured ranker
    pub fn text_rank() -> Self {
        Self::with_config(LexRankConfig::text_rank())
    }

    /// Create with custom config
    pub fn with_config(config: LexRankConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &LexRankConfig {
        &self.config
    }

    /// Build the sentence similarity graph
    pub fn build_graph(&self, document: &Document, normalizer: &TermNormalizer) -> CsrGraph {
        let n = document.num_sentences();
        let threshold = self.config.threshold;
        let continuous = self.config.continuous;

        let builder = match self.config.similarity {
            Similarity::Cosine => {
                let matrix = TermDocumentMatrix::build(document, normalizer, Weighting::TfIdf);
                let columns = matrix.columns();
                GraphBuilder::from_pairwise(n, threshold, continuous, |i, j| {
                    columns[i].cosine_similarity(&columns[j])
                })
            }
            Similarity::Overlap => {
                let terms: Vec<Vec<String>> = document
                    .sentences()
                    .into_iter()
                    .map(|s| normalizer.content_terms(s))
                    .collect();
                GraphBuilder::from_pairwise(n, threshold, continuous, |i, j| {
                    word_overlap_similarity(&terms[i], &terms[j])
                })
            }
        };

        let graph = CsrGraph::from_builder(&builder);

        #[cfg(feature = "tracing")]
        if n > 1 && graph.num_edges() == 0 {
            tracing::debug!(sentences = n, "similarity graph has no edges");
        } else if graph.components() > 1 {
            tracing::debug!(
                sentences = n,
                components = graph.components(),
                "similarity graph is disconnected"
            );
        }

        graph
    }
}

impl Ranker for LexRank {
    fn name(&self) -> &'static str {
        match self.config.similarity {
            Similarity::Cosine => "lex_rank",
            Similarity::Overlap => "text_rank",
        }
    }

    fn rate(&self, document: &Document, normalizer: &TermNormalizer) -> Result<Rating> {
        self.config.validate()?;

        let graph = self.build_graph(document, normalizer);
        let result = StandardPageRank::new()
            .with_damping(self.config.damping)
            .with_max_iterations(self.config.max_iterations)
            .with_threshold(self.config.tolerance)
            .run(&graph);

        Ok(result.into())
    }
}
