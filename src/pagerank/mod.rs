//! Sentence centrality by power iteration
//!
//! The stationary distribution of a damped random walk over the sentence
//! similarity graph, shared by the LexRank and TextRank flavours of the
//! graph ranker.

pub mod standard;

pub use standard::StandardPageRank;

use crate::types::Rating;

/// Outcome of one power iteration run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRankResult {
    /// Centrality per sentence, summing to 1
    pub scores: Vec<f64>,
    pub iterations: usize,
    /// L1 change of the last iteration
    pub delta: f64,
    pub converged: bool,
}

impl PageRankResult {
    /// Centrality of a sentence (0 when out of range)
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }

    /// The most central sentence; ties go to the earlier one
    pub fn most_central(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (node, &score) in self.scores.iter().enumerate() {
            if best.map_or(true, |b| score > self.scores[b]) {
                best = Some(node);
            }
        }
        best
    }
}

impl From<PageRankResult> for Rating {
    fn from(result: PageRankResult) -> Self {
        Rating::new(result.scores)
    }
}
