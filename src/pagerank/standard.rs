//! Damped power iteration over an undirected sentence graph
//!
//! Each sentence passes its score to its neighbors in proportion to edge
//! weight. Isolated sentences share no vocabulary with the rest of the
//! document; they are pinned at the uniform score `1/n` and the walk runs
//! over the connected sentences only, so a sentence is never penalized just
//! for standing alone. Because the graph is undirected, a sentence's
//! in-neighbors are its neighbors, and each new score is pulled
//! independently; large graphs pull in parallel.

use rayon::prelude::*;

use super::PageRankResult;
use crate::graph::builder::PARALLEL_THRESHOLD;
use crate::graph::csr::CsrGraph;

/// Power iteration settings
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Probability of following an edge rather than teleporting
    pub damping: f64,
    /// Hard cap on iterations
    pub max_iterations: usize,
    /// Stop once the L1 change between iterations is at most this
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 200,
            threshold: 1e-4,
        }
    }
}

impl StandardPageRank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Iterate until converged or out of iterations
    ///
    /// The last iterate is returned either way; `converged` tells which.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes();
        if n == 0 {
            return PageRankResult {
                converged: true,
                ..PageRankResult::default()
            };
        }

        let uniform = 1.0 / n as f64;
        // Fraction of a sentence's score carried by one unit of edge weight
        let share: Vec<f64> = (0..n)
            .map(|node| {
                let strength = graph.strength(node);
                if strength > 0.0 {
                    1.0 / strength
                } else {
                    0.0
                }
            })
            .collect();

        // Connected sentences hold `(n - isolated) / n` of the mass and pass
        // all of it along, so the total stays 1 without renormalizing.
        let base = (1.0 - self.damping) * uniform;
        let mut scores = vec![uniform; n];
        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::INFINITY;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            let pull = |(node, slot): (usize, &mut f64)| {
                if graph.degree(node) == 0 {
                    *slot = uniform;
                    return;
                }
                let inflow: f64 = graph
                    .neighbors(node)
                    .map(|(from, weight)| scores[from] * weight * share[from])
                    .sum();
                *slot = base + self.damping * inflow;
            };
            if n >= PARALLEL_THRESHOLD {
                next.par_iter_mut().enumerate().for_each(pull);
            } else {
                next.iter_mut().enumerate().for_each(pull);
            }

            delta = scores.iter().zip(&next).map(|(a, b)| (a - b).abs()).sum();
            std::mem::swap(&mut scores, &mut next);
        }

        let converged = delta <= self.threshold;
        #[cfg(feature = "tracing")]
        if !converged {
            tracing::debug!(iterations, delta, "power iteration stopped before converging");
        }

        PageRankResult {
            scores,
            iterations,
            delta,
            converged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    fn graph(n: usize, edges: &[(u32, u32, f64)]) -> CsrGraph {
        let mut builder = GraphBuilder::with_nodes(n);
        for &(a, b, w) in edges {
            builder.increment_edge(a, b, w);
        }
        CsrGraph::from_builder(&builder)
    }

    fn star() -> CsrGraph {
        graph(4, &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0)])
    }

    #[test]
    fn test_symmetric_triangle_is_uniform() {
        let result = StandardPageRank::new().run(&graph(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]));

        assert!(result.converged);
        for &score in &result.scores {
            assert!((score - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_hub_sentence_is_most_central() {
        let result = StandardPageRank::new().run(&star());

        assert!(result.converged);
        assert_eq!(result.most_central(), Some(0));
        assert!((result.scores.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        // Spokes are interchangeable
        assert!((result.score(1) - result.score(3)).abs() < 1e-9);
    }

    #[test]
    fn test_heavier_edges_attract_more_mass() {
        let result = StandardPageRank::new().run(&graph(3, &[(0, 1, 3.0), (0, 2, 1.0)]));
        assert!(result.score(1) > result.score(2));
    }

    #[test]
    fn test_edgeless_graph_is_uniform() {
        let result = StandardPageRank::new().run(&graph(4, &[]));

        assert!(result.converged);
        for &score in &result.scores {
            assert!((score - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_isolated_sentence_keeps_uniform_score() {
        // Star on 0..4 plus a lone sentence
        let result = StandardPageRank::new().run(&graph(5, &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0)]));

        assert!(result.converged);
        assert!((result.score(4) - 0.2).abs() < 1e-12);
        assert!(result.score(0) > 0.2);
        assert!(result.score(1) < 0.2);
        assert!((result.scores.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_isolated_sentences_do_not_drain_connected_pair() {
        let result = StandardPageRank::new().run(&graph(3, &[(0, 1, 1.0)]));

        for &score in &result.scores {
            assert!((score - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_graph() {
        let result = StandardPageRank::new().run(&CsrGraph::default());

        assert!(result.converged);
        assert!(result.scores.is_empty());
        assert_eq!(result.most_central(), None);
    }

    #[test]
    fn test_iteration_cap() {
        let result = StandardPageRank::new()
            .with_max_iterations(1)
            .with_threshold(0.0)
            .run(&star());

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
    }

    #[test]
    fn test_damping_sharpens_centrality() {
        let low = StandardPageRank::new().with_damping(0.5).run(&star());
        let high = StandardPageRank::new().with_damping(0.95).run(&star());

        assert!(high.score(0) - high.score(1) > low.score(0) - low.score(1));
    }

    #[test]
    fn test_parallel_pull_matches_sequential_shape() {
        // A ring large enough to take the parallel path: all sentences equal
        let n = PARALLEL_THRESHOLD as u32 + 6;
        let edges: Vec<(u32, u32, f64)> = (0..n).map(|i| (i, (i + 1) % n, 1.0)).collect();
        let result = StandardPageRank::new().run(&graph(n as usize, &edges));

        let expected = 1.0 / n as f64;
        assert!(result.scores.iter().all(|s| (s - expected).abs() < 1e-9));
    }

    #[test]
    fn test_into_rating() {
        let rating: crate::types::Rating = StandardPageRank::new().run(&star()).into();
        assert_eq!(rating.ranked()[0], 0);
    }
}
