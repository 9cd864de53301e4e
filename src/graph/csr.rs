//! Frozen sentence similarity graph
//!
//! Compressed sparse rows: the neighbors of sentence `i` are
//! `targets[offsets[i]..offsets[i + 1]]`, sorted by sentence index. Every
//! undirected edge is stored once per endpoint.

use super::builder::GraphBuilder;

/// An immutable, undirected sentence graph in CSR layout
#[derive(Debug, Clone)]
pub struct CsrGraph {
    offsets: Vec<usize>,
    targets: Vec<u32>,
    weights: Vec<f64>,
    /// Sum of incident edge weights per sentence
    strength: Vec<f64>,
}

impl CsrGraph {
    /// Freeze a builder
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut graph = Self {
            offsets: Vec::with_capacity(num_nodes + 1),
            targets: Vec::new(),
            weights: Vec::new(),
            strength: Vec::with_capacity(num_nodes),
        };
        graph.offsets.push(0);

        for (_, node) in builder.nodes() {
            let mut edges: Vec<(u32, f64)> = node.edges.iter().map(|(&t, &w)| (t, w)).collect();
            edges.sort_unstable_by_key(|&(target, _)| target);

            graph.strength.push(edges.iter().map(|&(_, w)| w).sum());
            for (target, weight) in edges {
                graph.targets.push(target);
                graph.weights.push(weight);
            }
            graph.offsets.push(graph.targets.len());
        }

        graph
    }

    /// Number of sentences
    pub fn num_nodes(&self) -> usize {
        self.strength.len()
    }

    /// Number of undirected edges
    pub fn num_edges(&self) -> usize {
        self.targets.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.strength.is_empty()
    }

    /// Neighbors of `node` with edge weights, by ascending index
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = self.offsets[node]..self.offsets[node + 1];
        self.targets[range.clone()]
            .iter()
            .zip(&self.weights[range])
            .map(|(&target, &weight)| (target as usize, weight))
    }

    /// Number of sentences adjacent to `node`
    pub fn degree(&self, node: usize) -> usize {
        self.offsets[node + 1] - self.offsets[node]
    }

    /// Total weight of the edges touching `node`
    pub fn strength(&self, node: usize) -> f64 {
        self.strength[node]
    }

    /// Sentences with no (positive-weight) edge
    pub fn isolated(&self) -> Vec<usize> {
        (0..self.num_nodes())
            .filter(|&node| self.strength[node] <= 0.0)
            .collect()
    }

    /// Number of connected components (isolated sentences count as one each)
    pub fn components(&self) -> usize {
        let mut visited = vec![false; self.num_nodes()];
        let mut stack = Vec::new();
        let mut components = 0;

        for start in 0..self.num_nodes() {
            if visited[start] {
                continue;
            }
            components += 1;
            visited[start] = true;
            stack.push(start);
            while let Some(node) = stack.pop() {
                for (next, _) in self.neighbors(node) {
                    if !visited[next] {
                        visited[next] = true;
                        stack.push(next);
                    }
                }
            }
        }

        components
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            offsets: vec![0],
            targets: Vec::new(),
            weights: Vec::new(),
            strength: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted_triangle() -> CsrGraph {
        let mut builder = GraphBuilder::with_nodes(3);
        builder.increment_edge(0, 1, 1.0);
        builder.increment_edge(1, 2, 2.0);
        builder.increment_edge(0, 2, 1.5);
        CsrGraph::from_builder(&builder)
    }

    #[test]
    fn test_freeze_counts_undirected_edges_once() {
        let graph = weighted_triangle();

        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.degree(1), 2);
    }

    #[test]
    fn test_neighbors_sorted_with_weights() {
        let graph = weighted_triangle();

        let neighbors: Vec<_> = graph.neighbors(2).collect();
        assert_eq!(neighbors, vec![(0, 1.5), (1, 2.0)]);
    }

    #[test]
    fn test_strength() {
        let graph = weighted_triangle();

        assert!((graph.strength(0) - 2.5).abs() < 1e-12);
        assert!((graph.strength(2) - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_isolated_and_components() {
        let mut builder = GraphBuilder::with_nodes(5);
        builder.increment_edge(0, 1, 1.0);
        builder.increment_edge(3, 4, 1.0);
        let graph = CsrGraph::from_builder(&builder);

        assert_eq!(graph.isolated(), vec![2]);
        assert_eq!(graph.components(), 3);
        assert_eq!(weighted_triangle().components(), 1);
    }

    #[test]
    fn test_empty_graph() {
        let graph = CsrGraph::from_builder(&GraphBuilder::default());

        assert!(graph.is_empty());
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.components(), 0);
        assert!(CsrGraph::default().is_empty());
    }
}
