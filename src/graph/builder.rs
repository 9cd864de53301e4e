//! Sentence similarity graph builder
//!
//! Nodes are body sentences, identified by their index. Edges are undirected
//! and weighted by pairwise similarity; pairs below the threshold get no edge.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Documents with at least this many sentences score pairs in parallel
pub const PARALLEL_THRESHOLD: usize = 64;

/// A node in the graph builder
#[derive(Debug, Clone, Default)]
pub struct BuilderNode {
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

/// A mutable graph builder over a fixed set of sentence nodes
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Node storage, indexed by sentence index
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    /// Create a builder with `num_nodes` isolated nodes
    pub fn with_nodes(num_nodes: usize) -> Self {
        Self {
            nodes: vec![BuilderNode::default(); num_nodes],
        }
    }

    /// Increment the edge weight between two nodes
    ///
    /// Self-loops and unknown node ids are ignored.
    pub fn increment_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to || from as usize >= self.nodes.len() || to as usize >= self.nodes.len() {
            return;
        }

        // Add edge in both directions (undirected graph)
        *self.nodes[from as usize].edges.entry(to).or_insert(0.0) += weight;
        *self.nodes[to as usize].edges.entry(from).or_insert(0.0) += weight;
    }

    /// Build the similarity graph over `num_nodes` sentences
    ///
    /// `similarity(i, j)` is evaluated once for every pair `i < j`. Pairs
    /// scoring below `threshold` (or not above 0) get no edge. With
    /// `continuous` the similarity is the edge weight, otherwise every edge
    /// weighs 1.
    pub fn from_pairwise<F>(num_nodes: usize, threshold: f64, continuous: bool, similarity: F) -> Self
    where
        F: Fn(usize, usize) -> f64 + Sync,
    {
        let score_row = |i: usize| -> Vec<(u32, u32, f64)> {
            ((i + 1)..num_nodes)
                .filter_map(|j| {
                    let sim = similarity(i, j);
                    if sim.is_finite() && sim > 0.0 && sim >= threshold {
                        let weight = if continuous { sim } else { 1.0 };
                        Some((i as u32, j as u32, weight))
                    } else {
                        None
                    }
                })
                .collect()
        };

        // For small documents, sequential is faster
        let rows: Vec<Vec<(u32, u32, f64)>> = if num_nodes < PARALLEL_THRESHOLD {
            (0..num_nodes).map(score_row).collect()
        } else {
            (0..num_nodes).into_par_iter().map(score_row).collect()
        };

        let mut builder = Self::with_nodes(num_nodes);
        for (from, to, weight) in rows.into_iter().flatten() {
            builder.increment_edge(from, to, weight);
        }
        builder
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }
}
