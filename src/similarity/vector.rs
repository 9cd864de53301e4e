//! Sparse term vectors for sentences
//!
//! One column of the term-document matrix. Dimensions are term ids assigned
//! by the matrix; weights are kept raw and the L2 norm is cached so cosine
//! similarity needs one pass over the smaller vector.

use rustc_hash::FxHashMap;

/// A sparse weighted vector over term ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    /// Non-zero dimensions: term id -> weight
    weights: FxHashMap<u32, f64>,
    /// L2 norm of the vector
    norm: f64,
}

impl TermVector {
    /// Create a new empty vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a map of weights, dropping zero entries
    pub fn from_weights(mut weights: FxHashMap<u32, f64>) -> Self {
        weights.retain(|_, w| *w != 0.0 && w.is_finite());
        let norm = Self::compute_norm(&weights);
        Self { weights, norm }
    }

    /// Compute L2 norm
    fn compute_norm(weights: &FxHashMap<u32, f64>) -> f64 {
        weights.values().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Weight of a term id (0 when absent)
    pub fn get(&self, term: u32) -> f64 {
        self.weights.get(&term).copied().unwrap_or(0.0)
    }

    /// L2 norm
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Sum of all weights
    pub fn sum(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Dot product with another vector
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut dot = 0.0;
        for (term, value) in &small.weights {
            if let Some(other_value) = large.weights.get(term) {
                dot += value * other_value;
            }
        }
        dot
    }

    /// Cosine similarity with another vector
    ///
    /// 0 when either vector has zero norm; clamped to `[0, 1]` for
    /// non-negative weights.
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        if self.norm == 0.0 || other.norm == 0.0 {
            return 0.0;
        }
        (self.dot(other) / (self.norm * other.norm)).min(1.0)
    }

    /// Number of non-zero dimensions
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the vector is empty
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate over `(term id, weight)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.weights.iter().map(|(&t, &w)| (t, w))
    }
}

impl FromIterator<(u32, f64)> for TermVector {
    fn from_iter<I: IntoIterator<Item = (u32, f64)>>(iter: I) -> Self {
        let mut weights: FxHashMap<u32, f64> = FxHashMap::default();
        for (term, weight) in iter {
            *weights.entry(term).or_insert(0.0) += weight;
        }
        Self::from_weights(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity_identical() {
        let v1: TermVector = [(0, 1.0), (1, 2.0)].into_iter().collect();
        let v2 = v1.clone();

        let sim = v1.cosine_similarity(&v2);
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let v1: TermVector = [(0, 1.0)].into_iter().collect();
        let v2: TermVector = [(1, 1.0)].into_iter().collect();

        assert!(v1.cosine_similarity(&v2).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_scale_invariant() {
        let v1: TermVector = [(0, 1.0), (1, 1.0)].into_iter().collect();
        let v2: TermVector = [(0, 5.0), (1, 5.0), (2, 0.0)].into_iter().collect();

        assert!((v1.cosine_similarity(&v2) - 1.0).abs() < 1e-9);
        assert_eq!(v2.len(), 2);
    }

    #[test]
    fn test_empty_vector() {
        let v = TermVector::new();
        let other: TermVector = [(3, 2.0)].into_iter().collect();

        assert!(v.is_empty());
        assert_eq!(v.norm(), 0.0);
        assert_eq!(v.cosine_similarity(&other), 0.0);
        assert_eq!(other.cosine_similarity(&v), 0.0);
    }

    #[test]
    fn test_norm_dot_and_sum() {
        let v: TermVector = [(0, 3.0), (1, 4.0)].into_iter().collect();
        let w: TermVector = [(1, 2.0), (7, 9.0)].into_iter().collect();

        assert!((v.norm() - 5.0).abs() < 1e-12);
        assert!((v.dot(&w) - 8.0).abs() < 1e-12);
        assert!((v.sum() - 7.0).abs() < 1e-12);
        assert_eq!(v.get(1), 4.0);
        assert_eq!(v.get(9), 0.0);
    }

    #[test]
    fn test_from_iter_accumulates_duplicates() {
        let v: TermVector = [(0, 1.0), (0, 1.0), (1, 1.0)].into_iter().collect();
        assert_eq!(v.get(0), 2.0);
        assert_eq!(v.len(), 2);
    }
}
