//! Document-wide term frequency table

use super::normalizer::TermNormalizer;
use crate::types::Document;
use rustc_hash::FxHashMap;

/// Term → occurrence count over a bag of terms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermFrequencies {
    counts: FxHashMap<String, usize>,
    total: usize,
    max_count: usize,
}

impl TermFrequencies {
    /// Count terms from any iterator of terms
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        let mut total = 0;
        for term in terms {
            let term = term.as_ref();
            match counts.get_mut(term) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(term.to_string(), 1);
                }
            }
            total += 1;
        }
        let max_count = counts.values().copied().max().unwrap_or(0);

        Self {
            counts,
            total,
            max_count,
        }
    }

    /// Count the content terms of every body sentence
    pub fn from_document(document: &Document, normalizer: &TermNormalizer) -> Self {
        Self::from_terms(document.words().filter_map(|w| normalizer.normalize(w)))
    }

    /// Occurrences of `term`
    pub fn count(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Total number of counted terms (with repetition)
    pub fn total(&self) -> usize {
        self.total
    }

    /// Highest count of any term
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no terms were counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `count / total` (0 for an empty table)
    pub fn probability(&self, term: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(term) as f64 / self.total as f64
    }

    /// `count / max_count` (0 for an empty table)
    pub fn normalized(&self, term: &str) -> f64 {
        if self.max_count == 0 {
            return 0.0;
        }
        self.count(term) as f64 / self.max_count as f64
    }

    /// Unigram distribution over the counted terms
    pub fn probabilities(&self) -> FxHashMap<String, f64> {
        self.counts
            .keys()
            .map(|term| (term.clone(), self.probability(term)))
            .collect()
    }

    /// Iterate over `(term, count)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }

    /// The `n` most frequent terms, ties broken lexicographically
    pub fn most_frequent(&self, n: usize) -> Vec<(&str, usize)> {
        let mut terms: Vec<(&str, usize)> = self.iter().collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(n);
        terms
    }
}
