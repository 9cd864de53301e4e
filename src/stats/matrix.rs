//! Term-document matrix
//!
//! Rows are the distinct content terms of the document (sorted), columns are
//! body sentences. Columns are stored sparse as [`TermVector`]s; a dense
//! `ndarray` copy is produced on demand for the SVD.

use super::normalizer::TermNormalizer;
use crate::similarity::TermVector;
use crate::types::Document;
use ndarray::Array2;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// How a term's occurrences in a sentence become a matrix weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    /// Raw occurrence count
    Frequency,
    /// 1 if present, else 0
    Binary,
    /// Count × `ln(N / df)`
    #[default]
    TfIdf,
}

/// Sparse terms × sentences weight matrix
#[derive(Debug, Clone, Default)]
pub struct TermDocumentMatrix {
    terms: Vec<String>,
    term_index: FxHashMap<String, u32>,
    columns: Vec<TermVector>,
    document_frequency: Vec<usize>,
    weighting: Weighting,
}

impl TermDocumentMatrix {
    /// Build the matrix for the body sentences of `document`
    pub fn build(document: &Document, normalizer: &TermNormalizer, weighting: Weighting) -> Self {
        let sentence_terms: Vec<Vec<String>> = document
            .sentences()
            .into_iter()
            .map(|s| normalizer.content_terms(s))
            .collect();
        Self::from_terms(&sentence_terms, weighting)
    }

    /// Build the matrix from pre-normalized terms, one list per sentence
    pub fn from_terms(sentence_terms: &[Vec<String>], weighting: Weighting) -> Self {
        let mut terms: Vec<String> = sentence_terms.iter().flatten().cloned().collect();
        terms.sort_unstable();
        terms.dedup();

        let term_index: FxHashMap<String, u32> = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i as u32))
            .collect();

        // Per-sentence raw counts keyed by term id
        let counts: Vec<FxHashMap<u32, f64>> = sentence_terms
            .iter()
            .map(|sentence| {
                let mut counts: FxHashMap<u32, f64> = FxHashMap::default();
                for term in sentence {
                    if let Some(&id) = term_index.get(term) {
                        *counts.entry(id).or_insert(0.0) += 1.0;
                    }
                }
                counts
            })
            .collect();

        let mut document_frequency = vec![0usize; terms.len()];
        for sentence in &counts {
            for &id in sentence.keys() {
                document_frequency[id as usize] += 1;
            }
        }

        let num_sentences = sentence_terms.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| (num_sentences / df as f64).ln().max(0.0))
            .collect();

        let columns = counts
            .into_iter()
            .map(|mut sentence| {
                for (id, weight) in sentence.iter_mut() {
                    *weight = match weighting {
                        Weighting::Frequency => *weight,
                        Weighting::Binary => 1.0,
                        Weighting::TfIdf => *weight * idf[*id as usize],
                    };
                }
                TermVector::from_weights(sentence)
            })
            .collect();

        Self {
            terms,
            term_index,
            columns,
            document_frequency,
            weighting,
        }
    }

    /// Distinct terms, sorted; row `i` is `terms()[i]`
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Row id of a term
    pub fn term_id(&self, term: &str) -> Option<u32> {
        self.term_index.get(term).copied()
    }

    /// Number of rows
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Number of columns
    pub fn num_sentences(&self) -> usize {
        self.columns.len()
    }

    /// Weighting used to build the matrix
    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    /// Sparse column of sentence `s`
    pub fn column(&self, s: usize) -> Option<&TermVector> {
        self.columns.get(s)
    }

    /// All columns in sentence order
    pub fn columns(&self) -> &[TermVector] {
        &self.columns
    }

    /// Weight of `term` in sentence `s` (0 when either is unknown)
    pub fn weight(&self, term: &str, s: usize) -> f64 {
        match (self.term_id(term), self.columns.get(s)) {
            (Some(id), Some(column)) => column.get(id),
            _ => 0.0,
        }
    }

    /// Number of sentences containing `term`
    pub fn document_frequency(&self, term: &str) -> usize {
        self.term_id(term)
            .map_or(0, |id| self.document_frequency[id as usize])
    }

    /// Dense terms × sentences copy
    pub fn to_dense(&self) -> Array2<f64> {
        let mut dense = Array2::<f64>::zeros((self.terms.len(), self.columns.len()));
        for (s, column) in self.columns.iter().enumerate() {
            for (id, weight) in column.iter() {
                dense[[id as usize, s]] = weight;
            }
        }
        dense
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;
    use crate::nlp::tokenizer::WordTokenizer;

    fn terms(sentences: &[&str]) -> Vec<Vec<String>> {
        sentences
            .iter()
            .map(|s| s.split_whitespace().map(String::from).collect())
            .collect()
    }

    #[test]
    fn test_terms_sorted_and_indexed() {
        let matrix = TermDocumentMatrix::from_terms(
            &terms(&["zebra apple", "mango apple apple"]),
            Weighting::Frequency,
        );

        assert_eq!(matrix.terms(), &["apple", "mango", "zebra"]);
        assert_eq!(matrix.num_terms(), 3);
        assert_eq!(matrix.num_sentences(), 2);
        assert_eq!(matrix.weight("apple", 1), 2.0);
        assert_eq!(matrix.weight("zebra", 1), 0.0);
        assert_eq!(matrix.weight("missing", 0), 0.0);
        assert_eq!(matrix.document_frequency("apple"), 2);
        assert_eq!(matrix.document_frequency("mango"), 1);
    }

    #[test]
    fn test_binary_weighting() {
        let matrix =
            TermDocumentMatrix::from_terms(&terms(&["a a a b", "b"]), Weighting::Binary);
        assert_eq!(matrix.weight("a", 0), 1.0);
        assert_eq!(matrix.weight("b", 1), 1.0);
    }

    #[test]
    fn test_tf_idf_weighting() {
        let matrix = TermDocumentMatrix::from_terms(
            &terms(&["common rare rare", "common other"]),
            Weighting::TfIdf,
        );

        // Present in every sentence: idf = 0
        assert_eq!(matrix.weight("common", 0), 0.0);
        assert!((matrix.weight("rare", 0) - 2.0 * 2.0_f64.ln()).abs() < 1e-12);
        assert!((matrix.weight("other", 1) - 2.0_f64.ln()).abs() < 1e-12);
        // Zero weights are not stored
        assert_eq!(matrix.column(0).map(TermVector::len), Some(1));
    }

    #[test]
    fn test_to_dense_layout() {
        let matrix =
            TermDocumentMatrix::from_terms(&terms(&["b a", "c"]), Weighting::Frequency);
        let dense = matrix.to_dense();

        assert_eq!(dense.shape(), &[3, 2]);
        assert_eq!(dense[[0, 0]], 1.0); // a in s0
        assert_eq!(dense[[1, 0]], 1.0); // b in s0
        assert_eq!(dense[[2, 1]], 1.0); // c in s1
        assert_eq!(dense[[2, 0]], 0.0);
    }

    #[test]
    fn test_build_from_document() {
        let doc = Document::from_paragraphs(
            &[&["The cat sat.", "The dog sat."], &["A bird flew!"]],
            &WordTokenizer,
        );
        let normalizer = TermNormalizer::new(StopwordFilter::from_list(&["the", "a"]));
        let matrix = TermDocumentMatrix::build(&doc, &normalizer, Weighting::Frequency);

        assert_eq!(matrix.terms(), &["bird", "cat", "dog", "flew", "sat"]);
        assert_eq!(matrix.num_sentences(), 3);
        assert_eq!(matrix.document_frequency("sat"), 2);
    }

    #[test]
    fn test_empty_input() {
        let matrix = TermDocumentMatrix::from_terms(&[], Weighting::TfIdf);
        assert_eq!(matrix.num_terms(), 0);
        assert_eq!(matrix.to_dense().shape(), &[0, 0]);
    }
}
