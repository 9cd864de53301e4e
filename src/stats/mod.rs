//! Term statistics
//!
//! Normalized terms, document-wide frequencies and the term-document matrix
//! the rankers are built on. Everything here is rebuilt per call.

pub mod frequency;
pub mod matrix;
pub mod normalizer;

pub use frequency::TermFrequencies;
pub use matrix::{TermDocumentMatrix, Weighting};
pub use normalizer::TermNormalizer;
