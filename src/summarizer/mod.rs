//! Summarization components
//!
//! Rate with any [`Ranker`], then pick the top sentences with the
//! [`SentenceSelector`].

pub mod selector;

pub use selector::{SelectedSentence, SelectorConfig, SentenceSelector, SummaryResult};

use crate::errors::Result;
use crate::pipeline::traits::Ranker;
use crate::stats::TermNormalizer;
use crate::types::{Document, LengthSpec, Sentence};

/// Rate `document` with `ranker` and select `length` sentences
///
/// The selected sentences are returned in document order.
pub fn summarize<'a>(
    document: &'a Document,
    ranker: &dyn Ranker,
    normalizer: &TermNormalizer,
    length: LengthSpec,
) -> Result<Vec<&'a Sentence>> {
    length.validate()?;
    let rating = ranker.rate(document, normalizer)?;
    SentenceSelector::new().select(&rating, document, length)
}
