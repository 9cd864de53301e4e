//! Stage trait definitions for the pipeline.
//!
//! A summarization run has two stages: a [`Ranker`] rates every body
//! sentence, then the selector turns the rating into a summary. Rankers are
//! selected at runtime from configuration, so they are used as trait objects.

use crate::errors::Result;
use crate::stats::TermNormalizer;
use crate::types::{Document, Rating};

// ============================================================================
// Ranker: per-sentence scoring (stage 1)
// ============================================================================

/// Scores every body sentence of a document.
///
/// # Contract
///
/// - **Input**: the document and the term normalizer for this run.
/// - **Output**: a [`Rating`] with exactly one score per body sentence,
///   indexed by sentence index. Higher is better; only the order matters.
/// - **Pure**: the same document and normalizer always produce the same
///   rating. Implementations hold configuration only, never per-call state.
/// - **Errors**: configuration problems are reported before any work is
///   done. An empty document yields an empty rating.
pub trait Ranker: Send + Sync {
    /// Short stable identifier (`"luhn"`, `"lex_rank"`, ...)
    fn name(&self) -> &'static str;

    /// Rate every body sentence of `document`.
    fn rate(&self, document: &Document, normalizer: &TermNormalizer) -> Result<Rating>;
}

/// Rates sentences by document position, earliest first.
///
/// The lead baseline: useful as a reference ranker and for documents where
/// no statistical signal is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadRanker;

impl Ranker for LeadRanker {
    fn name(&self) -> &'static str {
        "lead"
    }

    #[inline]
    fn rate(&self, document: &Document, _normalizer: &TermNormalizer) -> Result<Rating> {
        let n = document.num_sentences();
        let order: Vec<usize> = (0..n).collect();
        Ok(Rating::from_pick_order(&order, n))
    }
}
