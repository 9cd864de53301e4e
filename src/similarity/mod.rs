//! Similarity and divergence primitives
//!
//! Shared by the graph rankers (cosine / word overlap) and the greedy
//! coverage rankers (KL divergence).

pub mod divergence;
pub mod vector;

pub use divergence::{js_divergence, kl_divergence, to_distribution, Distribution};
pub use vector::TermVector;

use rustc_hash::FxHashSet;

/// Word-overlap similarity between two term sequences
///
/// `|common distinct terms| / (ln|a| + ln|b|)`, where `|a|` and `|b|` count
/// terms with repetition. 0 when nothing is shared; when the denominator
/// vanishes (two one-word sentences) the common count itself is returned.
pub fn word_overlap_similarity<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let left: FxHashSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let common = b
        .iter()
        .map(AsRef::as_ref)
        .collect::<FxHashSet<&str>>()
        .intersection(&left)
        .count();
    if common == 0 {
        return 0.0;
    }

    let denominator = (a.len() as f64).ln() + (b.len() as f64).ln();
    if denominator <= f64::EPSILON {
        return common as f64;
    }
    common as f64 / denominator
}
