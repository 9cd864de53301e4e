//! Stemmer contract
//!
//! A stemmer maps a (lowercased) word to its normalized form. It carries no
//! state, so one instance may be shared by concurrent summarization calls.

/// Word → normalized form
pub trait Stemmer: Send + Sync {
    /// Normalize a lowercased word
    fn normalize(&self, word: &str) -> String;
}

/// Identity stemmer: words are used as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStemmer;

impl Stemmer for NullStemmer {
    #[inline]
    fn normalize(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Plain functions and closures are stemmers
impl<F> Stemmer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn normalize(&self, word: &str) -> String {
        self(word)
    }
}
