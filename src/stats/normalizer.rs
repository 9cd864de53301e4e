//! Word → term normalization
//!
//! Lower-cases, drops non-word tokens, applies the stemmer and removes stop
//! words. Every ranker sees the document through one [`TermNormalizer`].

use crate::nlp::stemmer::{NullStemmer, Stemmer};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::Sentence;
use std::sync::Arc;

/// Stop words + stemmer for one summarization run
#[derive(Clone)]
pub struct TermNormalizer {
    stopwords: StopwordFilter,
    stemmer: Arc<dyn Stemmer>,
}

impl Default for TermNormalizer {
    fn default() -> Self {
        Self::new(StopwordFilter::empty())
    }
}

impl std::fmt::Debug for TermNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermNormalizer")
            .field("stopwords", &self.stopwords.len())
            .finish_non_exhaustive()
    }
}

impl TermNormalizer {
    /// Normalizer with the given stop words and no stemming
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self {
            stopwords,
            stemmer: Arc::new(NullStemmer),
        }
    }

    /// Set the stemmer
    pub fn with_stemmer(mut self, stemmer: impl Stemmer + 'static) -> Self {
        self.stemmer = Arc::new(stemmer);
        self
    }

    /// Set a shared stemmer
    pub fn with_shared_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// The stop-word filter in use
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Whether the token contains at least one letter or digit
    pub fn is_word(token: &str) -> bool {
        token.chars().any(char::is_alphanumeric)
    }

    /// Lower-case and stem a token, keeping stop words
    ///
    /// Returns `None` for non-word tokens.
    pub fn stem(&self, token: &str) -> Option<String> {
        if !Self::is_word(token) {
            return None;
        }
        let stem = self.stemmer.normalize(&token.to_lowercase());
        (!stem.is_empty()).then_some(stem)
    }

    /// Normalize a token into a content term
    ///
    /// Returns `None` for non-word tokens and for stop words (checked before
    /// and after stemming).
    pub fn normalize(&self, token: &str) -> Option<String> {
        if !Self::is_word(token) {
            return None;
        }
        let lower = token.to_lowercase();
        if self.stopwords.is_stopword(&lower) {
            return None;
        }
        let stem = self.stemmer.normalize(&lower);
        if stem.is_empty() || self.stopwords.is_stopword(&stem) {
            return None;
        }
        Some(stem)
    }

    /// Content terms of a sentence, in order (duplicates kept)
    pub fn content_terms(&self, sentence: &Sentence) -> Vec<String> {
        sentence
            .words()
            .iter()
            .filter_map(|w| self.normalize(w))
            .collect()
    }

    /// One slot per word token of the sentence
    ///
    /// Non-word tokens are skipped; stop words keep their position as `None`
    /// so distance between content terms is preserved.
    pub fn positional_terms(&self, sentence: &Sentence) -> Vec<Option<String>> {
        sentence
            .words()
            .iter()
            .filter(|w| Self::is_word(w))
            .map(|w| self.normalize(w))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::WordTokenizer;
    use crate::types::Document;

    fn plural_stemmer(word: &str) -> String {
        word.strip_suffix('s').unwrap_or(word).to_string()
    }

    #[test]
    fn test_normalize_lowercases_and_filters() {
        let normalizer = TermNormalizer::new(StopwordFilter::from_list(&["the", "is"]));

        assert_eq!(normalizer.normalize("Rust"), Some("rust".to_string()));
        assert_eq!(normalizer.normalize("THE"), None);
        assert_eq!(normalizer.normalize("--"), None);
        assert_eq!(normalizer.normalize("42"), Some("42".to_string()));
    }

    #[test]
    fn test_stop_word_checked_after_stemming() {
        let normalizer = TermNormalizer::new(StopwordFilter::from_list(&["thi"]))
            .with_stemmer(plural_stemmer);

        // "this" stems to "thi", which is a stop word
        assert_eq!(normalizer.normalize("this"), None);
        assert_eq!(normalizer.normalize("Cats"), Some("cat".to_string()));
    }

    #[test]
    fn test_stem_keeps_stop_words() {
        let normalizer = TermNormalizer::new(StopwordFilter::from_list(&["the"]));
        assert_eq!(normalizer.stem("The"), Some("the".to_string()));
        assert_eq!(normalizer.stem("!"), None);
    }

    #[test]
    fn test_sentence_terms() {
        let doc = Document::from_paragraphs(&[&["The cat sat on the mat."]], &WordTokenizer);
        let normalizer = TermNormalizer::new(StopwordFilter::from_list(&["the", "on"]));
        let sentence = doc.sentences()[0];

        assert_eq!(normalizer.content_terms(sentence), vec!["cat", "sat", "mat"]);
        assert_eq!(
            normalizer.positional_terms(sentence),
            vec![
                None,
                Some("cat".to_string()),
                Some("sat".to_string()),
                None,
                None,
                Some("mat".to_string()),
            ]
        );
    }
}
