//! Stopword filtering
//!
//! Stop words are explicit configuration: a [`StopwordFilter`] is built once
//! per summarization run, either from a [`StopWordProvider`] or from a custom
//! list, and handed to the term normalizer. Nothing here is global.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Source of stop-word lists by language code
pub trait StopWordProvider {
    /// Normalized (lowercase) stop words for `language`
    ///
    /// Unknown languages yield an empty set.
    fn stop_words(&self, language: &str) -> FxHashSet<String>;
}

/// Stop-word lists bundled with the `stop-words` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStopWords;

impl BuiltinStopWords {
    /// Whether a bundled list exists for `language`
    pub fn supports(language: &str) -> bool {
        Self::language(language).is_some()
    }

    fn language(code: &str) -> Option<LANGUAGE> {
        let lang = match code.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "cs" | "czech" => LANGUAGE::Czech,
            "sk" | "slovak" => LANGUAGE::Slovak,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => return None,
        };
        Some(lang)
    }
}

impl StopWordProvider for BuiltinStopWords {
    fn stop_words(&self, language: &str) -> FxHashSet<String> {
        match Self::language(language) {
            Some(lang) => get(lang).iter().map(|s| s.to_lowercase()).collect(),
            None => FxHashSet::default(),
        }
    }
}

/// A set of stop words checked case-insensitively
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Load the stop words for `language` from `provider`
    pub fn from_provider(provider: &impl StopWordProvider, language: &str) -> Self {
        Self {
            stopwords: provider.stop_words(language),
        }
    }

    /// Built-in stop words for `language` (empty for unsupported languages)
    pub fn new(language: &str) -> Self {
        Self::from_provider(&BuiltinStopWords, language)
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stopword filter from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let mut filter = Self::empty();
        filter.add_stopwords(words);
        filter
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        self.stopwords
            .extend(words.iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        // Avoid allocating for words that are already lowercase
        word.chars().any(char::is_uppercase) && self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
