//! Word tokenization contract
//!
//! Sentence segmentation happens upstream; a tokenizer only splits one
//! sentence into words.

/// Splits sentence text into word tokens
pub trait Tokenizer {
    /// Word tokens of `text`, in order
    fn words(&self, text: &str) -> Vec<String>;
}

/// Unicode-aware word splitter
///
/// Words are maximal runs of alphanumeric characters; an apostrophe or hyphen
/// between two alphanumerics stays inside the word ("don't", "state-of-the-art").
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    fn is_joiner(c: char) -> bool {
        matches!(c, '\'' | '’' | '-')
    }
}

impl Tokenizer for WordTokenizer {
    fn words(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut words = Vec::new();
        let mut current = String::new();

        for (i, &c) in chars.iter().enumerate() {
            if c.is_alphanumeric() {
                current.push(c);
                continue;
            }

            let joins = Self::is_joiner(c)
                && !current.is_empty()
                && chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());
            if joins {
                current.push(c);
            } else if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }

        if !current.is_empty() {
            words.push(current);
        }
        words
    }
}
