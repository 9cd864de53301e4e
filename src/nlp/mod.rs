//! Natural Language Processing collaborators
//!
//! Stopword filtering, stemming and tokenization contracts. Language-specific
//! implementations are supplied by the caller; the built-in ones are simple
//! language-neutral defaults.

pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;

pub use stemmer::{NullStemmer, Stemmer};
pub use stopwords::{BuiltinStopWords, StopWordProvider, StopwordFilter};
pub use tokenizer::{Tokenizer, WordTokenizer};
