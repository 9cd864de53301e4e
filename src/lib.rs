//! # rapid_summarizer
//!
//! Extractive text summarization: pick the most representative sentences of
//! a document and return them in their original order.
//!
//! Every method rates the body sentences of a [`Document`]; the
//! [`SentenceSelector`] then keeps the top N. Available rankers:
//!
//! - **Luhn**: clusters of significant (frequent, non-trivial) words
//! - **Edmundson**: cue, title, location and frequency features
//! - **LSA**: sentence weight in the strongest latent topics (SVD)
//! - **LexRank / TextRank**: centrality in the sentence similarity graph
//! - **SumBasic**: greedy coverage of high-probability words
//! - **KL-Sum**: greedy match of the document's word distribution
//! - **Lead**: earliest sentences first, as a baseline
//!
//! ## Example
//!
//! ```rust
//! use rapid_summarizer::{summarize, Document, LengthSpec, Lsa, TermNormalizer, WordTokenizer};
//!
//! let doc = Document::from_paragraphs(
//!     &[&["Rust is fast.", "Rust is safe.", "Cats sleep a lot."]],
//!     &WordTokenizer,
//! );
//! let summary = summarize(&doc, &Lsa::new(), &TermNormalizer::default(), LengthSpec::Sentences(2))?;
//! assert_eq!(summary.len(), 2);
//! # Ok::<(), rapid_summarizer::SummarizerError>(())
//! ```

pub mod errors;
pub mod graph;
pub mod linalg;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod similarity;
pub mod stats;
pub mod summarizer;
pub mod types;
pub mod variants;

// Re-export commonly used types
pub use errors::{Result, SummarizerError};
pub use types::{Document, DocumentBuilder, LengthSpec, Paragraph, Rating, Rounding, Sentence};

// Re-export main functionality
pub use nlp::{
    stemmer::{NullStemmer, Stemmer},
    stopwords::StopwordFilter,
    tokenizer::{Tokenizer, WordTokenizer},
};
pub use pipeline::{
    runner::SummaryPipeline,
    spec::SummarySpec,
    traits::{LeadRanker, Ranker},
    validation::ValidationEngine,
};
pub use stats::TermNormalizer;
pub use summarizer::{summarize, SelectorConfig, SentenceSelector, SummaryResult};
pub use variants::{Edmundson, KlSum, LexRank, Lsa, Luhn, SumBasic, Variant};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
