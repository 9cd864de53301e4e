//! Error types for rapid_summarizer

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SummarizerError>;

/// Errors raised while configuring or running a summarizer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummarizerError {
    /// A tunable is out of range or inconsistent
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The requested summary length cannot be resolved
    #[error("invalid summary length: {0}")]
    InvalidLength(String),

    /// The cue feature is active but a cue-word list was not supplied
    #[error("cue feature is enabled but no {0} words were configured")]
    MissingCueWords(&'static str),

    /// A rating does not cover the document it is applied to
    #[error("rating covers {rated} sentences but the document has {expected}")]
    RatingMismatch { rated: usize, expected: usize },

    /// Every sentence of a non-empty document was removed by the length
    /// filter; the word limits are too tight for this document
    #[error("all {total} sentences were removed by the sentence length filter")]
    EmptyAfterFiltering { total: usize },

    /// A summary spec failed validation
    #[error("invalid summary spec: {0}")]
    InvalidSpec(String),
}

impl SummarizerError {
    /// Create an [`SummarizerError::InvalidConfig`]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        SummarizerError::InvalidConfig(message.into())
    }

    /// Create an [`SummarizerError::InvalidLength`]
    pub fn invalid_length(message: impl Into<String>) -> Self {
        SummarizerError::InvalidLength(message.into())
    }

    /// Whether this error was caused by configuration rather than input data
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SummarizerError::InvalidConfig(_)
                | SummarizerError::InvalidLength(_)
                | SummarizerError::MissingCueWords(_)
                | SummarizerError::EmptyAfterFiltering { .. }
                | SummarizerError::InvalidSpec(_)
        )
    }
}
