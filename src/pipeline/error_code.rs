//! Stable, machine-readable codes for summary spec diagnostics.

use serde::{Deserialize, Serialize};

/// Category of a validation finding.
///
/// Codes serialize as snake_case strings and are part of the public JSON
/// contract; new codes may be added but existing ones are never renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The `v` field names a spec version this crate does not understand
    UnsupportedVersion,
    /// The summary length is zero, negative or unparsable
    InvalidLength,
    /// Edmundson's cue feature is enabled without bonus or stigma words
    MissingCueWords,
    /// A numeric tunable is outside its allowed range
    OutOfRange,
    /// No built-in stop-word list exists for the requested language
    UnknownLanguage,
    /// A field is not part of the schema
    UnknownField,
    /// Catch-all for custom rules
    ValidationFailed,
}

impl ErrorCode {
    /// Returns the snake_case name used in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::InvalidLength => "invalid_length",
            Self::MissingCueWords => "missing_cue_words",
            Self::OutOfRange => "out_of_range",
            Self::UnknownLanguage => "unknown_language",
            Self::UnknownField => "unknown_field",
            Self::ValidationFailed => "validation_failed",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
