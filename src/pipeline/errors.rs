//! Structured spec diagnostics.
//!
//! A [`SpecError`] pins a problem to a JSON-pointer `path` inside the
//! submitted [`SummarySpec`](super::spec::SummarySpec), so callers can
//! surface it next to the offending field.

use serde::Serialize;
use thiserror::Error;

pub use super::error_code::ErrorCode;

/// A single problem found in a summary spec.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{code} at {}: {message}", display_path(.path))]
pub struct SpecError {
    pub code: ErrorCode,
    /// JSON pointer to the offending field (`""` is the document root)
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

impl SpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    /// Attach a suggestion for fixing the problem.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
