//! Summarization pipeline
//!
//! - [`traits`]: the [`Ranker`](traits::Ranker) stage contract
//! - [`spec`]: the JSON [`SummarySpec`](spec::SummarySpec)
//! - [`validation`]: rule-based spec validation with structured diagnostics
//! - [`runner`]: [`SummaryPipeline`](runner::SummaryPipeline), built from a
//!   validated spec

pub mod error_code;
pub mod errors;
pub mod runner;
pub mod spec;
pub mod traits;
pub mod validation;

pub use error_code::ErrorCode;
pub use errors::SpecError;
pub use runner::{build_ranker, SummaryPipeline};
pub use spec::{LengthInput, SummarySpec, SPEC_VERSION};
pub use traits::{LeadRanker, Ranker};
pub use validation::{Severity, ValidationDiagnostic, ValidationEngine, ValidationReport};
