//! Validation engine for summary specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`SummarySpec`](super::spec::SummarySpec) and collects every diagnostic
//! into a [`ValidationReport`]. It never short-circuits on the first error,
//! so users see all problems at once.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use rapid_summarizer::pipeline::validation::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&spec);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::SpecError;
use super::spec::*;
use crate::errors::SummarizerError;
use crate::nlp::BuiltinStopWords;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding attached to a [`SpecError`].
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of diagnostics (errors + warnings).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// All errors joined into one line, in rule order.
    pub fn error_summary(&self) -> String {
        self.errors()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`SummarySpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so a long-lived engine can
/// be shared across threads.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"length"`).
    fn name(&self) -> &str;

    /// Inspect `spec` and return any findings.
    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`SummarySpec`] and collects
/// all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(LengthRule));
        engine.add_rule(Box::new(SelectorRule));
        engine.add_rule(Box::new(MethodConfigRule));
        engine.add_rule(Box::new(StopWordLanguageRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in run order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &SummarySpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Strip the category prefix off a config error, keeping the detail.
fn detail(err: &SummarizerError) -> String {
    match err {
        SummarizerError::InvalidConfig(msg)
        | SummarizerError::InvalidLength(msg)
        | SummarizerError::InvalidSpec(msg) => msg.clone(),
        other => other.to_string(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Spec version ────────────────────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint(format!("Set \"v\": {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. Length must be a positive count or percentage ──────────────────────

struct LengthRule;

impl ValidationRule for LengthRule {
    fn name(&self) -> &str {
        "length"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        match spec.length.to_length_spec() {
            Ok(_) => vec![],
            Err(err) => vec![ValidationDiagnostic::error(
                SpecError::new(ErrorCode::InvalidLength, "/length", detail(&err))
                    .with_hint("Use a positive sentence count (3) or percentage (\"20%\")"),
            )],
        }
    }
}

// ─── 3. Selector word limits ───────────────────────────────────────────────

struct SelectorRule;

impl ValidationRule for SelectorRule {
    fn name(&self) -> &str {
        "selector"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        match spec.selector.validate() {
            Ok(()) => vec![],
            Err(err) => vec![ValidationDiagnostic::error(SpecError::new(
                ErrorCode::OutOfRange,
                "/selector",
                detail(&err),
            ))],
        }
    }
}

// ─── 4. Selected method's tunables ──────────────────────────────────────────

struct MethodConfigRule;

impl ValidationRule for MethodConfigRule {
    fn name(&self) -> &str {
        "method_config"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        let section = spec.method_section();
        let err = match spec.validate_method() {
            Ok(()) => return vec![],
            Err(err) => err,
        };

        let diagnostic = match err {
            SummarizerError::MissingCueWords(kind) => SpecError::new(
                ErrorCode::MissingCueWords,
                format!("{section}/{kind}_words"),
                format!("cue feature is enabled but no {kind} words were configured"),
            )
            .with_hint("Set bonus_words and stigma_words, or set cue_weight to 0"),
            other => SpecError::new(ErrorCode::OutOfRange, section, detail(&other)),
        };
        vec![ValidationDiagnostic::error(diagnostic)]
    }
}

// ─── 5. Stop-word language (warning only) ──────────────────────────────────

struct StopWordLanguageRule;

impl ValidationRule for StopWordLanguageRule {
    fn name(&self) -> &str {
        "stop_word_language"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        if spec.stop_words.is_some() || BuiltinStopWords::supports(&spec.language) {
            return vec![];
        }
        vec![ValidationDiagnostic::warning(
            SpecError::new(
                ErrorCode::UnknownLanguage,
                "/language",
                format!(
                    "no built-in stop words for language \"{}\"; none will be removed",
                    spec.language
                ),
            )
            .with_hint("Pass an explicit stop_words list"),
        )]
    }
}

// ─── 6. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = spec.unknown_fields.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if spec.strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecError::new(
                        ErrorCode::UnknownField,
                        format!("/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
