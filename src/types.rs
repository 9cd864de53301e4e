//! Core types for rapid_summarizer
//!
//! This module defines the document model consumed by every ranker
//! (document → paragraph → sentence → word), the per-sentence [`Rating`]
//! a ranker produces, and the [`LengthSpec`] the selector resolves into a
//! sentence count.

use crate::errors::{Result, SummarizerError};
use crate::nlp::tokenizer::Tokenizer;
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence of the input document
///
/// Built only through [`DocumentBuilder`]; fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    text: String,
    words: Vec<String>,
    index: usize,
    heading: bool,
}

impl Sentence {
    /// The original sentence text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Word tokens in original order (as produced by the tokenizer)
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Position of this sentence in document order
    ///
    /// Body sentences are numbered `0..n` across the whole document. Headings
    /// are numbered separately, in their own sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether this sentence is a heading (title, section header)
    pub fn is_heading(&self) -> bool {
        self.heading
    }

    /// Number of word tokens
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the sentence has no word tokens
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

// ============================================================================
// Paragraph & Document
// ============================================================================

/// An ordered run of sentences, possibly including headings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    sentences: Vec<Sentence>,
}

impl Paragraph {
    /// Body sentences of this paragraph, in order
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> + '_ {
        self.sentences.iter().filter(|s| !s.heading)
    }

    /// Heading sentences of this paragraph, in order
    pub fn headings(&self) -> impl Iterator<Item = &Sentence> + '_ {
        self.sentences.iter().filter(|s| s.heading)
    }

    /// All sentences (body and headings) in order
    pub fn all(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Number of body sentences
    pub fn len(&self) -> usize {
        self.sentences().count()
    }

    /// Check if the paragraph has no body sentences
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A parsed document: paragraphs of tokenized sentences
///
/// Immutable once built. An empty document is valid; summarizing it yields
/// an empty summary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
    num_sentences: usize,
}

impl Document {
    /// Start building a document
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// Build a document from paragraphs of raw sentence texts
    ///
    /// Each inner slice is one paragraph; each string is one sentence and is
    /// split into words with `tokenizer`.
    pub fn from_paragraphs(paragraphs: &[&[&str]], tokenizer: &impl Tokenizer) -> Self {
        let mut builder = DocumentBuilder::new();
        for paragraph in paragraphs {
            builder = builder.paragraph();
            for text in paragraph.iter() {
                builder = builder.tokenized_sentence(text, tokenizer);
            }
        }
        builder.build()
    }

    /// Paragraphs in document order
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Body sentences in document order; `sentences()[i].index() == i`
    pub fn sentences(&self) -> Vec<&Sentence> {
        self.paragraphs.iter().flat_map(|p| p.sentences()).collect()
    }

    /// Heading sentences in document order
    pub fn headings(&self) -> Vec<&Sentence> {
        self.paragraphs.iter().flat_map(|p| p.headings()).collect()
    }

    /// All words of the body sentences, in order
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.paragraphs
            .iter()
            .flat_map(|p| p.sentences())
            .flat_map(|s| s.words.iter().map(String::as_str))
    }

    /// Number of body sentences
    pub fn num_sentences(&self) -> usize {
        self.num_sentences
    }

    /// Check if the document has no body sentences
    pub fn is_empty(&self) -> bool {
        self.num_sentences == 0
    }
}

/// Incremental builder for [`Document`]
///
/// Sentences are appended to the current paragraph; [`paragraph`](Self::paragraph)
/// starts a new one. Body sentences are indexed in insertion order.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    paragraphs: Vec<Paragraph>,
    next_index: usize,
    next_heading: usize,
}

impl DocumentBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new paragraph
    pub fn paragraph(mut self) -> Self {
        if self.paragraphs.last().map_or(true, |p| !p.sentences.is_empty()) {
            self.paragraphs.push(Paragraph::default());
        }
        self
    }

    /// Append a body sentence with pre-tokenized words
    pub fn sentence(mut self, text: impl Into<String>, words: Vec<String>) -> Self {
        let index = self.next_index;
        self.next_index += 1;
        self.push(Sentence {
            text: text.into(),
            words,
            index,
            heading: false,
        });
        self
    }

    /// Append a heading with pre-tokenized words
    pub fn heading(mut self, text: impl Into<String>, words: Vec<String>) -> Self {
        let index = self.next_heading;
        self.next_heading += 1;
        self.push(Sentence {
            text: text.into(),
            words,
            index,
            heading: true,
        });
        self
    }

    /// Append a body sentence, tokenizing `text`
    pub fn tokenized_sentence(self, text: &str, tokenizer: &impl Tokenizer) -> Self {
        let words = tokenizer.words(text);
        self.sentence(text, words)
    }

    /// Append a heading, tokenizing `text`
    pub fn tokenized_heading(self, text: &str, tokenizer: &impl Tokenizer) -> Self {
        let words = tokenizer.words(text);
        self.heading(text, words)
    }

    /// Finish the document, dropping empty paragraphs
    pub fn build(self) -> Document {
        let paragraphs: Vec<Paragraph> = self
            .paragraphs
            .into_iter()
            .filter(|p| !p.sentences.is_empty())
            .collect();

        Document {
            paragraphs,
            num_sentences: self.next_index,
        }
    }

    fn push(&mut self, sentence: Sentence) {
        if self.paragraphs.is_empty() {
            self.paragraphs.push(Paragraph::default());
        }
        if let Some(paragraph) = self.paragraphs.last_mut() {
            paragraph.sentences.push(sentence);
        }
    }
}

// ============================================================================
// Rating
// ============================================================================

/// Per-sentence scores produced by one ranker, indexed by sentence index
///
/// Score ranges differ between rankers; only the ordering is meaningful.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    scores: Vec<f64>,
}

impl Rating {
    /// Create a rating from raw scores
    ///
    /// Non-finite scores are stored as 0 so ordering stays total.
    pub fn new(scores: Vec<f64>) -> Self {
        let scores = scores
            .into_iter()
            .map(|s| if s.is_finite() && s != 0.0 { s } else { 0.0 })
            .collect();
        Self { scores }
    }

    /// Equal score for every sentence
    pub fn uniform(num_sentences: usize) -> Self {
        if num_sentences == 0 {
            return Self::default();
        }
        Self {
            scores: vec![1.0 / num_sentences as f64; num_sentences],
        }
    }

    /// Build a rating from a greedy pick order
    ///
    /// The first picked sentence gets the highest score (`n`), the last one
    /// `n - order.len() + 1`; sentences never picked score 0.
    pub fn from_pick_order(order: &[usize], num_sentences: usize) -> Self {
        let mut scores = vec![0.0; num_sentences];
        for (position, &index) in order.iter().enumerate() {
            if let Some(score) = scores.get_mut(index) {
                *score = (num_sentences - position) as f64;
            }
        }
        Self { scores }
    }

    /// Score for a sentence index (0 when out of range)
    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }

    /// All scores, indexed by sentence index
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Number of rated sentences
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if the rating is empty
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sentence indices ordered by score descending, ties by document order
    pub fn ranked(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.scores.len()).collect();
        indices.sort_by(|&a, &b| {
            self.scores[b]
                .total_cmp(&self.scores[a])
                .then_with(|| a.cmp(&b))
        });
        indices
    }
}

// ============================================================================
// Summary length
// ============================================================================

/// Rounding applied when a percentage does not resolve to a whole count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Round to nearest, `.5` rounds up (default)
    #[default]
    HalfUp,
    /// Round down
    Floor,
    /// Round up
    Ceil,
}

impl Rounding {
    /// Tolerance absorbing floating-point error in `total * percent / 100`
    const EPSILON: f64 = 1e-9;

    /// Round a non-negative amount to a whole count
    pub fn apply(self, amount: f64) -> usize {
        let amount = amount.max(0.0);
        let rounded = match self {
            Rounding::HalfUp => (amount + 0.5 + Self::EPSILON).floor(),
            Rounding::Floor => (amount + Self::EPSILON).floor(),
            Rounding::Ceil => (amount - Self::EPSILON).ceil(),
        };
        rounded.max(0.0) as usize
    }
}

/// Requested summary length
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthSpec {
    /// Absolute number of sentences
    Sentences(usize),
    /// Percentage of the document's sentence count
    Percent(f64),
}

impl LengthSpec {
    /// Check the length is positive
    pub fn validate(&self) -> Result<()> {
        match *self {
            LengthSpec::Sentences(0) => Err(SummarizerError::invalid_length(
                "sentence count must be greater than 0",
            )),
            LengthSpec::Percent(p) if !p.is_finite() || p <= 0.0 => Err(
                SummarizerError::invalid_length(format!("percentage must be positive, got {p}")),
            ),
            _ => Ok(()),
        }
    }

    /// Resolve to a sentence count for a document of `total` sentences
    ///
    /// A non-empty document always yields at least one sentence; the result
    /// never exceeds `total`.
    pub fn resolve(&self, total: usize, rounding: Rounding) -> Result<usize> {
        self.validate()?;
        if total == 0 {
            return Ok(0);
        }

        let count = match *self {
            LengthSpec::Sentences(n) => n,
            LengthSpec::Percent(p) => rounding.apply(total as f64 * p / 100.0),
        };

        Ok(count.clamp(1, total))
    }
}

impl std::str::FromStr for LengthSpec {
    type Err = SummarizerError;

    /// Parse `"3"` (sentences) or `"20%"` (percentage)
    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        let spec = if let Some(percent) = value.strip_suffix('%') {
            let p: f64 = percent.trim().parse().map_err(|_| {
                SummarizerError::invalid_length(format!("not a percentage: {value:?}"))
            })?;
            LengthSpec::Percent(p)
        } else {
            let n: usize = value.parse().map_err(|_| {
                SummarizerError::invalid_length(format!("not a sentence count: {value:?}"))
            })?;
            LengthSpec::Sentences(n)
        };

        spec.validate()?;
        Ok(spec)
    }
}

impl std::fmt::Display for LengthSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthSpec::Sentences(n) => write!(f, "{n}"),
            LengthSpec::Percent(p) => write!(f, "{p}%"),
        }
    }
}
