//! Text-annotation capability consumed by the extraction pipeline.
//!
//! The pipeline does not tokenize or tag text itself; it consumes a
//! [`TextAnnotator`] and works purely on the tokens and entity spans it
//! returns. Any toolkit exposing this shape is substitutable — the built-in
//! [`rule::RuleAnnotator`] is a dependency-free default, and tests script
//! their own implementations.

pub mod rule;

pub use rule::RuleAnnotator;

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tag. Only the distinctions the extraction rules
/// actually consult — a richer tagger maps down to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PosTag {
    Verb,
    Num,
    Other,
}

/// One annotated token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Token text as it appeared in the input.
    pub surface: String,
    /// Base form, e.g. "patients" → "patient".
    pub lemma: String,
    pub pos: PosTag,
    /// True for digit literals and spelled-out numbers ("50", "fifty").
    pub is_numeric_like: bool,
}

/// A named-entity span with the annotator's label, e.g. ("diabetes", "DISEASE").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: String,
}

/// Text-annotation seam.
///
/// Both methods are infallible: an annotator that cannot say anything about
/// the input returns empty sequences, and extraction degrades gracefully.
pub trait TextAnnotator {
    /// Per-token lemma, part-of-speech tag and numeric-likeness, in input order.
    fn annotate(&self, text: &str) -> Vec<Token>;

    /// Named-entity spans with labels. May be empty for annotators without NER.
    fn entities(&self, text: &str) -> Vec<EntitySpan>;
}
