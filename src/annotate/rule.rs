//! Rule-based default annotator.
//!
//! A dependency-free stand-in for a real NLP toolkit: whitespace
//! tokenization with punctuation stripping, a suffix-stripping lemmatizer
//! covering the domain vocabulary, and a closed verb set for coarse POS
//! tagging. It emits no named-entity spans. Good enough for the heuristic
//! extraction rules; swap in a real annotator via [`TextAnnotator`] when
//! linguistic quality matters.

use super::{EntitySpan, PosTag, Token, TextAnnotator};
use crate::dictionary;

/// Words ending in "s" that are already their own base form, so the plural
/// rule must leave them alone.
const KEEP_TRAILING_S: &[&str] = &[
    "diabetes", "mellitus", "less", "this", "is", "was", "has", "its", "his",
    "us", "plus", "status", "yes", "always",
];

/// Irregular plurals the suffix rules cannot reach.
const IRREGULAR_LEMMAS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("gentlemen", "gentleman"),
    ("people", "person"),
    ("children", "child"),
];

/// Dependency-free [`TextAnnotator`] implementation.
#[derive(Debug, Clone, Default)]
pub struct RuleAnnotator;

impl RuleAnnotator {
    pub fn new() -> Self {
        Self
    }

    fn lemmatize(word: &str) -> String {
        for (surface, lemma) in IRREGULAR_LEMMAS {
            if word == *surface {
                return (*lemma).to_string();
            }
        }
        if KEEP_TRAILING_S.contains(&word) || word.ends_with("ss") {
            return word.to_string();
        }
        if let Some(stem) = word.strip_suffix("ies") {
            if stem.len() > 1 {
                return format!("{stem}y");
            }
        }
        if let Some(stem) = word.strip_suffix('s') {
            if stem.len() > 1 {
                return stem.to_string();
            }
        }
        word.to_string()
    }
}

impl TextAnnotator for RuleAnnotator {
    fn annotate(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .filter_map(|raw| {
                let trimmed =
                    raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '-');
                if trimmed.is_empty() {
                    return None;
                }
                let surface = trimmed.to_lowercase();
                let lemma = Self::lemmatize(&surface);
                let is_numeric_like = surface.chars().all(|c| c.is_ascii_digit())
                    || dictionary::word_to_number(&surface).is_some();
                let pos = if is_numeric_like {
                    PosTag::Num
                } else if dictionary::is_known_verb(&lemma) {
                    PosTag::Verb
                } else {
                    PosTag::Other
                };
                Some(Token {
                    surface,
                    lemma,
                    pos,
                    is_numeric_like,
                })
            })
            .collect()
    }

    fn entities(&self, _text: &str) -> Vec<EntitySpan> {
        Vec::new()
    }
}
