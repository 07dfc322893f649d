//! Static domain dictionaries.
//!
//! Immutable tables loaded once: the medical-condition → SNOMED CT mapping,
//! the closed keyword sets driving intent/age/gender heuristics, and the
//! small word-to-number table. Extraction rules look things up here instead
//! of branching on literals.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Serialize;

/// A coded concept from a terminology system (SNOMED CT here).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodedConcept {
    pub code: &'static str,
    pub system: &'static str,
    pub display: &'static str,
}

const SNOMED: &str = "http://snomed.info/sct";

/// Free-text condition term → coded concept. Multi-word terms are matched
/// word-by-word against the document's lemma set by the extractor.
pub static CONDITION_MAPPINGS: LazyLock<BTreeMap<&'static str, CodedConcept>> =
    LazyLock::new(|| {
        BTreeMap::from([
            (
                "diabetes",
                CodedConcept {
                    code: "44054006",
                    system: SNOMED,
                    display: "Diabetes mellitus",
                },
            ),
            (
                "diabetic",
                CodedConcept {
                    code: "44054006",
                    system: SNOMED,
                    display: "Diabetes mellitus",
                },
            ),
            (
                "hypertension",
                CodedConcept {
                    code: "38341003",
                    system: SNOMED,
                    display: "Hypertension",
                },
            ),
            (
                "heart disease",
                CodedConcept {
                    code: "56265001",
                    system: SNOMED,
                    display: "Heart disease",
                },
            ),
            (
                "asthma",
                CodedConcept {
                    code: "195967001",
                    system: SNOMED,
                    display: "Asthma",
                },
            ),
            (
                "depression",
                CodedConcept {
                    code: "35489007",
                    system: SNOMED,
                    display: "Depressive disorder",
                },
            ),
            (
                "cancer",
                CodedConcept {
                    code: "363346000",
                    system: SNOMED,
                    display: "Malignant neoplastic disease",
                },
            ),
        ])
    });

/// Verbs that signal a plain search, in priority over count/aggregate.
pub const SEARCH_VERBS: &[&str] = &["show", "list", "find", "get", "display", "retrieve", "fetch"];

/// Verbs that signal a count query.
pub const COUNT_VERBS: &[&str] = &["count", "number"];

/// Verbs that signal an aggregate query.
pub const AGGREGATE_VERBS: &[&str] = &["average", "mean", "median", "sum", "total"];

/// Context cues mapping a nearby number to a lower age bound ("over 50").
pub const GREATER_CUES: &[&str] = &["over", "above", "more than", "greater"];

/// Context cues mapping a nearby number to an upper age bound ("under 65").
pub const LESS_CUES: &[&str] = &["under", "below", "less than", "younger"];

/// Tokens indicating a male-gender filter.
pub const MALE_INDICATORS: &[&str] = &["male", "man", "men", "boy", "gentleman", "guy"];

/// Tokens indicating a female-gender filter.
pub const FEMALE_INDICATORS: &[&str] = &["female", "woman", "women", "girl", "lady", "gal"];

/// Annotator entity labels treated as condition mentions.
pub const CONDITION_ENTITY_LABELS: &[&str] = &["DISEASE", "SYMPTOM"];

static WORD_NUMBERS: LazyLock<BTreeMap<&'static str, u32>> = LazyLock::new(|| {
    BTreeMap::from([
        ("one", 1),
        ("two", 2),
        ("three", 3),
        ("four", 4),
        ("five", 5),
        ("six", 6),
        ("seven", 7),
        ("eight", 8),
        ("nine", 9),
        ("ten", 10),
        ("twenty", 20),
        ("thirty", 30),
        ("forty", 40),
        ("fifty", 50),
        ("sixty", 60),
        ("seventy", 70),
        ("eighty", 80),
        ("ninety", 90),
    ])
});

/// Resolve a spelled-out number (one..ten and the tens up to ninety).
/// Anything outside the table resolves to `None`.
pub fn word_to_number(word: &str) -> Option<u32> {
    WORD_NUMBERS.get(word.to_lowercase().as_str()).copied()
}

/// Whether a lemma belongs to any of the closed intent-verb sets.
pub fn is_known_verb(lemma: &str) -> bool {
    SEARCH_VERBS.contains(&lemma)
        || COUNT_VERBS.contains(&lemma)
        || AGGREGATE_VERBS.contains(&lemma)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diabetes_and_diabetic_share_a_code() {
        let a = CONDITION_MAPPINGS.get("diabetes").unwrap();
        let b = CONDITION_MAPPINGS.get("diabetic").unwrap();
        assert_eq!(a.code, "44054006");
        assert_eq!(a.code, b.code);
    }

    #[test]
    fn all_conditions_are_snomed_coded() {
        for concept in CONDITION_MAPPINGS.values() {
            assert_eq!(concept.system, SNOMED);
            assert!(concept.code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn heart_disease_is_multi_word() {
        assert!(CONDITION_MAPPINGS.contains_key("heart disease"));
    }

    #[test]
    fn word_numbers_cover_tens() {
        assert_eq!(word_to_number("fifty"), Some(50));
        assert_eq!(word_to_number("Ninety"), Some(90));
        assert_eq!(word_to_number("eleven"), None);
        assert_eq!(word_to_number("hundred"), None);
    }

    #[test]
    fn intent_sets_are_disjoint() {
        for verb in SEARCH_VERBS {
            assert!(!COUNT_VERBS.contains(verb));
            assert!(!AGGREGATE_VERBS.contains(verb));
        }
    }

    #[test]
    fn known_verbs_span_all_sets() {
        assert!(is_known_verb("show"));
        assert!(is_known_verb("count"));
        assert!(is_known_verb("median"));
        assert!(!is_known_verb("patient"));
    }
}
