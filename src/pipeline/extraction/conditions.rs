use std::collections::HashSet;

use crate::annotate::{EntitySpan, Token};
use crate::dictionary::{self, CodedConcept};

use super::types::{ConditionMatch, ExtractionMethod};

/// Match the condition dictionary against the annotated document.
///
/// Single-word terms match a token's lemma or surface. Multi-word terms
/// match when every word appears somewhere in the document's lemma set —
/// word order and adjacency are NOT required, a known false-positive source
/// accepted for recall on short queries. Entity spans labeled as a
/// disease/symptom are additionally checked by their surface text. Matches
/// dedup by code, first occurrence wins.
pub fn extract_conditions(tokens: &[Token], spans: &[EntitySpan]) -> Vec<ConditionMatch> {
    let doc_lemmas: HashSet<&str> = tokens.iter().map(|t| t.lemma.as_str()).collect();
    let mut matches = Vec::new();

    for token in tokens {
        for (term, concept) in dictionary::CONDITION_MAPPINGS.iter() {
            let words: Vec<&str> = term.split_whitespace().collect();
            if words.len() > 1 {
                if words.iter().all(|w| doc_lemmas.contains(w)) {
                    matches.push(condition(term, concept, ExtractionMethod::MultiWordLemma));
                    break;
                }
            } else if token.lemma == *term || token.surface == *term {
                matches.push(condition(term, concept, ExtractionMethod::Lemma));
                break;
            }
        }
    }

    for span in spans {
        if !dictionary::CONDITION_ENTITY_LABELS.contains(&span.label.as_str()) {
            continue;
        }
        let surface = span.text.to_lowercase();
        if let Some(concept) = dictionary::CONDITION_MAPPINGS.get(surface.as_str()) {
            matches.push(condition(&surface, concept, ExtractionMethod::NamedEntity));
        }
    }

    dedup_by_code(matches)
}

fn condition(term: &str, concept: &CodedConcept, method: ExtractionMethod) -> ConditionMatch {
    ConditionMatch {
        term: term.to_string(),
        code: concept.code.to_string(),
        system: concept.system.to_string(),
        display: concept.display.to_string(),
        method,
    }
}

fn dedup_by_code(matches: Vec<ConditionMatch>) -> Vec<ConditionMatch> {
    let mut seen = HashSet::new();
    matches
        .into_iter()
        .filter(|m| seen.insert(m.code.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{RuleAnnotator, TextAnnotator};

    fn conditions_of(text: &str) -> Vec<ConditionMatch> {
        extract_conditions(&RuleAnnotator::new().annotate(text), &[])
    }

    #[test]
    fn diabetic_maps_to_snomed_diabetes() {
        let conditions = conditions_of("show me all diabetic patients");
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].code, "44054006");
        assert_eq!(conditions[0].term, "diabetic");
        assert_eq!(conditions[0].method, ExtractionMethod::Lemma);
    }

    #[test]
    fn repeated_term_dedups_by_code() {
        // "diabetic" and "diabetes" share a code — one match survives.
        let conditions = conditions_of("diabetic patients with diabetes");
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].code, "44054006");
    }

    #[test]
    fn multi_word_term_matches_without_adjacency() {
        // Known false-positive shape: "heart" and "disease" anywhere in the
        // document is enough.
        let conditions = conditions_of("heart patients with some disease");
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].term, "heart disease");
        assert_eq!(conditions[0].method, ExtractionMethod::MultiWordLemma);
    }

    #[test]
    fn two_distinct_conditions_keep_first_seen_order() {
        let conditions = conditions_of("patients with heart disease and diabetes");
        let terms: Vec<&str> = conditions.iter().map(|c| c.term.as_str()).collect();
        assert_eq!(terms, vec!["heart disease", "diabetes"]);
    }

    #[test]
    fn entity_span_matches_dictionary() {
        let spans = vec![EntitySpan {
            text: "Asthma".to_string(),
            label: "DISEASE".to_string(),
        }];
        let conditions = extract_conditions(&[], &spans);
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].code, "195967001");
        assert_eq!(conditions[0].method, ExtractionMethod::NamedEntity);
    }

    #[test]
    fn entity_span_with_other_label_ignored() {
        let spans = vec![EntitySpan {
            text: "asthma".to_string(),
            label: "ORG".to_string(),
        }];
        assert!(extract_conditions(&[], &spans).is_empty());
    }

    #[test]
    fn no_conditions_in_plain_text() {
        assert!(conditions_of("show me all patients over 50").is_empty());
    }
}
