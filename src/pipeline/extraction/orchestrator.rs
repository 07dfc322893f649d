//! Extraction orchestrator: annotate once, run every rule over the result.

use crate::annotate::TextAnnotator;

use super::types::{ExtractedEntities, NamedEntity, ResourceType};
use super::{age, conditions, gender, intent, numbers};

/// Runs the full extraction pass over one query text.
///
/// Holds the annotation capability behind its trait seam; everything else is
/// stateless rules. `extract` never fails — a text with no recognizable
/// signal yields a default-shaped entity bag.
pub struct EntityExtractor {
    annotator: Box<dyn TextAnnotator + Send + Sync>,
}

impl EntityExtractor {
    pub fn new(annotator: Box<dyn TextAnnotator + Send + Sync>) -> Self {
        Self { annotator }
    }

    /// Extract all recognizable entities from a free-text query.
    pub fn extract(&self, text: &str) -> ExtractedEntities {
        // Match on lowercased text throughout, like the dictionaries.
        let lowered = text.to_lowercase();
        let tokens = self.annotator.annotate(&lowered);
        let spans = self.annotator.entities(&lowered);

        let intent = intent::determine_intent(&tokens, &lowered);
        let numbers = numbers::extract_numbers(&tokens);
        let conditions = conditions::extract_conditions(&tokens, &spans);
        let age_filters = age::extract_age_filters(&numbers, &lowered);
        let gender = gender::extract_gender(&tokens);

        let mut resource_hints = Vec::new();
        if !conditions.is_empty() {
            resource_hints.push(ResourceType::Condition);
        }
        resource_hints.push(ResourceType::Patient);

        let named_entities = spans
            .into_iter()
            .map(|s| NamedEntity {
                text: s.text,
                label: s.label,
            })
            .collect();

        let entities = ExtractedEntities {
            conditions,
            age_filters,
            gender,
            intent,
            resource_hints,
            numbers,
            named_entities,
        };

        tracing::debug!(
            conditions = entities.conditions.len(),
            age_filters = entities.age_filters.len(),
            gender = ?entities.gender,
            intent = ?entities.intent,
            "entities extracted"
        );

        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{EntitySpan, RuleAnnotator, Token};
    use crate::pipeline::extraction::types::{AgeFilter, Intent};

    fn extractor() -> EntityExtractor {
        EntityExtractor::new(Box::new(RuleAnnotator::new()))
    }

    #[test]
    fn diabetic_over_fifty_end_to_end() {
        let entities = extractor().extract("Show me all diabetic patients over 50");
        assert_eq!(entities.intent, Intent::Search);
        assert_eq!(entities.conditions.len(), 1);
        assert_eq!(entities.conditions[0].term, "diabetic");
        assert_eq!(entities.conditions[0].code, "44054006");
        assert_eq!(entities.age_filters, vec![AgeFilter::GreaterThan(50)]);
        assert!(entities.gender.is_none());
    }

    #[test]
    fn mixed_case_input_is_normalized() {
        let entities = extractor().extract("FIND FEMALE Patients With HYPERTENSION Under 65");
        assert_eq!(entities.conditions[0].code, "38341003");
        assert_eq!(entities.age_filters, vec![AgeFilter::LessThan(65)]);
        assert!(entities.gender.is_some());
    }

    #[test]
    fn condition_implies_condition_hint() {
        let entities = extractor().extract("patients with asthma");
        assert_eq!(
            entities.resource_hints,
            vec![ResourceType::Condition, ResourceType::Patient]
        );
    }

    #[test]
    fn patient_hint_always_present() {
        let entities = extractor().extract("show everyone");
        assert_eq!(entities.resource_hints, vec![ResourceType::Patient]);
    }

    #[test]
    fn empty_text_yields_default_shape() {
        let entities = extractor().extract("");
        assert!(entities.conditions.is_empty());
        assert!(entities.age_filters.is_empty());
        assert_eq!(entities.intent, Intent::Search);
        assert_eq!(entities.resource_hints, vec![ResourceType::Patient]);
    }

    #[test]
    fn annotator_spans_are_retained_for_observability() {
        struct SpanOnly;
        impl crate::annotate::TextAnnotator for SpanOnly {
            fn annotate(&self, _text: &str) -> Vec<Token> {
                Vec::new()
            }
            fn entities(&self, _text: &str) -> Vec<EntitySpan> {
                vec![EntitySpan {
                    text: "depression".to_string(),
                    label: "DISEASE".to_string(),
                }]
            }
        }
        let extractor = EntityExtractor::new(Box::new(SpanOnly));
        let entities = extractor.extract("anything");
        assert_eq!(entities.named_entities.len(), 1);
        assert_eq!(entities.named_entities[0].label, "DISEASE");
        // The span also fed condition matching.
        assert_eq!(entities.conditions[0].code, "35489007");
    }
}
