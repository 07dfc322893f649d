use crate::annotate::{PosTag, Token};
use crate::dictionary;

use super::types::NumberMention;

/// Tokens of context captured on each side of a numeric mention.
const CONTEXT_WINDOW: usize = 2;

/// Collect every numeric-like token with its resolved value and a context
/// window of up to two tokens either side (clipped at document bounds, the
/// mention itself excluded).
///
/// Tokens outside the digit/word-number vocabulary keep `value: None`; they
/// stay in the list for observability but never feed age-filter derivation.
pub fn extract_numbers(tokens: &[Token]) -> Vec<NumberMention> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.is_numeric_like || token.pos == PosTag::Num)
        .map(|(position, token)| {
            let start = position.saturating_sub(CONTEXT_WINDOW);
            let end = (position + CONTEXT_WINDOW + 1).min(tokens.len());
            let context = tokens[start..end]
                .iter()
                .enumerate()
                .filter(|(offset, _)| start + offset != position)
                .map(|(_, t)| t.surface.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            NumberMention {
                text: token.surface.clone(),
                value: resolve_value(&token.surface),
                context,
                position,
            }
        })
        .collect()
}

/// Direct literal parse first, then the closed word-number table.
fn resolve_value(text: &str) -> Option<u32> {
    text.parse::<u32>()
        .ok()
        .or_else(|| dictionary::word_to_number(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{RuleAnnotator, TextAnnotator};

    fn numbers_of(text: &str) -> Vec<NumberMention> {
        extract_numbers(&RuleAnnotator::new().annotate(text))
    }

    #[test]
    fn digit_literal_resolves() {
        let numbers = numbers_of("patients over 50 years");
        assert_eq!(numbers.len(), 1);
        assert_eq!(numbers[0].value, Some(50));
        assert_eq!(numbers[0].position, 2);
    }

    #[test]
    fn word_number_resolves() {
        let numbers = numbers_of("older than fifty");
        assert_eq!(numbers[0].value, Some(50));
        assert_eq!(numbers[0].text, "fifty");
    }

    #[test]
    fn context_window_two_each_side() {
        let numbers = numbers_of("all patients over 50 years old today");
        assert_eq!(numbers[0].context, "patients over years old");
    }

    #[test]
    fn context_clipped_at_document_start() {
        let numbers = numbers_of("50 year old patients");
        assert_eq!(numbers[0].context, "year old");
    }

    #[test]
    fn context_clipped_at_document_end() {
        let numbers = numbers_of("patients aged over 65");
        assert_eq!(numbers[0].context, "aged over");
    }

    #[test]
    fn two_mentions_keep_order() {
        let numbers = numbers_of("between 30 and 45 years old");
        let values: Vec<_> = numbers.iter().map(|n| n.value).collect();
        assert_eq!(values, vec![Some(30), Some(45)]);
        assert!(numbers[0].position < numbers[1].position);
    }

    #[test]
    fn no_numbers_is_empty() {
        assert!(numbers_of("show all patients with asthma").is_empty());
    }
}
