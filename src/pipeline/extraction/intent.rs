use crate::annotate::{PosTag, Token};
use crate::dictionary;

use super::types::Intent;

/// Phrases that signal a count query when no verb already decided it.
const COUNT_PHRASES: &[&str] = &["how many", "number of"];

/// Phrases that signal an aggregate query.
const AGGREGATE_PHRASES: &[&str] = &["average", "mean", "median"];

/// Classify the query's intent from its tokens.
///
/// The first token in order that is a verb or a known intent keyword
/// decides, with search > count > aggregate priority inside that token.
/// A "many" lemma anywhere promotes an otherwise undecided verb to count
/// ("how many patients have …"). When no token decides, fixed phrases over
/// the raw text do; the default is a plain search.
pub fn determine_intent(tokens: &[Token], raw_text: &str) -> Intent {
    let has_many = tokens.iter().any(|t| t.lemma == "many");

    for token in tokens {
        let lemma = token.lemma.as_str();
        if token.pos != PosTag::Verb && !dictionary::is_known_verb(lemma) {
            continue;
        }
        if dictionary::SEARCH_VERBS.contains(&lemma) {
            return Intent::Search;
        }
        if dictionary::COUNT_VERBS.contains(&lemma) || has_many {
            return Intent::Count;
        }
        if dictionary::AGGREGATE_VERBS.contains(&lemma) {
            return Intent::Aggregate;
        }
    }

    let lower = raw_text.to_lowercase();
    if COUNT_PHRASES.iter().any(|p| lower.contains(p)) {
        return Intent::Count;
    }
    if AGGREGATE_PHRASES.iter().any(|p| lower.contains(p)) {
        return Intent::Aggregate;
    }

    Intent::Search
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{RuleAnnotator, TextAnnotator};

    fn intent_of(text: &str) -> Intent {
        let tokens = RuleAnnotator::new().annotate(text);
        determine_intent(&tokens, text)
    }

    #[test]
    fn show_is_search() {
        assert_eq!(intent_of("Show me all diabetic patients"), Intent::Search);
    }

    #[test]
    fn list_and_find_are_search() {
        assert_eq!(intent_of("List patients with asthma"), Intent::Search);
        assert_eq!(intent_of("Find female patients"), Intent::Search);
    }

    #[test]
    fn count_verb_is_count() {
        assert_eq!(intent_of("Count patients with depression"), Intent::Count);
    }

    #[test]
    fn how_many_phrase_is_count() {
        assert_eq!(intent_of("How many male patients have depression?"), Intent::Count);
    }

    #[test]
    fn number_of_phrase_is_count() {
        assert_eq!(intent_of("the number of patients with cancer"), Intent::Count);
    }

    #[test]
    fn average_is_aggregate() {
        assert_eq!(intent_of("average age of patients with asthma"), Intent::Aggregate);
    }

    #[test]
    fn first_verb_in_token_order_wins() {
        // "show" precedes "count", so search wins.
        assert_eq!(intent_of("show the count of patients"), Intent::Search);
    }

    #[test]
    fn defaults_to_search() {
        assert_eq!(intent_of("patients with hypertension"), Intent::Search);
    }
}
