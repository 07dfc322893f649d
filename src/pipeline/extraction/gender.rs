use crate::annotate::Token;
use crate::dictionary;

use super::types::Gender;

/// First token whose lemma or surface sits in one of the closed gender
/// indicator sets decides; no aggregation of later signals and no conflict
/// resolution when both appear.
pub fn extract_gender(tokens: &[Token]) -> Option<Gender> {
    for token in tokens {
        let lemma = token.lemma.as_str();
        let surface = token.surface.as_str();
        if dictionary::MALE_INDICATORS.contains(&lemma)
            || dictionary::MALE_INDICATORS.contains(&surface)
        {
            return Some(Gender::Male);
        }
        if dictionary::FEMALE_INDICATORS.contains(&lemma)
            || dictionary::FEMALE_INDICATORS.contains(&surface)
        {
            return Some(Gender::Female);
        }
    }
    None
}
