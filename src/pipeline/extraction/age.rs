use std::sync::LazyLock;

use regex::Regex;

use crate::dictionary;

use super::types::{AgeFilter, NumberMention};

/// "over 50", "exactly 65" — fallback when no mention context decided.
static COMPARISON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(over|above|under|below|exactly)\s+(\d+)").expect("Invalid comparison pattern")
});

/// "between 30 and 45" — fallback range form.
static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"between\s+(\d+)\s+and\s+(\d+)").expect("Invalid range pattern")
});

/// Derive age filters from numeric mentions and their context windows.
///
/// Each resolved mention is inspected for comparison cues; "between" pairs
/// the mention with the next distinct resolved mention into a range whose
/// min/max ignore mention order. Only when no mention yields a filter does
/// the regex fallback over the raw text run. Downstream consumes at most the
/// first filter; later ones are retained, not merged.
pub fn extract_age_filters(mentions: &[NumberMention], raw_text: &str) -> Vec<AgeFilter> {
    let mut filters = Vec::new();

    for (idx, mention) in mentions.iter().enumerate() {
        let Some(value) = mention.value else {
            continue;
        };
        let context = mention.context.to_lowercase();

        if dictionary::GREATER_CUES.iter().any(|cue| context.contains(cue)) {
            filters.push(AgeFilter::GreaterThan(value));
        } else if dictionary::LESS_CUES.iter().any(|cue| context.contains(cue)) {
            filters.push(AgeFilter::LessThan(value));
        } else if context.contains("between") {
            let other = mentions[idx + 1..].iter().find_map(|m| m.value);
            if let Some(other) = other {
                filters.push(AgeFilter::Range {
                    min: value.min(other),
                    max: value.max(other),
                });
            }
        }
    }

    if filters.is_empty() {
        filters = regex_fallback(&raw_text.to_lowercase());
    }

    filters
}

fn regex_fallback(text: &str) -> Vec<AgeFilter> {
    let mut filters = Vec::new();

    if let Some(caps) = COMPARISON_PATTERN.captures(text) {
        let operator = &caps[1];
        if let Ok(value) = caps[2].parse::<u32>() {
            match operator {
                "over" | "above" => filters.push(AgeFilter::GreaterThan(value)),
                "under" | "below" => filters.push(AgeFilter::LessThan(value)),
                // "exactly" is recognized but carries no filter: the data
                // model has no equality variant.
                _ => {}
            }
        }
    }

    if let Some(caps) = RANGE_PATTERN.captures(text) {
        if let (Ok(a), Ok(b)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>()) {
            filters.push(AgeFilter::Range {
                min: a.min(b),
                max: a.max(b),
            });
        }
    }

    filters
}
