use std::collections::BTreeMap;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::pipeline::extraction::types::{AgeFilter, ExtractedEntities, ResourceType};

use super::types::{
    StructuredQuery, BIRTHDATE_PARAM, CONDITION_CODE_PARAM, CONDITION_INCLUDE, GENDER_PARAM,
};

/// Map an entity bag to a FHIR search specification.
///
/// Deterministic given `reference_year` — age bounds are computed from it,
/// never from the wall clock. Count, search and aggregate intents currently
/// build identical parameters; only the first age filter is consumed.
pub fn build_query(entities: &ExtractedEntities, reference_year: i32) -> StructuredQuery {
    let mut parameters: BTreeMap<String, Vec<String>> = BTreeMap::new();

    if !entities.conditions.is_empty() {
        let codes: Vec<&str> = entities.conditions.iter().map(|c| c.code.as_str()).collect();
        parameters.insert(CONDITION_CODE_PARAM.to_string(), vec![codes.join(",")]);
    }

    if let Some(filter) = entities.age_filters.first() {
        parameters.insert(BIRTHDATE_PARAM.to_string(), birthdate_bounds(filter, reference_year));
    }

    if let Some(gender) = entities.gender {
        parameters.insert(GENDER_PARAM.to_string(), vec![gender.as_str().to_string()]);
    }

    let include = if entities.conditions.is_empty() {
        Vec::new()
    } else {
        vec![CONDITION_INCLUDE.to_string()]
    };

    StructuredQuery {
        resource_type: ResourceType::Patient,
        parameters,
        include,
        count: Some(DEFAULT_PAGE_SIZE),
    }
}

/// Translate an age filter into birth-date bound values.
///
/// Someone older than A was born in or before (referenceYear − A); someone
/// younger was born in or after it. Ranges produce both bounds.
fn birthdate_bounds(filter: &AgeFilter, reference_year: i32) -> Vec<String> {
    match filter {
        AgeFilter::GreaterThan(age) => {
            vec![format!("le{}-12-31", reference_year - *age as i32)]
        }
        AgeFilter::LessThan(age) => {
            vec![format!("ge{}-01-01", reference_year - *age as i32)]
        }
        AgeFilter::Range { min, max } => vec![
            format!("ge{}-01-01", reference_year - *max as i32),
            format!("le{}-12-31", reference_year - *min as i32),
        ],
    }
}
