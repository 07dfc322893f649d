use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::pipeline::extraction::types::ResourceType;

/// Reverse-chained search on condition codes: patients that are the subject
/// of a Condition carrying one of the codes.
pub const CONDITION_CODE_PARAM: &str = "_has:Condition:subject:code";

/// Date-of-birth bound parameter; values carry FHIR `ge`/`le` prefixes.
pub const BIRTHDATE_PARAM: &str = "birthdate";

/// Administrative gender equality parameter.
pub const GENDER_PARAM: &str = "gender";

/// Include directive joining the condition dimension to the patient one.
pub const CONDITION_INCLUDE: &str = "Condition:subject";

/// A fully specified FHIR search, ready for execution.
///
/// Parameter keys are unique and drawn from the closed vocabulary above;
/// a key's value list renders as repeated wire parameters (FHIR AND
/// semantics, used for the two bounds of an age range).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredQuery {
    pub resource_type: ResourceType,
    pub parameters: BTreeMap<String, Vec<String>>,
    /// `_include` directives.
    pub include: Vec<String>,
    /// Page-size hint; the fetcher caps it before sending.
    pub count: Option<u32>,
}

impl StructuredQuery {
    /// Expand the query into wire-level key/value pairs for the first page
    /// request: map entries (repeated keys for multi-value), `_include`
    /// directives, and `_count` capped at `page_cap`.
    pub fn wire_params(&self, page_cap: u32) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, values) in &self.parameters {
            for value in values {
                pairs.push((key.clone(), value.clone()));
            }
        }
        for include in &self.include {
            pairs.push(("_include".to_string(), include.clone()));
        }
        if let Some(count) = self.count {
            pairs.push(("_count".to_string(), count.min(page_cap).to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_params_repeat_multi_value_keys() {
        let query = StructuredQuery {
            resource_type: ResourceType::Patient,
            parameters: BTreeMap::from([(
                BIRTHDATE_PARAM.to_string(),
                vec!["ge1979-01-01".to_string(), "le1994-12-31".to_string()],
            )]),
            include: vec![CONDITION_INCLUDE.to_string()],
            count: Some(100),
        };
        let pairs = query.wire_params(50);
        assert_eq!(
            pairs,
            vec![
                ("birthdate".to_string(), "ge1979-01-01".to_string()),
                ("birthdate".to_string(), "le1994-12-31".to_string()),
                ("_include".to_string(), "Condition:subject".to_string()),
                ("_count".to_string(), "50".to_string()),
            ]
        );
    }

    #[test]
    fn count_below_cap_passes_through() {
        let query = StructuredQuery {
            resource_type: ResourceType::Patient,
            parameters: BTreeMap::new(),
            include: Vec::new(),
            count: Some(20),
        };
        assert_eq!(
            query.wire_params(50),
            vec![("_count".to_string(), "20".to_string())]
        );
    }
}
