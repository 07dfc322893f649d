use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::FetchError;

/// Transport seam for FHIR GET requests.
///
/// `params` is empty for continuation requests — a `next` link already
/// encodes the full parameter set. Implemented by [`super::FhirClient`] in
/// production and by scripted transports in tests.
pub trait FhirTransport {
    fn get(&self, url: &str, params: &[(String, String)]) -> Result<Value, FetchError>;
}

/// Wire shape of a FHIR searchset Bundle — only the fields the pagination
/// loop consumes. Resources stay raw JSON; this crate does not model them.
#[derive(Debug, Deserialize)]
pub struct Bundle {
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    pub total: Option<u64>,
    #[serde(default)]
    pub entry: Vec<BundleEntry>,
    #[serde(default)]
    pub link: Vec<BundleLink>,
}

#[derive(Debug, Deserialize)]
pub struct BundleEntry {
    pub resource: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct BundleLink {
    #[serde(default)]
    pub relation: String,
    #[serde(default)]
    pub url: String,
}

impl Bundle {
    /// The continuation URL, when the server supplied one.
    pub fn next_link(&self) -> Option<&str> {
        self.link
            .iter()
            .find(|l| l.relation == "next")
            .map(|l| l.url.as_str())
    }
}

/// Outcome of a fetch. Always well-formed: when `error` is set, `total` is
/// zero and `resources` is empty, so callers can render "no results"
/// unconditionally.
#[derive(Debug, Clone, Serialize)]
pub struct FetchResult {
    pub total: u64,
    /// Raw resource records in arrival order.
    pub resources: Vec<Value>,
    /// Requests actually completed, fallback included.
    pub pages_fetched: u32,
    pub error: Option<String>,
}

impl FetchResult {
    /// The deterministic empty result every failure path resolves to.
    pub fn fallback(pages_fetched: u32, error: String) -> Self {
        Self {
            total: 0,
            resources: Vec::new(),
            pages_fetched,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn next_link_found_by_relation() {
        let bundle: Bundle = serde_json::from_value(json!({
            "resourceType": "Bundle",
            "link": [
                {"relation": "self", "url": "http://example.org/page1"},
                {"relation": "next", "url": "http://example.org/page2"}
            ]
        }))
        .unwrap();
        assert_eq!(bundle.next_link(), Some("http://example.org/page2"));
    }

    #[test]
    fn missing_next_link_is_none() {
        let bundle: Bundle = serde_json::from_value(json!({
            "resourceType": "Bundle",
            "link": [{"relation": "self", "url": "http://example.org/page1"}]
        }))
        .unwrap();
        assert_eq!(bundle.next_link(), None);
    }

    #[test]
    fn bundle_with_no_entries_parses() {
        let bundle: Bundle = serde_json::from_value(json!({
            "resourceType": "Bundle",
            "total": 0
        }))
        .unwrap();
        assert!(bundle.entry.is_empty());
        assert_eq!(bundle.total, Some(0));
    }

    #[test]
    fn fallback_is_empty_with_marker() {
        let result = FetchResult::fallback(1, "boom".to_string());
        assert_eq!(result.total, 0);
        assert!(result.resources.is_empty());
        assert_eq!(result.error.as_deref(), Some("boom"));
    }
}
