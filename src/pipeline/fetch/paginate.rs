//! Bounded pagination loop with deterministic fallback.

use serde_json::Value;

use crate::config::FhirConfig;
use crate::pipeline::query::types::StructuredQuery;

use super::types::{Bundle, FetchResult, FhirTransport};
use super::{FetchError, FhirClient};

/// Executes structured queries against a paginated FHIR collection.
///
/// Follows `next` links up to the page bound, accumulating records in
/// arrival order. A failure on any page abandons the whole fetch — no
/// retries — and resolves to [`FetchResult::fallback`].
pub struct ResultFetcher {
    transport: Box<dyn FhirTransport + Send + Sync>,
    base_url: String,
    max_page_size: u32,
}

impl ResultFetcher {
    pub fn new(transport: Box<dyn FhirTransport + Send + Sync>, config: &FhirConfig) -> Self {
        Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_page_size: config.max_page_size,
        }
    }

    /// Fetcher over a real HTTP session built from the config.
    pub fn over_http(config: &FhirConfig) -> Self {
        Self::new(Box::new(FhirClient::new(config)), config)
    }

    /// First-page URL for a query, parameters included. Observability only;
    /// the actual requests are issued by [`Self::fetch`].
    pub fn request_url(&self, query: &StructuredQuery) -> String {
        let base = format!("{}/{}", self.base_url, query.resource_type.as_str());
        let params = query.wire_params(self.max_page_size);
        if params.is_empty() {
            return base;
        }
        let rendered: Vec<String> = params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        format!("{}?{}", base, rendered.join("&"))
    }

    /// Execute the query, following continuation links up to `max_pages`
    /// requests. Never fails: all error paths resolve to a fallback result.
    pub fn fetch(&self, query: &StructuredQuery, max_pages: u32) -> FetchResult {
        match self.try_fetch(query, max_pages) {
            Ok(result) => result,
            Err((pages_fetched, error)) => {
                tracing::warn!(
                    pages_fetched,
                    error = %error,
                    "FHIR fetch failed, returning fallback result"
                );
                FetchResult::fallback(pages_fetched, error.to_string())
            }
        }
    }

    fn try_fetch(
        &self,
        query: &StructuredQuery,
        max_pages: u32,
    ) -> Result<FetchResult, (u32, FetchError)> {
        let first_params = query.wire_params(self.max_page_size);
        let mut current_url = format!("{}/{}", self.base_url, query.resource_type.as_str());
        let mut resources: Vec<Value> = Vec::new();
        let mut reported_total: Option<u64> = None;
        let mut pages_fetched = 0u32;

        while pages_fetched < max_pages {
            // Only the first request carries parameters; a next link
            // already encodes them.
            let params: &[(String, String)] = if pages_fetched == 0 {
                &first_params
            } else {
                &[]
            };
            let payload = self
                .transport
                .get(&current_url, params)
                .map_err(|e| (pages_fetched, e))?;
            pages_fetched += 1;

            if payload.get("resourceType").and_then(Value::as_str) != Some("Bundle") {
                // Single-record response: done immediately.
                return Ok(FetchResult {
                    total: 1,
                    resources: vec![payload],
                    pages_fetched,
                    error: None,
                });
            }

            let bundle: Bundle = serde_json::from_value(payload)
                .map_err(|e| (pages_fetched, FetchError::MalformedPayload(e.to_string())))?;

            resources.extend(bundle.entry.iter().filter_map(|e| e.resource.clone()));
            if let Some(total) = bundle.total {
                reported_total = Some(total);
            }

            match bundle.next_link() {
                Some(next) => current_url = next.to_string(),
                None => break,
            }
        }

        let total = reported_total.unwrap_or(resources.len() as u64);
        tracing::debug!(total, pages_fetched, "FHIR fetch complete");

        Ok(FetchResult {
            total,
            resources,
            pages_fetched,
            error: None,
        })
    }
}
