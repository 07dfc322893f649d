//! End-to-end query orchestrator: text → entities → query → records.
//!
//! An explicit, constructed pipeline object — no process-wide globals. The
//! annotation capability and the FHIR transport enter through their trait
//! seams so the whole pipeline runs against mocks in tests. Each invocation
//! is independent; nothing is persisted across queries.

use chrono::{Datelike, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::annotate::{RuleAnnotator, TextAnnotator};
use crate::config::FhirConfig;
use crate::pipeline::extraction::orchestrator::EntityExtractor;
use crate::pipeline::extraction::types::ExtractedEntities;
use crate::pipeline::fetch::ResultFetcher;
use crate::pipeline::query::builder::build_query;
use crate::pipeline::query::types::StructuredQuery;

/// Everything one processed query produced, stage by stage. Intermediate
/// outputs are kept for observability; `resources` is what callers render.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedQuery {
    pub entities: ExtractedEntities,
    pub query: StructuredQuery,
    /// First-page URL the query renders to, for logs and echoing back.
    pub url: String,
    pub resources: Vec<Value>,
    pub total: u64,
    pub pages_fetched: u32,
    /// Set when the fetch fell back; the result is still well-formed.
    pub error: Option<String>,
}

/// The constructed pipeline: extraction, query building and fetching behind
/// one `process` call.
pub struct QueryProcessor {
    extractor: EntityExtractor,
    fetcher: ResultFetcher,
    max_pages: u32,
}

impl QueryProcessor {
    pub fn new(
        annotator: Box<dyn TextAnnotator + Send + Sync>,
        fetcher: ResultFetcher,
        config: &FhirConfig,
    ) -> Self {
        Self {
            extractor: EntityExtractor::new(annotator),
            fetcher,
            max_pages: config.max_pages,
        }
    }

    /// Default pipeline: rule-based annotator, HTTP transport from config.
    pub fn with_defaults(config: &FhirConfig) -> Self {
        Self::new(
            Box::new(RuleAnnotator::new()),
            ResultFetcher::over_http(config),
            config,
        )
    }

    /// Process a free-text query end to end. The reference year for age
    /// bounds is read from the clock here, at the boundary — see
    /// [`Self::process_at`] for the deterministic variant.
    pub fn process(&self, text: &str) -> ProcessedQuery {
        self.process_at(text, Utc::now().year())
    }

    /// Process with an explicit reference year. Deterministic given the
    /// same text, year and transport behavior.
    pub fn process_at(&self, text: &str, reference_year: i32) -> ProcessedQuery {
        tracing::info!(len = text.len(), "processing clinical query");

        let entities = self.extractor.extract(text);
        let query = build_query(&entities, reference_year);
        let url = self.fetcher.request_url(&query);
        tracing::debug!(url = %url, "structured query built");

        let fetched = self.fetcher.fetch(&query, self.max_pages);

        ProcessedQuery {
            entities,
            query,
            url,
            resources: fetched.resources,
            total: fetched.total,
            pages_fetched: fetched.pages_fetched,
            error: fetched.error,
        }
    }
}
