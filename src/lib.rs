//! fhirseek — natural-language FHIR search.
//!
//! Turns a free-text clinical question ("Show diabetic patients over 50")
//! into a structured FHIR search and executes it against an R4 server with
//! bounded pagination. The pipeline is strictly forward:
//!
//! text → annotations → extracted entities → structured query → fetched records
//!
//! Extraction is best-effort and total: absent features yield empty fields,
//! never errors. A failed fetch collapses to a well-formed empty result with
//! an error marker, so callers can always render "no results" instead of a
//! crash. The HTTP service wrapper around this crate is a separate concern.

pub mod annotate;
pub mod config;
pub mod dictionary;
pub mod pipeline;

pub use annotate::{RuleAnnotator, TextAnnotator};
pub use config::FhirConfig;
pub use pipeline::extraction::types::ExtractedEntities;
pub use pipeline::fetch::types::FetchResult;
pub use pipeline::processor::{ProcessedQuery, QueryProcessor};
pub use pipeline::query::types::StructuredQuery;
