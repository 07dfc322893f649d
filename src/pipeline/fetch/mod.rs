//! Paginated execution of a structured query against a FHIR server.
//!
//! Every failure path — connection refused, timeout, non-success status,
//! malformed payload — collapses into a well-formed empty [`types::FetchResult`]
//! with an error marker. Nothing here propagates to the caller.

pub mod types;
pub mod client;
pub mod paginate;

pub use client::FhirClient;
pub use paginate::ResultFetcher;

use thiserror::Error;

/// Internal fetch failure taxonomy. Callers never see these directly; the
/// fetcher folds them into the fallback result's error marker.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("connection to FHIR server failed: {0}")]
    Connection(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response payload: {0}")]
    MalformedPayload(String),

    #[error("HTTP client error: {0}")]
    Http(String),
}
