/// Crate-level constants
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default FHIR endpoint (public HAPI R4 test server).
pub const DEFAULT_BASE_URL: &str = "https://hapi.fhir.org/baseR4";

/// Page-size hint attached to every structured query.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Hard cap on the per-page `_count` sent to the server, regardless of the
/// query's own hint.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Default bound on pagination requests per fetch.
pub const DEFAULT_MAX_PAGES: u32 = 3;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the FHIR query pipeline.
///
/// Everything is fixed at construction; the pipeline never mutates it.
#[derive(Debug, Clone)]
pub struct FhirConfig {
    /// Base URL of the FHIR server, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds (timeouts fall back like any other
    /// transport failure).
    pub timeout_secs: u64,
    /// Page-size hint the query builder attaches to every query.
    pub page_size: u32,
    /// Upper bound on the `_count` actually sent per page.
    pub max_page_size: u32,
    /// Upper bound on pagination requests per fetch.
    pub max_pages: u32,
}

impl Default for FhirConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl FhirConfig {
    /// Config pointing at a specific server, defaults for everything else.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}
