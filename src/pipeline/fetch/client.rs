use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde_json::Value;

use crate::config::FhirConfig;

use super::types::FhirTransport;
use super::FetchError;

/// FHIR JSON media type sent on every request.
const FHIR_JSON: &str = "application/fhir+json";

/// HTTP transport over a persistent session with FHIR JSON headers and a
/// fixed per-request timeout. The session is never mutated after
/// construction, so the pipeline shares it freely across invocations.
pub struct FhirClient {
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl FhirClient {
    /// Build a client from the pipeline config.
    pub fn new(config: &FhirConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(FHIR_JSON));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FHIR_JSON));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            timeout_secs: config.timeout_secs,
        }
    }

    fn map_transport_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_connect() {
            FetchError::Connection(e.to_string())
        } else if e.is_timeout() {
            FetchError::Timeout(self.timeout_secs)
        } else {
            FetchError::Http(e.to_string())
        }
    }
}

impl FhirTransport for FhirClient {
    fn get(&self, url: &str, params: &[(String, String)]) -> Result<Value, FetchError> {
        tracing::debug!(url = %url, params = params.len(), "FHIR request");

        let mut request = self.client.get(url);
        if !params.is_empty() {
            request = request.query(params);
        }
        let response = request.send().map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .map_err(|e| FetchError::MalformedPayload(e.to_string()))
    }
}
