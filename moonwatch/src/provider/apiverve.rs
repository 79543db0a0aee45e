//! Apiverve moon-phase provider.
//!
//! Fetches phase data from the apiverve moonphases endpoint.
//!
//! # Request Contract
//!
//! `GET {base}?date={YYYY-MM-DD}` with an `X-API-Key` header (set by the
//! HTTP client). Success is determined solely by the HTTP status; the body
//! is expected to nest the phase name and symbol under a `data` object:
//!
//! ```json
//! { "data": { "phase": "Full Moon", "phaseEmoji": "🌕" } }
//! ```
//!
//! Both fields are passed through opaquely. Extra body fields are ignored.

use serde::Deserialize;
use tracing::debug;

use crate::datekey::DateKey;
use crate::phase::PhaseRecord;
use crate::provider::http::{HttpClient, HttpError};
use crate::provider::types::{PhaseProvider, ProviderError};

/// Default apiverve moonphases endpoint.
pub const APIVERVE_BASE_URL: &str = "https://api.apiverve.com/v1/moonphases";

/// Response envelope around the phase payload.
#[derive(Debug, Deserialize)]
struct ApiverveEnvelope {
    data: PhaseRecord,
}

/// Moon-phase provider backed by the apiverve REST API.
pub struct ApiverveProvider<C: HttpClient> {
    http_client: C,
    base_url: String,
}

impl<C: HttpClient> ApiverveProvider<C> {
    /// Creates a provider against the default endpoint.
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client carrying the API credential
    pub fn new(http_client: C) -> Self {
        Self::with_base_url(http_client, APIVERVE_BASE_URL)
    }

    /// Creates a provider against a custom endpoint (tests, proxies).
    pub fn with_base_url(http_client: C, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Builds the request URL for the given date.
    fn build_url(&self, date: &DateKey) -> String {
        format!("{}?date={}", self.base_url, date)
    }
}

impl<C: HttpClient> PhaseProvider for ApiverveProvider<C> {
    async fn fetch(&self, date: &DateKey) -> Result<PhaseRecord, ProviderError> {
        let url = self.build_url(date);
        debug!(%date, "Fetching moon phase");

        let body = self.http_client.get(&url).await.map_err(|e| match e {
            HttpError::Status(status) => ProviderError::Remote {
                status,
                date: date.clone(),
            },
            HttpError::Network(reason) => ProviderError::Network {
                date: date.clone(),
                reason,
            },
        })?;

        let envelope: ApiverveEnvelope =
            serde_json::from_slice(&body).map_err(|e| ProviderError::Decode {
                date: date.clone(),
                reason: e.to_string(),
            })?;

        Ok(envelope.data)
    }
}
