//! HTTP client abstraction for testability.

use std::future::Future;

use thiserror::Error;

/// Errors surfaced by an HTTP client.
///
/// Split by the two failure modes the caller must distinguish: the remote
/// answered with a non-success status, or the call never completed at all.
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    /// The remote responded with a non-2xx status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// The request could not be completed (connectivity, TLS, ...).
    #[error("Network error: {0}")]
    Network(String),
}

/// Trait for HTTP GET operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests. Success is determined solely
/// by the HTTP status; the body is returned untouched.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    ///
    /// # Returns
    ///
    /// The response body as bytes on a 2xx status, otherwise an error.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send;
}

/// Real HTTP client implementation using reqwest.
///
/// Sends the static API credential as an `X-API-Key` header on every
/// request. Relies on reqwest's default timeout behavior; there is no
/// retry layer.
pub struct ReqwestClient {
    client: reqwest::Client,
    api_key: String,
}

/// Credential header expected by the remote API.
const API_KEY_HEADER: &str = "X-API-Key";

impl ReqwestClient {
    /// Creates a new client carrying the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| HttpError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send {
        let request = self
            .client
            .get(url)
            .header(API_KEY_HEADER, self.api_key.clone());

        async move {
            let response = request
                .send()
                .await
                .map_err(|e| HttpError::Network(format!("Request failed: {}", e)))?;

            if !response.status().is_success() {
                return Err(HttpError::Status(response.status().as_u16()));
            }

            response
                .bytes()
                .await
                .map(|b| b.to_vec())
                .map_err(|e| HttpError::Network(format!("Failed to read response: {}", e)))
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock HTTP client for testing.
    ///
    /// Returns a fixed response, records every requested URL, and counts
    /// calls so tests can assert on network traffic.
    pub struct MockHttpClient {
        pub response: Result<Vec<u8>, HttpError>,
        pub calls: AtomicUsize,
        pub urls: Mutex<Vec<String>>,
    }

    impl MockHttpClient {
        pub fn new(response: Result<Vec<u8>, HttpError>) -> Self {
            Self {
                response,
                calls: AtomicUsize::new(0),
                urls: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(&self, url: &str) -> impl std::future::Future<Output = Result<Vec<u8>, HttpError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.urls.lock().unwrap().push(url.to_string());
            let response = self.response.clone();
            async move { response }
        }
    }

    #[tokio::test]
    async fn test_mock_client_success() {
        let mock = MockHttpClient::new(Ok(vec![1, 2, 3, 4]));

        let result = mock.get("http://example.com").await;
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_client_records_urls() {
        let mock = MockHttpClient::new(Ok(vec![]));

        mock.get("http://example.com/a").await.unwrap();
        mock.get("http://example.com/b").await.unwrap();

        let urls = mock.urls.lock().unwrap();
        assert_eq!(urls.as_slice(), ["http://example.com/a", "http://example.com/b"]);
    }

    #[tokio::test]
    async fn test_mock_client_error() {
        let mock = MockHttpClient::new(Err(HttpError::Status(503)));

        let result = mock.get("http://example.com").await;
        assert!(matches!(result, Err(HttpError::Status(503))));
    }
}
