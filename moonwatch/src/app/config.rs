//! Application configuration for MoonApp.

use std::path::PathBuf;

use super::error::AppError;
use crate::config::{ConfigFile, API_KEY_ENV};
use crate::provider::APIVERVE_BASE_URL;

/// Top-level configuration passed to [`MoonApp::start`](super::MoonApp::start).
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Endpoint base URL.
    pub base_url: String,

    /// Static API credential sent as the `X-API-Key` header.
    pub api_key: String,

    /// JSON cache file. `None` selects an in-memory cache (no persistence).
    pub cache_file: Option<PathBuf>,
}

impl AppConfig {
    /// Create a config with the default endpoint and no persistent cache.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: APIVERVE_BASE_URL.to_string(),
            api_key: api_key.into(),
            cache_file: None,
        }
    }

    /// Set the endpoint base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the cache file location.
    pub fn with_cache_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_file = Some(path.into());
        self
    }

    /// Build application config from the loaded configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] when no API key is available from
    /// either the environment or the file.
    pub fn from_config_file(config: &ConfigFile) -> Result<Self, AppError> {
        let api_key = config.api_key().ok_or_else(|| {
            AppError::Config(format!(
                "no API key configured; set {} or add `key` to the [api] section of config.ini",
                API_KEY_ENV
            ))
        })?;

        Ok(Self {
            base_url: config.api.base_url.clone(),
            api_key,
            cache_file: Some(config.cache.file.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_endpoint() {
        let config = AppConfig::new("abc123");
        assert_eq!(config.base_url, APIVERVE_BASE_URL);
        assert_eq!(config.api_key, "abc123");
        assert!(config.cache_file.is_none());
    }

    #[test]
    fn test_builders() {
        let config = AppConfig::new("abc123")
            .with_base_url("http://localhost:9999")
            .with_cache_file("/tmp/phases.json");
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.cache_file, Some(PathBuf::from("/tmp/phases.json")));
    }

    #[test]
    fn test_from_config_file_requires_api_key() {
        // Keyless file and (assumed) unset env var.
        let file = ConfigFile::default();
        if std::env::var(API_KEY_ENV).is_ok() {
            return; // environment provides a key; nothing to assert here
        }
        match AppConfig::from_config_file(&file) {
            Err(AppError::Config(msg)) => assert!(msg.contains("no API key")),
            other => panic!("Expected Config error, got {:?}", other.map(|_| ())),
        }
    }
}
