//! Configuration file handling.
//!
//! Settings live in an INI file at `<config dir>/moonwatch/config.ini`:
//!
//! ```ini
//! [api]
//! key = your-api-key
//! base_url = https://api.apiverve.com/v1/moonphases
//!
//! [cache]
//! file = /home/user/.cache/moonwatch/phases.json
//! ```
//!
//! Every setting is optional; a missing file yields the defaults. The
//! `MOONWATCH_API_KEY` environment variable overrides the configured key,
//! so the credential never has to be written to disk at all.

use std::path::PathBuf;

use ini::Ini;
use thiserror::Error;

use crate::provider::APIVERVE_BASE_URL;

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "MOONWATCH_API_KEY";

/// Errors while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read or parsed.
    #[error("Failed to read config file: {0}")]
    Load(#[from] ini::Error),
}

/// API endpoint settings.
#[derive(Debug, Clone)]
pub struct ApiSection {
    /// Static API key, if configured in the file.
    pub key: Option<String>,
    /// Endpoint base URL.
    pub base_url: String,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            key: None,
            base_url: APIVERVE_BASE_URL.to_string(),
        }
    }
}

/// Cache location settings.
#[derive(Debug, Clone)]
pub struct CacheSection {
    /// Path of the JSON cache file.
    pub file: PathBuf,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            file: default_cache_file(),
        }
    }
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub api: ApiSection,
    pub cache: CacheSection,
}

impl ConfigFile {
    /// Load the configuration from the default location.
    ///
    /// A missing file is not an error; it yields [`ConfigFile::default`].
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load the configuration from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file(path)?;
        let mut config = Self::default();

        if let Some(api) = ini.section(Some("api")) {
            if let Some(key) = api.get("key") {
                config.api.key = Some(key.to_string());
            }
            if let Some(base_url) = api.get("base_url") {
                config.api.base_url = base_url.to_string();
            }
        }

        if let Some(cache) = ini.section(Some("cache")) {
            if let Some(file) = cache.get("file") {
                config.cache.file = PathBuf::from(file);
            }
        }

        Ok(config)
    }

    /// The effective API key: environment override first, then the file.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV).ok().or_else(|| self.api.key.clone())
    }
}

/// Location of the configuration file, if a config directory exists.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("moonwatch").join("config.ini"))
}

/// Default location of the JSON cache file.
pub fn default_cache_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("moonwatch")
        .join("phases.json")
}
