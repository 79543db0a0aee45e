//! Application error types.

use thiserror::Error;

use crate::cache::CacheError;
use crate::datekey::DateError;
use crate::provider::HttpError;

/// Errors surfaced by the application trigger surface.
///
/// Per-date fetch failures are not here: those travel inside
/// [`FetchResult`](crate::orchestrator::FetchResult) so a batch can finish.
/// These are the failures that stop an operation before it produces
/// results.
#[derive(Debug, Error)]
pub enum AppError {
    /// User-supplied date was missing or unparseable; raised before any I/O.
    #[error("{0}")]
    Validation(#[from] DateError),

    /// The cache store could not be opened.
    #[error("Failed to open phase cache: {0}")]
    Cache(#[from] CacheError),

    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] HttpError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err: AppError = DateError::Missing.into();
        assert_eq!(format!("{}", err), "no date supplied");
    }

    #[test]
    fn test_config_error_display() {
        let err = AppError::Config("no API key configured".to_string());
        assert!(format!("{}", err).contains("no API key"));
    }
}
