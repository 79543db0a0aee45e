//! Orchestrator types and errors

use std::fmt;

use crate::datekey::DateKey;
use crate::phase::PhaseRecord;
use crate::provider::ProviderError;

/// Per-date failure reasons, as rendered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// User input was missing or not a date; raised before any I/O.
    Validation(String),
    /// The call never completed (connectivity, TLS, ...).
    Network { reason: String },
    /// The remote answered with a non-success status.
    Remote { status: u16 },
    /// The response body did not contain the expected phase fields.
    Decode { reason: String },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Validation(msg) => write!(f, "Invalid date: {}", msg),
            FetchError::Network { reason } => write!(f, "Network failure: {}", reason),
            FetchError::Remote { status } => {
                write!(f, "Failed to fetch moon phase data: CODE: {}", status)
            }
            FetchError::Decode { reason } => write!(f, "Unreadable response: {}", reason),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<ProviderError> for FetchError {
    fn from(e: ProviderError) -> Self {
        match e {
            ProviderError::Remote { status, .. } => FetchError::Remote { status },
            ProviderError::Network { reason, .. } => FetchError::Network { reason },
            ProviderError::Decode { reason, .. } => FetchError::Decode { reason },
        }
    }
}

/// Result of resolving one date.
///
/// Transient: created per request and consumed immediately by the
/// presentation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// The date this result belongs to.
    pub date: DateKey,
    /// Whether the record came from the local cache (false on failure).
    pub from_cache: bool,
    /// The record, or why it could not be produced.
    pub outcome: Result<PhaseRecord, FetchError>,
}

impl FetchResult {
    /// A record served from the local cache.
    pub fn hit(date: DateKey, record: PhaseRecord) -> Self {
        Self {
            date,
            from_cache: true,
            outcome: Ok(record),
        }
    }

    /// A record freshly fetched over the network.
    pub fn fetched(date: DateKey, record: PhaseRecord) -> Self {
        Self {
            date,
            from_cache: false,
            outcome: Ok(record),
        }
    }

    /// A failed resolution.
    pub fn failed(date: DateKey, error: FetchError) -> Self {
        Self {
            date,
            from_cache: false,
            outcome: Err(error),
        }
    }

    /// Whether a record was produced.
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_display_carries_status() {
        let err = FetchError::Remote { status: 429 };
        assert_eq!(
            format!("{}", err),
            "Failed to fetch moon phase data: CODE: 429"
        );
    }

    #[test]
    fn test_from_provider_error_drops_date_context() {
        let date = DateKey::normalize("2026-08-23").unwrap();
        let err: FetchError = ProviderError::Remote { status: 500, date }.into();
        assert_eq!(err, FetchError::Remote { status: 500 });
    }

    #[test]
    fn test_result_constructors() {
        let date = DateKey::normalize("2026-08-23").unwrap();
        let record = PhaseRecord {
            phase: "Full Moon".to_string(),
            phase_emoji: "🌕".to_string(),
        };

        let hit = FetchResult::hit(date.clone(), record.clone());
        assert!(hit.is_success());
        assert!(hit.from_cache);

        let fetched = FetchResult::fetched(date.clone(), record);
        assert!(fetched.is_success());
        assert!(!fetched.from_cache);

        let failed = FetchResult::failed(date, FetchError::Remote { status: 500 });
        assert!(!failed.is_success());
        assert!(!failed.from_cache);
    }
}
