//! Provider trait and errors.

use std::future::Future;

use thiserror::Error;

use crate::datekey::DateKey;
use crate::phase::PhaseRecord;

/// Errors that can occur while fetching a phase record.
///
/// Every variant carries the offending date so a batch caller can report
/// which day failed.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// The remote answered with a non-success status.
    #[error("Remote returned status {status} for {date}")]
    Remote { status: u16, date: DateKey },

    /// The call never completed (connectivity, TLS, ...).
    #[error("Network failure for {date}: {reason}")]
    Network { date: DateKey, reason: String },

    /// The response body did not contain the expected phase fields.
    #[error("Undecodable response for {date}: {reason}")]
    Decode { date: DateKey, reason: String },
}

/// Source of phase records for single dates.
///
/// One invocation performs exactly one outbound call; retries, caching,
/// and batching all live above this trait.
pub trait PhaseProvider: Send + Sync {
    /// Fetch the phase record for one date.
    fn fetch(
        &self,
        date: &DateKey,
    ) -> impl Future<Output = Result<PhaseRecord, ProviderError>> + Send;
}
