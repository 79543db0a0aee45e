//! Core trait for the phase cache.
//!
//! The `PhaseCache` trait is a minimal mapping from [`DateKey`] to
//! [`PhaseRecord`]. A day's phase never changes, so the interface has no
//! TTL, eviction, or invalidation surface: once written, an entry stays
//! until the store itself is cleared.
//!
//! # Design Principles
//!
//! - **Date keys**: one entry per calendar day, at most
//! - **Overwrite on put**: writing an existing key replaces the record
//! - **Dyn-compatible**: all methods are synchronous, so the orchestrator
//!   can hold an `Arc<dyn PhaseCache>`
//!
//! # Thread Safety
//!
//! Implementations must be `Send + Sync`. Operations are sequential in the
//! current model, but providers still guard their read-then-write sections
//! so a future concurrent caller cannot lose updates.

use thiserror::Error;

use crate::datekey::DateKey;
use crate::phase::PhaseRecord;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// I/O error while reading or writing the backing store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The in-memory map could not be encoded for persistence.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Mapping from calendar date to its fetched phase record.
///
/// The orchestrator is the sole writer; everything else reads. `get` on a
/// missing key is `Ok(None)`, never an error.
pub trait PhaseCache: Send + Sync {
    /// Look up the record for a date.
    fn get(&self, key: &DateKey) -> Result<Option<PhaseRecord>, CacheError>;

    /// Store a record for a date, replacing any existing entry.
    fn put(&self, key: &DateKey, record: PhaseRecord) -> Result<(), CacheError>;

    /// Check whether a date has a cached record.
    fn contains(&self, key: &DateKey) -> Result<bool, CacheError>;

    /// Number of cached entries.
    fn len(&self) -> usize;

    /// Whether the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let cache_err: CacheError = io_err.into();
        assert!(matches!(cache_err, CacheError::Io(_)));
        assert!(format!("{}", cache_err).contains("denied"));
    }
}
