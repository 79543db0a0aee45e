//! Cache-first resolution of dates to phase records.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::PhaseCache;
use crate::datekey::DateKey;
use crate::orchestrator::types::FetchResult;
use crate::provider::PhaseProvider;

/// Resolves dates to phase records, consulting the cache before the network.
///
/// The orchestrator is the sole writer to the cache: successful fetches are
/// written through immediately, failures are never cached so a later
/// attempt starts fresh.
pub struct FetchOrchestrator<P: PhaseProvider> {
    provider: P,
    cache: Arc<dyn PhaseCache>,
}

impl<P: PhaseProvider> FetchOrchestrator<P> {
    /// Creates an orchestrator over a provider and a cache.
    pub fn new(provider: P, cache: Arc<dyn PhaseCache>) -> Self {
        Self { provider, cache }
    }

    /// The shared cache handle.
    pub fn cache(&self) -> &Arc<dyn PhaseCache> {
        &self.cache
    }

    /// Resolve a single date.
    ///
    /// Cache hits never touch the network. On a miss the provider is
    /// called once and a success is written through before returning.
    /// Errors are converted into a failed [`FetchResult`], never
    /// propagated, so batch callers can keep going.
    pub async fn resolve_one(&self, date: &DateKey) -> FetchResult {
        match self.cache.get(date) {
            Ok(Some(record)) => {
                debug!(%date, "Cache hit");
                return FetchResult::hit(date.clone(), record);
            }
            Ok(None) => {}
            Err(e) => {
                // Unreadable cache is treated as a miss; the fetch below
                // still produces a result.
                warn!(%date, error = %e, "Cache read failed");
            }
        }

        debug!(%date, "Cache miss, fetching");
        match self.provider.fetch(date).await {
            Ok(record) => {
                if let Err(e) = self.cache.put(date, record.clone()) {
                    warn!(%date, error = %e, "Cache write failed");
                }
                FetchResult::fetched(date.clone(), record)
            }
            Err(e) => {
                debug!(%date, error = %e, "Fetch failed");
                FetchResult::failed(date.clone(), e.into())
            }
        }
    }

    /// Resolve a sequence of dates, in order.
    ///
    /// Dates are resolved strictly sequentially, not concurrently: the
    /// loading state spans the whole batch and the remote API sees at most
    /// one in-flight call. A failure on one date does not abort the rest;
    /// the output always has one result per input date, in input order.
    pub async fn resolve_range(&self, dates: &[DateKey]) -> Vec<FetchResult> {
        let mut results = Vec::with_capacity(dates.len());
        for date in dates {
            results.push(self.resolve_one(date).await);
        }
        results
    }
}
