//! Application wiring and trigger implementations.

use std::sync::Arc;

use tracing::info;

use super::config::AppConfig;
use super::error::AppError;
use crate::cache::{JsonFileCache, MemoryPhaseCache, PhaseCache};
use crate::datekey::DateKey;
use crate::orchestrator::FetchOrchestrator;
use crate::presentation::PresentationSink;
use crate::provider::{ApiverveProvider, PhaseProvider, ReqwestClient};

/// Number of days covered by the week trigger (tomorrow through +7).
const WEEK_SPAN_DAYS: i64 = 7;

/// The assembled application: orchestrator plus presentation sink.
///
/// Triggers drive a fixed lifecycle per operation: the sink's loading
/// state opens before the first date is resolved and closes only after
/// every date has a result, success or failure. There is no cancellation;
/// a started operation always runs to completion.
pub struct MoonApp<P: PhaseProvider> {
    orchestrator: FetchOrchestrator<P>,
    sink: Arc<dyn PresentationSink>,
}

impl MoonApp<ApiverveProvider<ReqwestClient>> {
    /// Start the application with the given configuration.
    ///
    /// Opens (or lazily creates) the cache store, builds the HTTP client
    /// with the static credential, and wires the orchestrator.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the cache
    /// directory cannot be created. Unreadable cache *content* is not an
    /// error; it fails open to an empty cache.
    pub fn start(config: AppConfig, sink: Arc<dyn PresentationSink>) -> Result<Self, AppError> {
        let client = ReqwestClient::new(config.api_key.clone())?;
        let provider = ApiverveProvider::with_base_url(client, config.base_url.clone());

        let cache: Arc<dyn PhaseCache> = match &config.cache_file {
            Some(path) => {
                let cache = JsonFileCache::open(path)?;
                info!(path = %path.display(), entries = cache.len(), "Phase cache ready");
                Arc::new(cache)
            }
            None => Arc::new(MemoryPhaseCache::new()),
        };

        Ok(Self::with_parts(provider, cache, sink))
    }
}

impl<P: PhaseProvider> MoonApp<P> {
    /// Assemble an application from pre-built parts (tests, embedding).
    pub fn with_parts(
        provider: P,
        cache: Arc<dyn PhaseCache>,
        sink: Arc<dyn PresentationSink>,
    ) -> Self {
        Self {
            orchestrator: FetchOrchestrator::new(provider, cache),
            sink,
        }
    }

    /// The shared cache handle.
    pub fn cache(&self) -> &Arc<dyn PhaseCache> {
        self.orchestrator.cache()
    }

    /// Resolve and render today's phase.
    pub async fn load_today(&self) {
        self.run_single(DateKey::today()).await;
    }

    /// Resolve and render the next seven days, tomorrow first.
    ///
    /// Dates are resolved sequentially in order; a failure for one day
    /// still leaves the remaining days with results.
    pub async fn load_next_seven_days(&self) {
        let dates: Vec<DateKey> = (1..=WEEK_SPAN_DAYS).map(DateKey::offset).collect();

        self.sink.loading_started();
        let results = self.orchestrator.resolve_range(&dates).await;
        self.sink.render_many(&results);
        self.sink.loading_ended();
    }

    /// Resolve and render a user-supplied date.
    ///
    /// # Errors
    ///
    /// Fails fast with [`AppError::Validation`] when the input is empty or
    /// unparseable — before any loading signal, cache access, or network
    /// call.
    pub async fn load_custom_date(&self, raw: &str) -> Result<(), AppError> {
        let date = DateKey::normalize(raw)?;
        self.run_single(date).await;
        Ok(())
    }

    /// Single-date flow shared by the today and custom-date triggers.
    async fn run_single(&self, date: DateKey) {
        self.sink.loading_started();
        let result = self.orchestrator.resolve_one(&date).await;
        self.sink.render_one(&result);
        self.sink.loading_ended();
    }
}
