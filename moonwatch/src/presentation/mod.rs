//! Presentation boundary.
//!
//! The core never renders anything itself; it hands [`FetchResult`]s and
//! lifecycle signals to a host-specific [`PresentationSink`]. The sink is a
//! terminal consumer: nothing flows back into the core.

use crate::orchestrator::FetchResult;

/// Sink for resolved results and loading-state signals.
///
/// `loading_started` / `loading_ended` bracket an entire operation: for a
/// multi-date batch the loading state spans every date, not each one
/// individually. Implementations must render failures distinctly from
/// successes and keep multi-date output in submission order.
pub trait PresentationSink: Send + Sync {
    /// An operation began; show a busy indicator, disable the trigger.
    fn loading_started(&self);

    /// The operation produced all of its results; hide the indicator.
    fn loading_ended(&self);

    /// Render the sole result of a single-date operation.
    fn render_one(&self, result: &FetchResult);

    /// Render an ordered batch of results.
    fn render_many(&self, results: &[FetchResult]);
}
