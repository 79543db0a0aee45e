//! Fetch orchestration
//!
//! Resolves dates to phase records cache-first, falling back to the
//! provider and writing successes through to the cache. Multi-date ranges
//! are resolved sequentially and in order.

mod resolve;
mod types;

pub use resolve::FetchOrchestrator;
pub use types::{FetchError, FetchResult};

#[cfg(test)]
pub use resolve::tests::ScriptedProvider;
