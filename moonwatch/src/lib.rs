//! Moonwatch - lunar phase lookup with a local cache
//!
//! This library fetches moon-phase data for calendar dates from a remote
//! REST API, caches every successful result on the local machine, and hands
//! rendered-ready results to a host-specific presentation sink.
//!
//! # Architecture
//!
//! ```text
//! Trigger (today / week / custom date)
//!     └── MoonApp ──► FetchOrchestrator ──► PhaseCache (hit?)
//!                             │                  │ miss
//!                             │                  ▼
//!                             │             PhaseProvider ──► HTTP API
//!                             ▼
//!                     PresentationSink (terminal, tests, ...)
//! ```
//!
//! The cache is checked before every network call, successful fetches are
//! written through immediately, and failures are never cached so a later
//! attempt starts fresh.

pub mod app;
pub mod cache;
pub mod config;
pub mod datekey;
pub mod orchestrator;
pub mod phase;
pub mod presentation;
pub mod provider;

/// Library version, sourced from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
