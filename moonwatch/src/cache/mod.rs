//! Local phase cache.
//!
//! A date's moon phase never changes, so entries are written once and kept
//! forever (bounded only by storage). Two providers implement the
//! [`PhaseCache`] trait:
//!
//! - [`JsonFileCache`] — durable, one JSON file per machine
//! - [`MemoryPhaseCache`] — process-lifetime only, used in tests and when
//!   no cache file is configured

mod disk;
mod memory;
mod traits;

pub use disk::JsonFileCache;
pub use memory::MemoryPhaseCache;
pub use traits::{CacheError, PhaseCache};
