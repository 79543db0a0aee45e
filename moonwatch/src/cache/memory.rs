//! In-memory cache provider.
//!
//! A `HashMap` behind a `parking_lot::RwLock`. Used when no cache file is
//! configured and as the backing store in tests. Contents do not survive
//! the process.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::cache::traits::{CacheError, PhaseCache};
use crate::datekey::DateKey;
use crate::phase::PhaseRecord;

/// Non-persistent phase cache.
#[derive(Default)]
pub struct MemoryPhaseCache {
    entries: RwLock<HashMap<DateKey, PhaseRecord>>,
}

impl MemoryPhaseCache {
    /// Create an empty in-memory cache.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PhaseCache for MemoryPhaseCache {
    fn get(&self, key: &DateKey) -> Result<Option<PhaseRecord>, CacheError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put(&self, key: &DateKey, record: PhaseRecord) -> Result<(), CacheError> {
        self.entries.write().insert(key.clone(), record);
        Ok(())
    }

    fn contains(&self, key: &DateKey) -> Result<bool, CacheError> {
        Ok(self.entries.read().contains_key(key))
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }
}
