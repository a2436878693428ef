//! Process-lifetime cache of car records keyed by normalized query.
//!
//! Entries are never expired or evicted. Lookups and inserts normalize the
//! key the same way, so "Tesla Model S" and " tesla model s " share a slot.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::traits::CarStore;
use crate::types::CarRecord;

/// Case-fold and trim a query for use as a cache key.
pub fn normalize_key(query: &str) -> String {
    query.trim().to_lowercase()
}

#[derive(Debug, Default)]
pub struct CarCache {
    entries: RwLock<HashMap<String, CarRecord>>,
}

impl CarCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, key: &str) -> Option<CarRecord> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&normalize_key(key)).cloned()
    }

    /// Last write wins for a repeated key.
    pub fn insert(&self, key: &str, record: CarRecord) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(normalize_key(key), record);
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CarStore for CarCache {
    fn lookup(&self, key: &str) -> Option<CarRecord> { Self::lookup(self, key) }
    fn insert(&self, key: &str, record: CarRecord) { Self::insert(self, key, record) }
}
