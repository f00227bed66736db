//! Result Cache Module
//!
//! In-memory mapping from canonical calculation keys to computed results,
//! with per-entry TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};
use crate::error::Result;

// == Result Cache ==
/// Memoizes computed results under canonical keys.
///
/// Every entry carries the same fixed TTL, restarted on each update. A key
/// maps to at most one live entry. Expired entries are removed lazily on
/// access and eagerly by the background purge task; neither path ever
/// returns expired data.
#[derive(Debug)]
pub struct ResultCache {
    /// Key to cached-result storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Fixed per-entry time-to-live
    ttl: Duration,
}

impl ResultCache {
    // == Constructor ==
    /// Creates a new ResultCache with the given entry lifetime.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == Get ==
    /// Looks up a live cached result.
    ///
    /// Returns `None` when the key is absent or its entry has expired; an
    /// expired entry is removed on the spot and counted as a miss. Lookups
    /// never extend an entry's lifetime.
    pub fn get(&mut self, key: &str) -> Option<f64> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.stats.record_expiration();
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                None
            }
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set Or Update ==
    /// Inserts or overwrites the result for a key.
    ///
    /// Overwriting replaces the stored value and restarts the TTL countdown
    /// from this moment, whether or not the value changed. The only failure
    /// mode is an internal storage fault; callers treat a failed store as
    /// "not cached" and keep serving the computed value.
    pub fn set_or_update(&mut self, key: &str, value: f64) -> Result<()> {
        let entry = CacheEntry::new(value, self.ttl);
        self.entries.insert(key.to_string(), entry);
        self.stats.set_total_entries(self.entries.len());
        Ok(())
    }

    // == Invalidate ==
    /// Removes an entry regardless of expiry.
    ///
    /// Returns true if an entry was present.
    #[allow(dead_code)]
    pub fn invalidate(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.stats.record_expiration();
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
