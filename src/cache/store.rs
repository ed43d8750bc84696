//! Cache Store Module
//!
//! In-memory key-value store with per-entry TTL expiration and hit/miss
//! accounting. Eviction is lazy on access plus the periodic sweep; there is
//! no size bound and no eviction on insert.

use std::collections::HashMap;

use crate::cache::{hit_rate, CacheEntry, CacheStats};
use crate::clock::now_ms;

// == Cache Store ==
/// TTL cache over string keys. Absence is signalled through return values;
/// no operation here can fail.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// TTL in milliseconds applied when `set` receives no usable TTL
    default_ttl: u64,
    /// Successful lookups
    hits: u64,
    /// Failed lookups
    misses: u64,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store with the given default TTL in milliseconds.
    pub fn new(default_ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            default_ttl,
            hits: 0,
            misses: 0,
        }
    }

    // == Set ==
    /// Stores a value under `key`, replacing any previous entry.
    ///
    /// `ttl_ms` of `None` falls back to the default TTL. A TTL of `Some(0)`
    /// also falls back to the default rather than expiring immediately,
    /// matching the behavior callers already rely on.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl_ms: Option<u64>) {
        let effective_ttl = match ttl_ms {
            Some(ttl) if ttl > 0 => ttl,
            _ => self.default_ttl,
        };
        self.entries
            .insert(key.into(), CacheEntry::new(value, effective_ttl));
    }

    // == Get ==
    /// Retrieves the value for `key` if a live entry exists.
    ///
    /// A live entry counts as a hit. A missing key counts as a miss, and an
    /// expired entry counts as a miss and is removed on the spot. Presence
    /// is decided on the entry, not the value, so an "empty" stored value
    /// (e.g. `None` when `V = Option<T>`) is still a hit.
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            None => {
                self.misses += 1;
                None
            }
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.misses += 1;
                None
            }
            Some(entry) => {
                self.hits += 1;
                Some(entry.data.clone())
            }
        }
    }

    // == Has ==
    /// Returns true iff a live entry exists for `key`.
    ///
    /// Removes a found-but-expired entry, exactly like `get`, but never
    /// touches the hit/miss counters.
    pub fn has(&mut self, key: &str) -> bool {
        match self.entries.get(key) {
            None => false,
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                false
            }
            Some(_) => true,
        }
    }

    // == Delete ==
    /// Removes the entry for `key` if present. Absent keys are not an error.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes all entries and resets both counters. The store stays usable.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    // == Cleanup ==
    /// Removes every expired entry and returns how many were removed.
    ///
    /// Runs on the sweep interval, and is safe to call directly at any time,
    /// including on an empty store.
    pub fn cleanup(&mut self) -> usize {
        let now = now_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        before - self.entries.len()
    }

    // == Length ==
    /// Raw entry count, including expired entries that have not been swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Stats ==
    /// Builds a statistics snapshot.
    ///
    /// `oldest_entry`/`newest_entry` only consider live entries; the scan
    /// skips expired ones without deleting them, so `size` can exceed the
    /// live count until the next sweep.
    pub fn stats(&self) -> CacheStats {
        let now = now_ms();
        let mut oldest_entry: Option<u64> = None;
        let mut newest_entry: Option<u64> = None;

        for entry in self.entries.values() {
            if entry.is_expired_at(now) {
                continue;
            }
            if oldest_entry.map_or(true, |ts| entry.created_at < ts) {
                oldest_entry = Some(entry.created_at);
            }
            if newest_entry.map_or(true, |ts| entry.created_at > ts) {
                newest_entry = Some(entry.created_at);
            }
        }

        CacheStats {
            size: self.entries.len(),
            max_size: None,
            default_ttl: self.default_ttl,
            hits: self.hits,
            misses: self.misses,
            hit_rate: hit_rate(self.hits, self.misses),
            oldest_entry,
            newest_entry,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    const TEST_TTL: u64 = 300_000;

    #[test]
    fn test_store_new() {
        let store: CacheStore<String> = CacheStore::new(TEST_TTL);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_set_and_get() {
        let mut store = CacheStore::new(TEST_TTL);

        store.set("key1", "value1".to_string(), None);

        assert_eq!(store.get("key1"), Some("value1".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_missing_counts_miss() {
        let mut store: CacheStore<String> = CacheStore::new(TEST_TTL);

        assert_eq!(store.get("nonexistent"), None);

        let stats = store.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_store_empty_value_is_a_hit() {
        // Entry presence decides hit/miss, not the stored value.
        let mut store: CacheStore<Option<String>> = CacheStore::new(TEST_TTL);

        store.set("nothing", None, None);

        assert_eq!(store.get("nothing"), Some(None));
        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 0);
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new(TEST_TTL);

        store.set("key1", "value1".to_string(), None);
        store.set("key1", "value2".to_string(), None);

        assert_eq!(store.get("key1"), Some("value2".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_ttl_expiration() {
        let mut store = CacheStore::new(TEST_TTL);

        store.set("key1", "value1".to_string(), Some(50));
        assert_eq!(store.get("key1"), Some("value1".to_string()));

        sleep(Duration::from_millis(80));

        assert_eq!(store.get("key1"), None);
        // Lazy eviction removed the entry on lookup
        assert_eq!(store.len(), 0);

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_store_zero_ttl_uses_default() {
        let mut store = CacheStore::new(TEST_TTL);

        store.set("key1", "value1".to_string(), Some(0));

        // Would be gone immediately if zero were honored as-is
        assert_eq!(store.get("key1"), Some("value1".to_string()));
    }

    #[test]
    fn test_store_has_does_not_touch_counters() {
        let mut store = CacheStore::new(TEST_TTL);

        store.set("key1", "value1".to_string(), None);
        assert!(store.has("key1"));
        assert!(!store.has("nonexistent"));

        let stats = store.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
    }

    #[test]
    fn test_store_has_evicts_expired() {
        let mut store = CacheStore::new(TEST_TTL);

        store.set("key1", "value1".to_string(), Some(50));
        sleep(Duration::from_millis(80));

        assert!(!store.has("key1"));
        assert_eq!(store.len(), 0);
        assert_eq!(store.stats().misses, 0);
    }

    #[test]
    fn test_store_delete() {
        let mut store = CacheStore::new(TEST_TTL);

        store.set("key1", "value1".to_string(), None);

        assert!(store.delete("key1"));
        assert!(!store.delete("key1"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_clear_resets_counters_and_stays_usable() {
        let mut store = CacheStore::new(TEST_TTL);

        store.set("key1", "value1".to_string(), None);
        store.get("key1");
        store.get("nonexistent");

        store.clear();

        let stats = store.stats();
        assert_eq!(store.len(), 0);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);

        store.set("key2", "value2".to_string(), None);
        assert_eq!(store.get("key2"), Some("value2".to_string()));
    }

    #[test]
    fn test_store_cleanup_removes_only_expired() {
        let mut store = CacheStore::new(TEST_TTL);

        store.set("short", "value".to_string(), Some(50));
        store.set("long", "value".to_string(), Some(60_000));

        sleep(Duration::from_millis(80));

        assert_eq!(store.cleanup(), 1);
        assert_eq!(store.len(), 1);
        assert!(store.has("long"));

        // Safe on a store with nothing to remove
        assert_eq!(store.cleanup(), 0);
    }

    #[test]
    fn test_store_size_includes_expired_entries() {
        let mut store = CacheStore::new(TEST_TTL);

        store.set("short", "value".to_string(), Some(50));
        sleep(Duration::from_millis(80));

        // Raw count until swept or accessed
        assert_eq!(store.len(), 1);
        store.cleanup();
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_store_stats_hit_rates() {
        let mut store = CacheStore::new(TEST_TTL);

        store.set("key1", "value1".to_string(), None);
        store.get("key1");
        store.get("key1");
        store.get("nonexistent");

        let stats = store.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hit_rate, 66.67);
    }

    #[test]
    fn test_store_stats_defaults() {
        let store: CacheStore<String> = CacheStore::new(TEST_TTL);

        let stats = store.stats();
        assert_eq!(stats.size, 0);
        assert_eq!(stats.max_size, None);
        assert_eq!(stats.default_ttl, TEST_TTL);
        assert_eq!(stats.hit_rate, 0.0);
        assert_eq!(stats.oldest_entry, None);
        assert_eq!(stats.newest_entry, None);
    }

    #[test]
    fn test_store_stats_oldest_and_newest() {
        let mut store = CacheStore::new(TEST_TTL);

        store.set("first", "a".to_string(), None);
        sleep(Duration::from_millis(10));
        store.set("second", "b".to_string(), None);

        let stats = store.stats();
        let oldest = stats.oldest_entry.unwrap();
        let newest = stats.newest_entry.unwrap();
        assert!(oldest < newest);
    }

    #[test]
    fn test_store_stats_single_entry_oldest_equals_newest() {
        let mut store = CacheStore::new(TEST_TTL);

        store.set("only", "a".to_string(), None);

        let stats = store.stats();
        assert_eq!(stats.oldest_entry, stats.newest_entry);
        assert!(stats.oldest_entry.is_some());
    }

    #[test]
    fn test_store_stats_skip_expired_without_deleting() {
        let mut store = CacheStore::new(TEST_TTL);

        store.set("short", "a".to_string(), Some(50));
        sleep(Duration::from_millis(80));

        let stats = store.stats();
        assert_eq!(stats.size, 1);
        assert_eq!(stats.oldest_entry, None);
        assert_eq!(stats.newest_entry, None);
        // The scan itself must not evict
        assert_eq!(store.len(), 1);
    }
}
