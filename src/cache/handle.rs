//! Shared Cache Handle
//!
//! Cloneable, thread-safe handle around [`CacheStore`]. Construction spawns
//! the periodic sweeper; `destroy` stops it exactly once and empties the
//! store. Handlers and the AI layer hold clones of this handle.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::cache::{CacheStats, CacheStore};
use crate::tasks::{spawn_sweeper, Sweep};

impl<V: Clone> Sweep for CacheStore<V> {
    fn sweep(&mut self) -> usize {
        self.cleanup()
    }
}

// == Cache Handle ==
/// Shared TTL cache with an owned background sweeper.
#[derive(Debug)]
pub struct Cache<V> {
    store: Arc<RwLock<CacheStore<V>>>,
    sweeper: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl<V> Clone for Cache<V> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            sweeper: self.sweeper.clone(),
        }
    }
}

impl<V: Clone + Send + Sync + 'static> Cache<V> {
    // == Constructor ==
    /// Creates a cache with the given default TTL and starts its sweeper.
    pub fn new(default_ttl_ms: u64, sweep_interval: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(default_ttl_ms)));
        let sweeper = spawn_sweeper(store.clone(), sweep_interval, "cache");

        Self {
            store,
            sweeper: Arc::new(Mutex::new(Some(sweeper))),
        }
    }

    /// Stores a value; `ttl_ms` of `None` or `Some(0)` uses the default TTL.
    pub async fn set(&self, key: impl Into<String>, value: V, ttl_ms: Option<u64>) {
        self.store.write().await.set(key, value, ttl_ms);
    }

    /// Retrieves a live value, recording a hit or miss.
    pub async fn get(&self, key: &str) -> Option<V> {
        self.store.write().await.get(key)
    }

    /// Liveness check without touching the counters.
    pub async fn has(&self, key: &str) -> bool {
        self.store.write().await.has(key)
    }

    /// Removes an entry if present.
    pub async fn delete(&self, key: &str) -> bool {
        self.store.write().await.delete(key)
    }

    /// Empties the store and resets counters; the sweeper keeps running.
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    /// Runs one eviction pass immediately, outside the sweep schedule.
    pub async fn cleanup(&self) -> usize {
        self.store.write().await.cleanup()
    }

    /// Raw entry count, including expired entries not yet swept.
    pub async fn size(&self) -> usize {
        self.store.read().await.len()
    }

    /// Statistics snapshot.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Destroy ==
    /// Stops the sweeper and empties the store.
    ///
    /// Safe to call repeatedly and concurrently with in-flight operations:
    /// the first call aborts the sweeper, later calls just clear again, and
    /// any operation after destroy sees an ordinary empty store.
    pub async fn destroy(&self) {
        if let Some(handle) = self.sweeper.lock().await.take() {
            handle.abort();
        }
        self.store.write().await.clear();
    }
}
