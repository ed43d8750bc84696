//! Shared Rate Limiter Handle
//!
//! Same shape as the cache handle: a cloneable wrapper owning the store and
//! its sweeper, with an idempotent `destroy`.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::ratelimit::{RateLimitDecision, RateLimiterStore};
use crate::tasks::{spawn_sweeper, Sweep};

impl Sweep for RateLimiterStore {
    fn sweep(&mut self) -> usize {
        self.cleanup()
    }
}

// == Rate Limiter Handle ==
/// Shared fixed-window rate limiter with an owned background sweeper.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    store: Arc<RwLock<RateLimiterStore>>,
    sweeper: Arc<Mutex<Option<JoinHandle<()>>>>,
    max_requests: u64,
}

impl RateLimiter {
    // == Constructor ==
    /// Creates a limiter allowing `max_requests` per `window_ms` window per
    /// identifier, and starts its sweeper.
    pub fn new(window_ms: u64, max_requests: u64, sweep_interval: Duration) -> Self {
        let store = Arc::new(RwLock::new(RateLimiterStore::new(window_ms, max_requests)));
        let sweeper = spawn_sweeper(store.clone(), sweep_interval, "rate limiter");

        Self {
            store,
            sweeper: Arc::new(Mutex::new(Some(sweeper))),
            max_requests,
        }
    }

    /// Configured per-window request budget, for the X-RateLimit-Limit
    /// header.
    pub fn max_requests(&self) -> u64 {
        self.max_requests
    }

    /// Counts a request for `identifier` and decides whether it may proceed.
    pub async fn is_allowed(&self, identifier: &str) -> RateLimitDecision {
        self.store.write().await.is_allowed(identifier)
    }

    /// Runs one eviction pass immediately, outside the sweep schedule.
    pub async fn cleanup(&self) -> usize {
        self.store.write().await.cleanup()
    }

    /// Number of tracked identifiers. Diagnostic only.
    pub async fn size(&self) -> usize {
        self.store.read().await.len()
    }

    // == Destroy ==
    /// Stops the sweeper and drops all tracked identifiers. Idempotent;
    /// later `is_allowed` calls simply start fresh windows.
    pub async fn destroy(&self) {
        if let Some(handle) = self.sweeper.lock().await.take() {
            handle.abort();
        }
        self.store.write().await.clear();
    }
}
