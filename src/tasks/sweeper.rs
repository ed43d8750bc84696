//! Periodic Sweep Task
//!
//! Background task that removes expired entries from a store on a fixed
//! interval, independent of the read/write path. Both the response cache
//! and the rate limiter run one of these from construction until their
//! handle is destroyed.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Stores that can evict their expired entries in one pass.
pub trait Sweep {
    /// Removes expired entries, returning how many were removed.
    fn sweep(&mut self) -> usize;
}

/// Spawns a task that sweeps `store` every `interval`.
///
/// The sweep takes the same lock as regular operations, so it never
/// interleaves with them. The returned handle is used to cancel the task;
/// aborting an already-finished task is a no-op.
pub fn spawn_sweeper<S>(store: Arc<RwLock<S>>, interval: Duration, name: &'static str) -> JoinHandle<()>
where
    S: Sweep + Send + Sync + 'static,
{
    tokio::spawn(async move {
        debug!("{} sweeper started, interval {:?}", name, interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut guard = store.write().await;
                guard.sweep()
            };

            if removed > 0 {
                info!("{} sweep: removed {} expired entries", name, removed);
            } else {
                debug!("{} sweep: no expired entries", name);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStore;

    #[tokio::test]
    async fn test_sweeper_removes_expired_entries() {
        let store = Arc::new(RwLock::new(CacheStore::new(300_000)));

        {
            let mut guard = store.write().await;
            guard.set("expire_soon", "value".to_string(), Some(50));
        }

        let handle = spawn_sweeper(store.clone(), Duration::from_millis(100), "test");

        tokio::time::sleep(Duration::from_millis(250)).await;

        // Raw size observation: the sweep removed it without any access
        assert_eq!(store.read().await.len(), 0);

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweeper_preserves_live_entries() {
        let store = Arc::new(RwLock::new(CacheStore::new(300_000)));

        {
            let mut guard = store.write().await;
            guard.set("long_lived", "value".to_string(), Some(60_000));
        }

        let handle = spawn_sweeper(store.clone(), Duration::from_millis(100), "test");

        tokio::time::sleep(Duration::from_millis(250)).await;

        assert_eq!(store.read().await.len(), 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweeper_can_be_aborted() {
        let store: Arc<RwLock<CacheStore<String>>> = Arc::new(RwLock::new(CacheStore::new(300_000)));

        let handle = spawn_sweeper(store, Duration::from_millis(100), "test");

        handle.abort();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(handle.is_finished());
    }
}
