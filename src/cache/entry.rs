//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL expiration.

use crate::clock::now_ms;

// == Cache Entry ==
/// A single cache entry. Immutable once created; `set` replaces the whole
/// entry rather than mutating it in place.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub data: V,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_ms` milliseconds from now.
    pub fn new(data: V, ttl_ms: u64) -> Self {
        let now = now_ms();
        Self {
            data,
            created_at: now,
            expires_at: now + ttl_ms,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is live while `now <= expires_at`, so it
    /// only counts as expired once the current time has passed the
    /// expiration time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(now_ms())
    }

    /// Expiry check against an explicit timestamp.
    pub fn is_expired_at(&self, now: u64) -> bool {
        now > self.expires_at
    }
}
