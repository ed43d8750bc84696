//! Cache Statistics Module
//!
//! Snapshot of cache performance metrics surfaced by the stats endpoint.
//! Field names and null-vs-zero semantics are part of the wire contract:
//! `maxSize` serializes as `null` (the cache is unbounded), and
//! `oldestEntry`/`newestEntry` are `null` when no live entries exist.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time cache statistics.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Raw entry count, including expired entries not yet swept
    pub size: usize,
    /// Always `None`: no size bound in the current design
    pub max_size: Option<usize>,
    /// Default TTL in milliseconds
    #[serde(rename = "defaultTTL")]
    pub default_ttl: u64,
    /// Number of successful lookups
    pub hits: u64,
    /// Number of failed lookups (key not found or expired)
    pub misses: u64,
    /// Hit percentage rounded to two decimals, 0 when no lookups occurred
    pub hit_rate: f64,
    /// Earliest `created_at` among live entries (Unix milliseconds)
    pub oldest_entry: Option<u64>,
    /// Latest `created_at` among live entries (Unix milliseconds)
    pub newest_entry: Option<u64>,
}

/// Hit percentage for the given counters, rounded to two decimals.
pub fn hit_rate(hits: u64, misses: u64) -> f64 {
    let total = hits + misses;
    if total == 0 {
        0.0
    } else {
        let rate = hits as f64 / total as f64 * 100.0;
        (rate * 100.0).round() / 100.0
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate_no_requests() {
        assert_eq!(hit_rate(0, 0), 0.0);
    }

    #[test]
    fn test_hit_rate_rounding() {
        assert_eq!(hit_rate(2, 1), 66.67);
        assert_eq!(hit_rate(1, 2), 33.33);
        assert_eq!(hit_rate(3, 0), 100.0);
        assert_eq!(hit_rate(1, 1), 50.0);
    }

    #[test]
    fn test_stats_wire_format() {
        let stats = CacheStats {
            size: 3,
            max_size: None,
            default_ttl: 300_000,
            hits: 2,
            misses: 1,
            hit_rate: 66.67,
            oldest_entry: Some(1_000),
            newest_entry: Some(2_000),
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["size"], 3);
        assert!(json["maxSize"].is_null());
        assert_eq!(json["defaultTTL"], 300_000);
        assert_eq!(json["hitRate"], 66.67);
        assert_eq!(json["oldestEntry"], 1_000);
        assert_eq!(json["newestEntry"], 2_000);
    }

    #[test]
    fn test_stats_null_entries_when_empty() {
        let stats = CacheStats {
            size: 0,
            max_size: None,
            default_ttl: 300_000,
            hits: 0,
            misses: 0,
            hit_rate: 0.0,
            oldest_entry: None,
            newest_entry: None,
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert!(json["oldestEntry"].is_null());
        assert!(json["newestEntry"].is_null());
    }
}
