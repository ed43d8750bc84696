//! Configuration Module
//!
//! Handles loading and managing server configuration from environment
//! variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Deployment environment label reported by the health endpoint
    pub environment: String,
    /// OpenAI API key; the mock provider is used when unset
    pub openai_api_key: Option<String>,
    /// Default cache TTL in milliseconds
    pub cache_default_ttl_ms: u64,
    /// Background sweep interval in milliseconds (both stores)
    pub sweep_interval_ms: u64,
    /// Rate limit window in milliseconds
    pub rate_limit_window_ms: u64,
    /// Maximum requests per identifier per window
    pub rate_limit_max_requests: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `APP_ENV` - environment label (default: "development")
    /// - `OPENAI_API_KEY` - optional; empty or unset selects the mock provider
    /// - `CACHE_DEFAULT_TTL_MS` - default cache TTL (default: 300000)
    /// - `SWEEP_INTERVAL_MS` - sweep period (default: 60000)
    /// - `RATE_LIMIT_WINDOW_MS` - rate limit window (default: 900000)
    /// - `RATE_LIMIT_MAX_REQUESTS` - requests per window (default: 100)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            environment: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            openai_api_key: env::var("OPENAI_API_KEY").ok().filter(|v| !v.is_empty()),
            cache_default_ttl_ms: env::var("CACHE_DEFAULT_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300_000),
            sweep_interval_ms: env::var("SWEEP_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60_000),
            rate_limit_window_ms: env::var("RATE_LIMIT_WINDOW_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(900_000),
            rate_limit_max_requests: env::var("RATE_LIMIT_MAX_REQUESTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            environment: "development".to_string(),
            openai_api_key: None,
            cache_default_ttl_ms: 300_000,
            sweep_interval_ms: 60_000,
            rate_limit_window_ms: 900_000,
            rate_limit_max_requests: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.environment, "development");
        assert!(config.openai_api_key.is_none());
        assert_eq!(config.cache_default_ttl_ms, 300_000);
        assert_eq!(config.sweep_interval_ms, 60_000);
        assert_eq!(config.rate_limit_window_ms, 900_000);
        assert_eq!(config.rate_limit_max_requests, 100);
    }
}
