//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::stats::DEFAULT_STATS_TTL;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON file holding the item collection
    pub data_path: PathBuf,
    /// HTTP server port
    pub server_port: u16,
    /// Maximum age in seconds of cached statistics
    pub stats_cache_ttl: u64,
    /// Page size used when a list request omits `limit`
    pub default_page_limit: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATA_PATH` - Backing item file (default: data/items.json)
    /// - `SERVER_PORT` - HTTP server port (default: 3001)
    /// - `STATS_CACHE_TTL` - Stats cache TTL in seconds (default: 300)
    /// - `DEFAULT_PAGE_LIMIT` - Items per page when unspecified (default: 5)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_path: env::var("DATA_PATH")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            stats_cache_ttl: env::var("STATS_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.stats_cache_ttl),
            default_page_limit: env::var("DEFAULT_PAGE_LIMIT")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|limit| *limit > 0)
                .unwrap_or(defaults.default_page_limit),
        }
    }

    /// Stats cache TTL as a `Duration`.
    pub fn stats_ttl(&self) -> Duration {
        Duration::from_secs(self.stats_cache_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/items.json"),
            server_port: 3001,
            stats_cache_ttl: DEFAULT_STATS_TTL.as_secs(),
            default_page_limit: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.data_path, PathBuf::from("data/items.json"));
        assert_eq!(config.server_port, 3001);
        assert_eq!(config.stats_cache_ttl, 300);
        assert_eq!(config.default_page_limit, 5);
        assert_eq!(config.stats_ttl(), Duration::from_secs(300));
        assert_eq!(config.stats_ttl(), DEFAULT_STATS_TTL);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("DATA_PATH");
        env::remove_var("SERVER_PORT");
        env::remove_var("STATS_CACHE_TTL");
        env::remove_var("DEFAULT_PAGE_LIMIT");

        let config = Config::from_env();
        assert_eq!(config.data_path, PathBuf::from("data/items.json"));
        assert_eq!(config.server_port, 3001);
        assert_eq!(config.stats_cache_ttl, 300);
        assert_eq!(config.default_page_limit, 5);
    }
}
