//! Polling loop and storage configuration.

use std::time::Duration;

use serde::Deserialize;

/// Polling loop configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Seconds between poll cycles (default: 60).
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Upper bound on one upstream fetch in milliseconds (default: 1000).
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,
}

const fn default_poll_interval_secs() -> u64 {
    60
}

const fn default_fetch_timeout_ms() -> u64 {
    1000
}

impl ServiceConfig {
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    #[must_use]
    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            fetch_timeout_ms: default_fetch_timeout_ms(),
        }
    }
}

/// In-memory repository configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Maximum entries per repository, other than bets, before
    /// least-recently-used eviction.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    /// Maximum stored bets. Bets are never evicted; a full store refuses new
    /// ones (default: 100000).
    #[serde(default = "default_bet_capacity")]
    pub bet_capacity: usize,
}

const fn default_cache_capacity() -> usize {
    10_000
}

const fn default_bet_capacity() -> usize {
    100_000
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cache_capacity: default_cache_capacity(),
            bet_capacity: default_bet_capacity(),
        }
    }
}
