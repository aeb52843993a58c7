// Fetcher configuration.

use std::time::Duration;

use crate::cache::DEFAULT_TTL;

/// Configuration for a [`CachedFetcher`](super::CachedFetcher).
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// How long a cached value is served without contacting the remote.
    pub ttl: Duration,
    /// Let concurrent lookups of the same key share one remote call.
    pub coalesce_in_flight: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            coalesce_in_flight: true,
        }
    }
}

impl FetcherConfig {
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_coalescing(mut self, enabled: bool) -> Self {
        self.coalesce_in_flight = enabled;
        self
    }
}
