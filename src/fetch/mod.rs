// Resilient fetch orchestration.
// Serves fresh cache hits, writes through on success, and falls back to the
// last cached value when the remote fails.

mod config;
mod inflight;

use std::future::Future;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, warn};

use crate::cache::{CacheEntry, KeyValueStore, MetadataCache, MetadataValue};
use crate::error::Result;

pub use config::FetcherConfig;
use inflight::{InFlight, Slot};

/// Outcome of a metadata lookup, carrying how current the value is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Served from a cache entry younger than the TTL. No network call.
    Fresh(MetadataValue),
    /// Fetched from the remote just now and written to the cache.
    Fetched(MetadataValue),
    /// The remote failed; this is the last value that was cached.
    Stale(MetadataValue),
    /// The remote failed and nothing was cached.
    Unknown,
}

impl Lookup {
    pub fn value(&self) -> Option<&MetadataValue> {
        match self {
            Lookup::Fresh(v) | Lookup::Fetched(v) | Lookup::Stale(v) => Some(v),
            Lookup::Unknown => None,
        }
    }

    pub fn into_value(self) -> Option<MetadataValue> {
        match self {
            Lookup::Fresh(v) | Lookup::Fetched(v) | Lookup::Stale(v) => Some(v),
            Lookup::Unknown => None,
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, Lookup::Stale(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Lookup::Unknown)
    }
}

/// Fetch-cache-fallback primitive shared by all metadata bindings.
pub struct CachedFetcher<S> {
    cache: MetadataCache<S>,
    config: FetcherConfig,
    inflight: InFlight,
}

impl<S: KeyValueStore> CachedFetcher<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, FetcherConfig::default())
    }

    pub fn with_config(store: S, config: FetcherConfig) -> Self {
        Self {
            cache: MetadataCache::new(store),
            config,
            inflight: InFlight::default(),
        }
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    pub fn cache(&self) -> &MetadataCache<S> {
        &self.cache
    }

    /// Look up `key` using the configured TTL.
    pub async fn get<F, Fut>(&self, key: &str, fetch_remote: F) -> Lookup
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<MetadataValue>>,
    {
        self.get_with_ttl(key, self.config.ttl, fetch_remote).await
    }

    /// Look up `key`, treating cache entries younger than `ttl` as fresh.
    ///
    /// `fetch_remote` runs only on a miss or stale entry. Its errors are never
    /// returned: they degrade to the cached value or [`Lookup::Unknown`].
    pub async fn get_with_ttl<F, Fut>(&self, key: &str, ttl: Duration, fetch_remote: F) -> Lookup
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<MetadataValue>>,
    {
        let entry = self.cache.read(key);

        if let Some(entry) = &entry {
            if entry.is_fresh(Utc::now(), ttl) {
                debug!(key, "cache hit");
                return Lookup::Fresh(entry.value.clone());
            }
        }

        let leader = if self.config.coalesce_in_flight {
            match self.inflight.join(key) {
                Slot::Leader(leader) => Some(leader),
                Slot::Follower(rx) => {
                    debug!(key, "waiting on in-flight fetch");
                    if let Some(lookup) = inflight::wait(rx).await {
                        return lookup;
                    }
                    // Leader went away without an outcome; fetch ourselves
                    None
                }
            }
        } else {
            None
        };

        let lookup = self.refresh(key, entry, fetch_remote).await;

        if let Some(leader) = leader {
            leader.complete(&lookup);
        }

        lookup
    }

    async fn refresh<F, Fut>(&self, key: &str, entry: Option<CacheEntry>, fetch_remote: F) -> Lookup
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<MetadataValue>>,
    {
        debug!(key, cached = entry.is_some(), "fetching remote metadata");

        match fetch_remote().await {
            Ok(value) => {
                self.cache.write(key, &value, Utc::now());
                Lookup::Fetched(value)
            }
            Err(e) => match entry {
                Some(entry) => {
                    warn!(key, error = %e, "remote fetch failed, serving stale value");
                    Lookup::Stale(entry.value)
                }
                None => {
                    warn!(key, error = %e, "remote fetch failed, no cached value");
                    Lookup::Unknown
                }
            },
        }
    }
}
