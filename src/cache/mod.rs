// Cache module for remote metadata.
// Typed, never-failing reads and best-effort writes over a key/value store.

pub mod entry;
pub mod freshness;
pub mod paths;
pub mod store;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::MetaError;

pub use entry::{CacheEntry, MetadataValue};
pub use freshness::{DEFAULT_TTL, is_fresh};
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Freshness-checked cache of metadata entries.
#[derive(Debug)]
pub struct MetadataCache<S> {
    store: S,
}

impl<S: KeyValueStore> MetadataCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the entry for `key`.
    ///
    /// Never fails: a missing key, an unusable store, a slot that does not
    /// decode, or a slot holding another key's entry are all reported as absent.
    pub fn read(&self, key: &str) -> Option<CacheEntry> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "cache store unavailable, treating as miss");
                return None;
            }
        };

        match serde_json::from_str::<CacheEntry>(&raw) {
            Ok(entry) if entry.key == key => Some(entry),
            Ok(entry) => {
                warn!(
                    key,
                    stored_key = %entry.key,
                    "cache slot holds another key, treating as miss"
                );
                None
            }
            Err(e) => {
                warn!(key, error = %e, "discarding undecodable cache entry");
                None
            }
        }
    }

    /// Store `value` for `key` with `fetched_at = now`, replacing any prior entry.
    ///
    /// Returns false if the store rejected the write.
    pub fn write(&self, key: &str, value: &MetadataValue, now: DateTime<Utc>) -> bool {
        let entry = CacheEntry::new(key, value.clone(), now);
        let result = serde_json::to_string(&entry)
            .map_err(MetaError::from)
            .and_then(|json| self.store.set(key, &json));

        match result {
            Ok(()) => {
                debug!(key, "cache entry written");
                true
            }
            Err(e) => {
                warn!(key, error = %e, "failed to write cache entry");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use tempfile::TempDir;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(MetaError::Other("storage disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(MetaError::Other("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_write_then_read() {
        let cache = MetadataCache::new(MemoryStore::new());
        let now = Utc::now();

        assert!(cache.write("github-stars:org/repo", &MetadataValue::Count(4200), now));

        let entry = cache.read("github-stars:org/repo").unwrap();
        assert_eq!(entry.key, "github-stars:org/repo");
        assert_eq!(entry.value, MetadataValue::Count(4200));
        assert_eq!(entry.fetched_at.timestamp_millis(), now.timestamp_millis());
    }

    #[test]
    fn test_read_missing_is_absent() {
        let cache = MetadataCache::new(MemoryStore::new());
        assert!(cache.read("nope").is_none());
    }

    #[test]
    fn test_write_replaces_value_and_timestamp() {
        let cache = MetadataCache::new(MemoryStore::new());
        let earlier = Utc::now() - chrono::Duration::hours(2);
        let now = Utc::now();

        cache.write("k", &MetadataValue::Count(1), earlier);
        cache.write("k", &MetadataValue::Count(2), now);

        let entry = cache.read("k").unwrap();
        assert_eq!(entry.value, MetadataValue::Count(2));
        assert!(entry.is_fresh(now, DEFAULT_TTL));
    }

    #[test]
    fn test_corrupt_entry_reads_as_absent() {
        let store = MemoryStore::new();
        store.set("k", "not json").unwrap();
        let cache = MetadataCache::new(store);

        assert!(cache.read("k").is_none());
    }

    #[test]
    fn test_entry_for_other_key_reads_as_absent() {
        let store = MemoryStore::new();
        let entry = CacheEntry::new(
            "github-stars:org_x/repo",
            MetadataValue::Count(4200),
            Utc::now(),
        );
        store
            .set("github-stars:org/x_repo", &serde_json::to_string(&entry).unwrap())
            .unwrap();
        let cache = MetadataCache::new(store);

        assert!(cache.read("github-stars:org/x_repo").is_none());
    }

    #[test]
    fn test_file_backed_keys_do_not_collide() {
        let temp_dir = TempDir::new().unwrap();
        let cache = MetadataCache::new(FileStore::with_dir(temp_dir.path()));

        cache.write("github-stars:org_x/repo", &MetadataValue::Count(4200), Utc::now());

        assert!(cache.read("github-stars:org/x_repo").is_none());
        assert_eq!(
            cache.read("github-stars:org_x/repo").unwrap().value,
            MetadataValue::Count(4200)
        );
    }

    #[test]
    fn test_broken_store_is_miss_and_write_is_skipped() {
        let cache = MetadataCache::new(BrokenStore);

        assert!(cache.read("k").is_none());
        assert!(!cache.write("k", &MetadataValue::Count(1), Utc::now()));
    }

    #[test]
    fn test_file_backed_cache_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let now = Utc::now();

        MetadataCache::new(FileStore::with_dir(temp_dir.path())).write(
            "latest-version:org/repo:version",
            &MetadataValue::from("26.02.2"),
            now,
        );

        let reopened = MetadataCache::new(FileStore::with_dir(temp_dir.path()));
        let entry = reopened.read("latest-version:org/repo:version").unwrap();
        assert_eq!(entry.value, MetadataValue::from("26.02.2"));
    }
}
