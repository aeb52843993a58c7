// Cache entry model.
// A cached metadata value plus the time it was last fetched successfully.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A piece of remote metadata: a count (stars) or a string (version).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Count(u64),
    Text(String),
}

impl MetadataValue {
    pub fn as_count(&self) -> Option<u64> {
        match self {
            MetadataValue::Count(n) => Some(*n),
            MetadataValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Count(_) => None,
            MetadataValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Count(n) => write!(f, "{}", n),
            MetadataValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for MetadataValue {
    fn from(n: u64) -> Self {
        MetadataValue::Count(n)
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        MetadataValue::Text(s)
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::Text(s.to_string())
    }
}

/// Cached metadata for a single key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Identifies the remote resource.
    pub key: String,
    /// The cached value.
    pub value: MetadataValue,
    /// When the value was last fetched, stored as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(key: impl Into<String>, value: MetadataValue, fetched_at: DateTime<Utc>) -> Self {
        Self {
            key: key.into(),
            value,
            fetched_at,
        }
    }

    /// Check whether this entry is still fresh at `now`.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: std::time::Duration) -> bool {
        super::freshness::is_fresh(self.fetched_at, now, ttl)
    }
}
