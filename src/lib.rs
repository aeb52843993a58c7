//! Cached remote metadata for GitHub repositories
//!
//! Fetches a repository's star count or latest release version, caches it
//! with a time-to-live, and falls back to the last known value when GitHub
//! cannot be reached.

pub mod cache;
pub mod cli;
pub mod error;
pub mod fetch;
pub mod github;
pub mod ui;
pub mod widgets;

pub use cache::{CacheEntry, FileStore, KeyValueStore, MemoryStore, MetadataValue};
pub use error::{MetaError, Result};
pub use fetch::{CachedFetcher, FetcherConfig, Lookup};
pub use github::{GitHubClient, RepoId};
pub use ui::MetadataBadge;
pub use widgets::VersionFormat;
