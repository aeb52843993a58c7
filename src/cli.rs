//! Command-line interface for ghmeta
//!
//! Parses arguments with clap and maps them onto the fetcher configuration
//! and cache backend.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::cache::DEFAULT_TTL;
use crate::fetch::FetcherConfig;
use crate::github::{GITHUB_API_BASE, RepoId};
use crate::widgets::VersionFormat;

/// Show cached GitHub repository metadata
#[derive(Parser, Debug)]
#[command(name = "ghmeta")]
#[command(about = "Cached GitHub star counts and latest release versions")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory for the persistent cache
    #[arg(long, global = true, env = "GHMETA_CACHE_DIR", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Keep the cache in memory only
    #[arg(long, global = true, conflicts_with = "cache_dir")]
    pub no_cache: bool,

    /// Seconds a cached value is served without refreshing
    #[arg(long, global = true, value_name = "SECONDS", default_value_t = DEFAULT_TTL.as_secs())]
    pub ttl: u64,

    /// GitHub API root
    #[arg(long, global = true, env = "GHMETA_API_URL", default_value = GITHUB_API_BASE)]
    pub api_url: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a repository's star count
    Stars {
        /// Repository as owner/repo
        repo: RepoId,
    },
    /// Show a repository's latest release version
    Version {
        /// Repository as owner/repo
        repo: RepoId,

        /// `version` strips a leading "v", `tag` keeps the tag as published
        #[arg(long, default_value = "version")]
        format: VersionFormat,
    },
}

/// Where cached values live for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheBackend {
    Memory,
    Directory(PathBuf),
    /// Platform cache directory
    Default,
}

impl Cli {
    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig::default().with_ttl(Duration::from_secs(self.ttl))
    }

    pub fn cache_backend(&self) -> CacheBackend {
        if self.no_cache {
            CacheBackend::Memory
        } else if let Some(dir) = &self.cache_dir {
            CacheBackend::Directory(dir.clone())
        } else {
            CacheBackend::Default
        }
    }
}
