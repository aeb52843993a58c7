// Latest version binding: release descriptor -> cached, formatted tag.

use std::fmt;
use std::str::FromStr;

use crate::cache::{KeyValueStore, MetadataValue};
use crate::error::{MetaError, Result};
use crate::fetch::{CachedFetcher, Lookup};
use crate::github::{GitHubClient, Release, RepoId};

/// How a release tag is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionFormat {
    /// Bare version number: `v26.02.2` -> `26.02.2`.
    #[default]
    Version,
    /// The tag exactly as published: `v26.02.2`.
    Tag,
}

impl VersionFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionFormat::Version => "version",
            VersionFormat::Tag => "tag",
        }
    }

    /// Apply the format to a raw tag. Strips at most one leading `v`.
    pub fn apply(&self, tag: &str) -> String {
        match self {
            VersionFormat::Version => tag.strip_prefix('v').unwrap_or(tag).to_string(),
            VersionFormat::Tag => tag.to_string(),
        }
    }
}

impl FromStr for VersionFormat {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "version" => Ok(VersionFormat::Version),
            "tag" => Ok(VersionFormat::Tag),
            other => Err(MetaError::Other(format!(
                "Invalid format '{}', expected 'version' or 'tag'",
                other
            ))),
        }
    }
}

impl fmt::Display for VersionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cache key for a repository's latest version in a given format.
pub fn version_key(repo: &RepoId, format: VersionFormat) -> String {
    format!("latest-version:{}:{}", repo, format)
}

/// Pull the tag out of a release payload and format it.
pub fn extract_version(release: &Release, format: VersionFormat) -> Result<MetadataValue> {
    match release.tag_name.as_deref() {
        Some(tag) if !tag.is_empty() => Ok(MetadataValue::Text(format.apply(tag))),
        _ => Err(MetaError::MissingField("tag_name")),
    }
}

/// Latest release version for `repo`, served from cache when fresh.
///
/// The format is applied before caching, so cached reads are returned as is.
pub async fn latest_version<S: KeyValueStore>(
    fetcher: &CachedFetcher<S>,
    client: &GitHubClient,
    repo: &RepoId,
    format: VersionFormat,
) -> Lookup {
    fetcher
        .get(&version_key(repo, format), || async {
            let release = client.get_latest_release(repo).await?;
            extract_version(&release, format)
        })
        .await
}
