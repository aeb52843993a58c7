// Star count binding: repository metadata -> cached `stargazers_count`.

use crate::cache::{KeyValueStore, MetadataValue};
use crate::error::{MetaError, Result};
use crate::fetch::{CachedFetcher, Lookup};
use crate::github::{GitHubClient, RepoId, RepoMetadata};

/// Cache key for a repository's star count.
pub fn stars_key(repo: &RepoId) -> String {
    format!("github-stars:{}", repo)
}

/// Pull the star count out of a repository payload.
///
/// Zero is a real count; only a missing field is malformed.
pub fn extract_stars(metadata: &RepoMetadata) -> Result<MetadataValue> {
    metadata
        .stargazers_count
        .map(MetadataValue::Count)
        .ok_or(MetaError::MissingField("stargazers_count"))
}

/// Star count for `repo`, served from cache when fresh.
pub async fn star_count<S: KeyValueStore>(
    fetcher: &CachedFetcher<S>,
    client: &GitHubClient,
    repo: &RepoId,
) -> Lookup {
    fetcher
        .get(&stars_key(repo), || async {
            let metadata = client.get_repo(repo).await?;
            extract_stars(&metadata)
        })
        .await
}
