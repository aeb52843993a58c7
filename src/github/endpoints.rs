// GitHub API endpoint functions.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{Release, RepoId, RepoMetadata};

impl GitHubClient {
    /// Get public metadata for a repository.
    pub async fn get_repo(&self, repo: &RepoId) -> Result<RepoMetadata> {
        let response = self
            .get(&format!("/repos/{}/{}", repo.owner, repo.name))
            .await?;
        let metadata: RepoMetadata = response.json().await?;
        Ok(metadata)
    }

    /// Get the most recent published release of a repository.
    pub async fn get_latest_release(&self, repo: &RepoId) -> Result<Release> {
        let response = self
            .get(&format!("/repos/{}/{}/releases/latest", repo.owner, repo.name))
            .await?;
        let release: Release = response.json().await?;
        Ok(release)
    }
}
