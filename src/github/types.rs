// GitHub API response types and repository identifiers.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::MetaError;

/// Repository identifier in `owner/repo` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl FromStr for RepoId {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MetaError::InvalidRepo(s.to_string());
        let (owner, name) = s.trim().split_once('/').ok_or_else(invalid)?;

        let valid_part = |part: &str| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        };
        if !valid_part(owner) || !valid_part(name) {
            return Err(invalid());
        }

        Ok(Self::new(owner, name))
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// The subset of repository metadata we read.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoMetadata {
    pub stargazers_count: Option<u64>,
}

/// The subset of a release descriptor we read.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub tag_name: Option<String>,
}
