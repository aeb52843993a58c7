// GitHub API module.
// Client and types for the remote metadata source.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{GITHUB_API_BASE, GitHubClient};
pub use types::*;
