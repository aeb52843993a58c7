// Error types for ghmeta.
// Covers GitHub API failures, malformed payloads, and cache store errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetaError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Missing field `{0}` in response")]
    MissingField(&'static str),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid repository identifier '{0}', expected owner/repo")]
    InvalidRepo(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, MetaError>;
