use std::path::PathBuf;

use thiserror::Error;

use crate::github::types::RateLimit;

/// Failure modes of the backport flow. Each variant carries the offending
/// value so the message printed at exit is actionable. Nothing is retried.
#[derive(Debug, Error)]
pub enum BackportError {
    #[error("invalid pull request URL: {0}")]
    InvalidUrl(String),

    #[error("invalid branch name: {0:?}")]
    InvalidBranch(String),

    #[error("no GitHub token found at {}: {reason}", .path.display())]
    MissingCredential { path: PathBuf, reason: String },

    #[error("GitHub rate limit exhausted ({rate})")]
    RateLimited { rate: RateLimit },

    #[error("pull request {owner}/{repo}#{number} not found")]
    NotFound {
        owner: String,
        repo: String,
        number: u64,
    },

    #[error("`{program} {}` failed: {detail}", .args.join(" "))]
    Subprocess {
        program: String,
        args: Vec<String>,
        detail: String,
    },

    #[error("GitHub API request failed: {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("GitHub API request failed: {0}")]
    Http(#[from] reqwest::Error),
}
