//! Unified error types for the release feeder
//!
//! This module defines error types for each layer:
//! - `DomainError`: Extraction and feed-building failures (pure core)
//! - `GithubError`: GitHub GraphQL client errors
//! - `SinkError`: Feed rendering and writing errors
//! - `ConfigError`: Environment configuration errors
//! - `AppError`: Driver-level errors (wraps the others per repository)

use thiserror::Error;

/// Domain layer errors - raised by the pure extraction/build core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Malformed reference at index {index}: {reason}")]
    Extraction { index: usize, reason: String },

    #[error("Contract violation: {0}")]
    ContractViolation(String),
}

impl DomainError {
    pub fn extraction(index: usize, reason: impl Into<String>) -> Self {
        DomainError::Extraction {
            index,
            reason: reason.into(),
        }
    }
}

/// GitHub API client errors
#[derive(Debug, Error)]
pub enum GithubError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("Repository not found: {owner}/{repo}")]
    RepoNotFound { owner: String, repo: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Feed sink errors
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(String),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} env var must be set")]
    MissingVar(&'static str),

    #[error("Invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Application layer errors - one per failed repository in a run
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("GitHub error: {0}")]
    Github(#[from] GithubError),

    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),
}
