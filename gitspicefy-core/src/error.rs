//! Error taxonomy for the generation pipeline.
//!
//! - [`GitHubError`] is produced by the GitHub client and is fatal to a generation request.
//! - [`ProviderError`] is produced by AI provider adapters and never leaves the orchestration
//!   boundary: the pipeline downgrades to the template engine instead.
//! - [`GenerateError`] is what callers of [`crate::generate::Generator::generate`] see.

use thiserror::Error;

/// Failure talking to the GitHub REST API.
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("repository '{owner}/{repo}' not found")]
    NotFound { owner: String, repo: String },

    /// Throttled by GitHub. `reset_at` is the `x-ratelimit-reset` value in unix seconds.
    #[error("GitHub API rate limit exceeded")]
    RateLimited { reset_at: Option<u64> },

    #[error("access forbidden; the repository might be private or require authentication")]
    Forbidden,

    #[error("authentication failed; check the GitHub token")]
    Unauthorized,

    #[error("GitHub API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("file content not found for '{path}'")]
    MissingContent { path: String },

    #[error("failed to decode content of '{path}': {reason}")]
    Decode { path: String, reason: String },

    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Failure of an optional AI provider adapter.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{provider} API key is required")]
    MissingApiKey { provider: &'static str },

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("no generated text in response")]
    EmptyResponse,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

/// Caller-facing failure of a generation request.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("repository not found: {0}")]
    NotFound(String),

    #[error("rate limited")]
    RateLimited { reset_at: Option<u64> },

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("provider failure: {0}")]
    ProviderFailure(String),

    #[error("unknown error: {0}")]
    UnknownError(String),
}

impl From<GitHubError> for GenerateError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::NotFound { owner, repo } => {
                GenerateError::NotFound(format!("{owner}/{repo}"))
            }
            GitHubError::RateLimited { reset_at } => GenerateError::RateLimited { reset_at },
            GitHubError::Forbidden => GenerateError::Forbidden,
            GitHubError::Unauthorized => GenerateError::Unauthorized,
            other => GenerateError::UnknownError(other.to_string()),
        }
    }
}

impl From<ProviderError> for GenerateError {
    fn from(e: ProviderError) -> Self {
        GenerateError::ProviderFailure(e.to_string())
    }
}

impl GenerateError {
    /// Message suitable for showing to an end user, with a suggested correction where one exists.
    pub fn user_message(&self) -> String {
        match self {
            GenerateError::RateLimited { reset_at } => {
                let reset = reset_at
                    .map(|t| format!(" Rate limit resets at unix time {t}."))
                    .unwrap_or_default();
                format!(
                    "GitHub API rate limit exceeded.{reset} Please try again later or set a personal access token (GITHUB_TOKEN) to increase rate limits."
                )
            }
            GenerateError::NotFound(repo) => format!(
                "Repository '{repo}' not found. Please check the URL and ensure the repository is public."
            ),
            GenerateError::InvalidInput(_) => "Invalid GitHub URL. Please provide a valid GitHub repository URL (e.g., https://github.com/owner/repo)".to_string(),
            GenerateError::Unauthorized => {
                "Authentication failed. Please check your GitHub token.".to_string()
            }
            GenerateError::Forbidden => {
                "Access forbidden. The repository might be private or require authentication."
                    .to_string()
            }
            GenerateError::ProviderFailure(reason) => {
                format!("README generation provider failed: {reason}")
            }
            GenerateError::UnknownError(reason) => {
                format!("Failed to analyze repository: {reason}")
            }
        }
    }
}
