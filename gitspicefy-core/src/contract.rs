//! # contract: seams between the pipeline and the outside world
//!
//! This module defines the plain data types that flow through a generation request and the
//! traits behind which every network-facing collaborator sits:
//!
//! - [`GitHubApi`]: repository metadata, directory listings and file contents.
//! - [`TextGenerationApi`]: a single prompt → text call against a hosted model.
//! - [`ReadmeProvider`]: a strategy that turns repository data into README Markdown.
//!
//! ## Mocking & Testing
//! - Each trait is annotated for `mockall`, so tests (and downstream crates with the
//!   `test-export-mocks` feature) get `MockGitHubApi`, `MockTextGenerationApi` and
//!   `MockReadmeProvider`.
//!
//! ## Adding New Providers
//! - Implement [`ReadmeProvider`] and register it in
//!   [`crate::providers::ProviderRegistry`]. Any error it returns is logged and the
//!   pipeline falls back to the template engine.

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::{GitHubError, ProviderError};
use crate::readme_config::ReadmeConfig;

/// Snapshot of repository metadata, fetched once per generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryInfo {
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub language: String,
    pub stars: u64,
    pub forks: u64,
    pub is_private: bool,
    pub default_branch: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
}

/// A file or directory entry from the repository contents API.
///
/// `content` is only populated for files that passed the traversal filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubFile {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl GitHubFile {
    pub fn file(path: &str, content: Option<&str>) -> Self {
        let name = path.rsplit('/').next().unwrap_or(path).to_string();
        Self {
            name,
            path: path.to_string(),
            kind: EntryKind::File,
            size: content.map(|c| c.len() as u64),
            content: content.map(str::to_string),
        }
    }

    pub fn dir(path: &str) -> Self {
        let name = path.rsplit('/').next().unwrap_or(path).to_string();
        Self {
            name,
            path: path.to_string(),
            kind: EntryKind::Dir,
            size: None,
            content: None,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Entry summary returned to callers: no content, no size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSummary {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl From<&GitHubFile> for FileSummary {
    fn from(f: &GitHubFile) -> Self {
        FileSummary {
            name: f.name.clone(),
            path: f.path.clone(),
            kind: f.kind,
        }
    }
}

/// Read-only access to the GitHub REST API.
///
/// Implemented by [`crate::github::GitHubClient`] and by test mocks.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// `GET /repos/{owner}/{repo}`
    async fn repository_info(&self, owner: &str, repo: &str)
        -> Result<RepositoryInfo, GitHubError>;

    /// `GET /repos/{owner}/{repo}/contents/{path}?ref={branch}`, without contents.
    async fn list_directory(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> Result<Vec<GitHubFile>, GitHubError>;

    /// Decoded UTF-8 content of a single file.
    async fn file_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> Result<String, GitHubError>;
}

/// One prompt in, generated text out.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait TextGenerationApi: Send + Sync {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, ProviderError>;
}

/// A strategy that turns repository data into README Markdown.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ReadmeProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    async fn generate_readme(
        &self,
        info: &RepositoryInfo,
        files: &[GitHubFile],
        config: &ReadmeConfig,
    ) -> Result<String, ProviderError>;
}
