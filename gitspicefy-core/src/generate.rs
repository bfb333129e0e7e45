//! # generate: the request-level entry point
//!
//! [`Generator::generate`] is the whole pipeline for one repository URL:
//!
//! 1. validate the URL (no network call when it is rejected);
//! 2. fetch repository metadata;
//! 3. walk the default branch for at most `max_files` files;
//! 4. render: the fixed-layout [`crate::basic`] generator when no config is supplied,
//!    otherwise the provider strategy chain.
//!
//! GitHub failures end the request with a classified [`GenerateError`]. Provider failures
//! never do.

use serde::Serialize;
use tracing::Instrument;

use crate::basic::render_basic_readme;
use crate::contract::{FileSummary, GitHubApi, RepositoryInfo};
use crate::error::GenerateError;
use crate::github::{get_all_files, DEFAULT_MAX_FILES};
use crate::providers::{generate_enhanced_readme, ProviderRegistry};
use crate::readme_config::ReadmeConfig;
use crate::repo_url::parse_github_url;

/// Successful result of a generation request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub readme: String,
    pub repository: RepositoryInfo,
    pub files: Vec<FileSummary>,
}

pub struct Generator<G: GitHubApi> {
    github: G,
    providers: ProviderRegistry,
    max_files: usize,
}

impl<G: GitHubApi> Generator<G> {
    pub fn new(github: G, providers: ProviderRegistry) -> Self {
        Generator {
            github,
            providers,
            max_files: DEFAULT_MAX_FILES,
        }
    }

    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    pub fn github(&self) -> &G {
        &self.github
    }

    /// Generates a README for `repo_url`. `None` selects the basic pipeline.
    pub async fn generate(
        &self,
        repo_url: &str,
        config: Option<&ReadmeConfig>,
    ) -> Result<GenerationReport, GenerateError> {
        let request_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!("generate", %request_id, repo_url);
        self.generate_inner(repo_url, config).instrument(span).await
    }

    async fn generate_inner(
        &self,
        repo_url: &str,
        config: Option<&ReadmeConfig>,
    ) -> Result<GenerationReport, GenerateError> {
        let repo = parse_github_url(repo_url).ok_or_else(|| {
            tracing::warn!(repo_url, "Invalid GitHub URL");
            GenerateError::InvalidInput(repo_url.to_string())
        })?;

        let info = self
            .github
            .repository_info(&repo.owner, &repo.repo)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, owner = %repo.owner, repo = %repo.repo, "Failed to fetch repository info");
                GenerateError::from(e)
            })?;

        let files = get_all_files(
            &self.github,
            &repo.owner,
            &repo.repo,
            &info.default_branch,
            self.max_files,
        )
        .await;

        let readme = match config {
            None => {
                tracing::info!("Running basic pipeline");
                render_basic_readme(&info, &files)
            }
            Some(config) => {
                tracing::info!(provider = config.ai_provider.as_str(), "Running advanced pipeline");
                generate_enhanced_readme(&self.providers, &info, &files, config).await
            }
        };

        tracing::info!(
            readme_len = readme.len(),
            files = files.len(),
            "Generation complete"
        );
        Ok(GenerationReport {
            readme,
            files: files.iter().map(FileSummary::from).collect(),
            repository: info,
        })
    }
}
