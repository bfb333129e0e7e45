use async_trait::async_trait;

use crate::analyze::analyze_repository;
use crate::contract::{GitHubFile, ReadmeProvider, RepositoryInfo};
use crate::error::ProviderError;
use crate::readme_config::ReadmeConfig;
use crate::template::render_readme;

/// Analyzer plus template engine. No model is invoked and it never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalProvider;

#[async_trait]
impl ReadmeProvider for LocalProvider {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn generate_readme(
        &self,
        info: &RepositoryInfo,
        files: &[GitHubFile],
        config: &ReadmeConfig,
    ) -> Result<String, ProviderError> {
        let analysis = analyze_repository(info, files);
        Ok(render_readme(info, &analysis, config))
    }
}
