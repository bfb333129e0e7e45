//! # providers: README generation strategies
//!
//! Every adapter implements [`ReadmeProvider`]. [`ProviderRegistry`] maps an
//! [`AiProvider`] choice to its adapter, and [`generate_enhanced_readme`] runs the
//! strategy chain:
//!
//! 1. the adapter registered for `config.ai_provider`, if any;
//! 2. the template engine, which cannot fail.
//!
//! Adapter errors are logged and swallowed here; callers always get Markdown back.
//!
//! ## Adapters
//! - [`local::LocalProvider`]: analyzer plus template engine.
//! - [`huggingface::HuggingFaceProvider`]: hosted inference with its own compact fallback.
//! - [`openai::OpenAiProvider`]: chat completions, requires `OPENAI_API_KEY`.
//!
//! `anthropic` has no adapter and goes straight to the template engine.

pub mod huggingface;
pub mod local;
pub mod openai;

use tracing::{info, warn};

use crate::analyze::analyze_repository;
use crate::contract::{GitHubFile, ReadmeProvider, RepositoryInfo};
use crate::readme_config::{AiProvider, ReadmeConfig};
use crate::template::render_readme;

pub use huggingface::HuggingFaceProvider;
pub use local::LocalProvider;
pub use openai::OpenAiProvider;

/// Adapters keyed by provider choice. Later registrations replace earlier ones.
#[derive(Default)]
pub struct ProviderRegistry {
    adapters: Vec<(AiProvider, Box<dyn ReadmeProvider>)>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Local, Hugging Face and OpenAI adapters.
    pub fn with_credentials(
        openai_api_key: Option<String>,
        huggingface_api_key: Option<String>,
    ) -> Self {
        let mut registry = Self::new();
        registry.register(AiProvider::Local, Box::new(LocalProvider));
        registry.register(
            AiProvider::HuggingFace,
            Box::new(HuggingFaceProvider::with_api_key(huggingface_api_key)),
        );
        registry.register(
            AiProvider::OpenAi,
            Box::new(OpenAiProvider::with_api_key(openai_api_key)),
        );
        registry
    }

    pub fn register(&mut self, provider: AiProvider, adapter: Box<dyn ReadmeProvider>) {
        self.adapters.retain(|(p, _)| *p != provider);
        self.adapters.push((provider, adapter));
    }

    pub fn get(&self, provider: AiProvider) -> Option<&dyn ReadmeProvider> {
        self.adapters
            .iter()
            .find(|(p, _)| *p == provider)
            .map(|(_, adapter)| adapter.as_ref())
    }
}

/// Result of running one strategy in the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyOutcome {
    Produced(String),
    Failed(String),
}

enum Strategy<'a> {
    Adapter(&'a dyn ReadmeProvider),
    Template,
}

impl Strategy<'_> {
    fn label(&self) -> &'static str {
        match self {
            Strategy::Adapter(adapter) => adapter.name(),
            Strategy::Template => "template",
        }
    }

    async fn run(
        &self,
        info: &RepositoryInfo,
        files: &[GitHubFile],
        config: &ReadmeConfig,
    ) -> StrategyOutcome {
        match self {
            Strategy::Adapter(adapter) => match adapter.generate_readme(info, files, config).await {
                Ok(readme) if !readme.trim().is_empty() => StrategyOutcome::Produced(readme),
                Ok(_) => StrategyOutcome::Failed("empty README".to_string()),
                Err(e) => StrategyOutcome::Failed(e.to_string()),
            },
            Strategy::Template => {
                let analysis = analyze_repository(info, files);
                StrategyOutcome::Produced(render_readme(info, &analysis, config))
            }
        }
    }
}

/// Runs the selected adapter, falling back to the template engine on any failure.
pub async fn generate_enhanced_readme(
    registry: &ProviderRegistry,
    info: &RepositoryInfo,
    files: &[GitHubFile],
    config: &ReadmeConfig,
) -> String {
    let mut chain = Vec::with_capacity(2);
    match registry.get(config.ai_provider) {
        Some(adapter) => chain.push(Strategy::Adapter(adapter)),
        None => info!(
            provider = config.ai_provider.as_str(),
            "No adapter registered, using template engine"
        ),
    }
    chain.push(Strategy::Template);

    let mut last_failure = String::new();
    for strategy in &chain {
        match strategy.run(info, files, config).await {
            StrategyOutcome::Produced(readme) => {
                info!(strategy = strategy.label(), "README generated");
                return readme;
            }
            StrategyOutcome::Failed(reason) => {
                warn!(strategy = strategy.label(), reason = %reason, "Strategy failed, falling back");
                last_failure = reason;
            }
        }
    }
    // Unreachable while the template strategy closes the chain.
    warn!(reason = %last_failure, "Every strategy failed");
    String::new()
}
