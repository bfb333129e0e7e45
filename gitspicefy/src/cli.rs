//! # gitspicefy CLI Interface (Module)
//!
//! Command parsing and the async [`run`] entrypoint. All generation logic lives in
//! `gitspicefy-core`; this module only wires configuration, credentials and output.
//!
//! ## Commands
//! - `generate --url <URL> [--config <yaml>] [--provider <p>] [--output <file>] [--basic]`
//! - `analyze --url <URL>`: prints the repository descriptor as JSON
//! - `logo --name <N> [--description <D>] [--project-type <T>]`: prints an SVG logo
//!
//! Generated documents go to stdout (or `--output`); logs go to stderr.
use crate::load_config::{load_config, CliConfig};
use anyhow::Result;
use clap::{Parser, Subcommand};
use gitspicefy_core::analyze::analyze_repository;
use gitspicefy_core::contract::GitHubApi;
use gitspicefy_core::github::{get_all_files, GitHubClient};
use gitspicefy_core::logo::generate_logo_for_project;
use gitspicefy_core::providers::ProviderRegistry;
use gitspicefy_core::readme_config::AiProvider;
use gitspicefy_core::repo_url::parse_github_url;
use gitspicefy_core::{GenerateError, Generator};
use std::path::{Path, PathBuf};

/// CLI for gitspicefy: turn a GitHub repository into a README.
#[derive(Parser)]
#[clap(
    name = "gitspicefy",
    version,
    about = "Generate README documents for GitHub repositories"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a README for a repository
    Generate {
        /// GitHub repository URL, e.g. https://github.com/owner/repo
        #[clap(long)]
        url: String,
        /// Path to the YAML config file
        #[clap(long)]
        config: Option<PathBuf>,
        /// AI provider override: local, huggingface, openai or anthropic
        #[clap(long)]
        provider: Option<String>,
        /// Write the README to this file instead of stdout
        #[clap(long)]
        output: Option<PathBuf>,
        /// Use the basic pipeline (fixed layout, ignores the config's README settings)
        #[clap(long)]
        basic: bool,
    },
    /// Print the repository analysis as JSON
    Analyze {
        #[clap(long)]
        url: String,
        #[clap(long)]
        config: Option<PathBuf>,
    },
    /// Print an SVG logo for a project
    Logo {
        #[clap(long)]
        name: String,
        #[clap(long)]
        description: Option<String>,
        #[clap(long)]
        project_type: Option<String>,
    },
}

fn resolve_config(path: Option<&Path>) -> Result<CliConfig> {
    match path {
        Some(p) => load_config(p),
        None => {
            let config = CliConfig::from_env();
            config.trace_loaded();
            Ok(config)
        }
    }
}

fn github_client(config: &CliConfig) -> Result<GitHubClient> {
    GitHubClient::with_base_url(
        &config.github.api_base_url,
        config.credentials.github_token.clone(),
    )
    .map_err(|e| anyhow::anyhow!("Failed to construct GitHub client: {e}"))
}

fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", path, e))?;
            tracing::info!(output = ?path, bytes = content.len(), "Wrote output file");
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn to_anyhow(e: GenerateError) -> anyhow::Error {
    tracing::error!(error = %e, "Generation failed");
    anyhow::anyhow!(e.user_message())
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    // Emit a top-level 'trace_initialised' event at the very start
    tracing::info!("trace_initialised");

    match cli.command {
        Commands::Generate {
            url,
            config,
            provider,
            output,
            basic,
        } => {
            let mut config = resolve_config(config.as_deref())?;
            if let Some(p) = provider.as_deref() {
                config.readme.ai_provider = AiProvider::from(p);
            }
            tracing::info!(command = "generate", url = %url, basic, "Starting README generation");

            let registry = ProviderRegistry::with_credentials(
                config.credentials.openai_api_key.clone(),
                config.credentials.huggingface_api_key.clone(),
            );
            let generator = Generator::new(github_client(&config)?, registry)
                .with_max_files(config.github.max_files);
            let readme_config = (!basic).then_some(&config.readme);
            let report = generator
                .generate(&url, readme_config)
                .await
                .map_err(to_anyhow)?;
            tracing::info!(
                command = "generate",
                repository = %report.repository.full_name,
                files = report.files.len(),
                "README generation complete"
            );
            emit(&report.readme, output.as_deref())
        }
        Commands::Analyze { url, config } => {
            let config = resolve_config(config.as_deref())?;
            let repo = parse_github_url(&url)
                .ok_or_else(|| to_anyhow(GenerateError::InvalidInput(url.clone())))?;
            let client = github_client(&config)?;
            let info = client
                .repository_info(&repo.owner, &repo.repo)
                .await
                .map_err(|e| to_anyhow(e.into()))?;
            let files = get_all_files(
                &client,
                &repo.owner,
                &repo.repo,
                &info.default_branch,
                config.github.max_files,
            )
            .await;
            let analysis = analyze_repository(&info, &files);
            tracing::info!(command = "analyze", project_type = %analysis.project_type, "Analysis complete");
            emit(&serde_json::to_string_pretty(&analysis)?, None)
        }
        Commands::Logo {
            name,
            description,
            project_type,
        } => {
            let svg = generate_logo_for_project(
                &name,
                project_type.as_deref(),
                description.as_deref(),
            );
            emit(&svg, None)
        }
    }
}
