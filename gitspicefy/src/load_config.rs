/// `load_config` module: Loads a static YAML config and injects secrets from the environment.
///
/// This module is the only place where user-supplied YAML is parsed into strongly-typed structs.
///
/// # Responsibilities
/// - Parse the YAML file into a [`CliConfig`] (`readme` and `github` sections, both optional)
/// - Inject API credentials from the environment (`GITHUB_TOKEN`, `OPENAI_API_KEY`,
///   `HUGGINGFACE_API_KEY`); secrets never live in the YAML file
/// - Produce clear diagnostics: any failure to read or parse results in an `anyhow::Error`
///
/// # Accepted YAML
/// ```yaml
/// readme:
///   headerAlignment: left
///   aiProvider: huggingface
///   sections:
///     roadmap: true
/// github:
///   max_files: 30
/// ```
use anyhow::Result;
use gitspicefy_core::github::{DEFAULT_API_BASE, DEFAULT_MAX_FILES};
use gitspicefy_core::ReadmeConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{error, info};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GitHubSection {
    pub max_files: usize,
    pub api_base_url: String,
}

impl Default for GitHubSection {
    fn default() -> Self {
        GitHubSection {
            max_files: DEFAULT_MAX_FILES,
            api_base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

/// Secrets read from the environment at load time.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub github_token: Option<String>,
    pub openai_api_key: Option<String>,
    pub huggingface_api_key: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("github_token", &self.github_token.as_ref().map(|_| "<set>"))
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<set>"))
            .field(
                "huggingface_api_key",
                &self.huggingface_api_key.as_ref().map(|_| "<set>"),
            )
            .finish()
    }
}

impl Credentials {
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Credentials {
            github_token: var("GITHUB_TOKEN"),
            openai_api_key: var("OPENAI_API_KEY"),
            huggingface_api_key: var("HUGGINGFACE_API_KEY"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub readme: ReadmeConfig,
    pub github: GitHubSection,
    pub credentials: Credentials,
}

impl CliConfig {
    /// Defaults plus environment credentials, for runs without a config file.
    pub fn from_env() -> Self {
        CliConfig {
            credentials: Credentials::from_env(),
            ..Default::default()
        }
    }

    pub fn trace_loaded(&self) {
        self.readme.trace_loaded();
        info!(
            max_files = self.github.max_files,
            api_base_url = %self.github.api_base_url,
            github_token_set = self.credentials.github_token.is_some(),
            openai_key_set = self.credentials.openai_api_key.is_some(),
            huggingface_key_set = self.credentials.huggingface_api_key.is_some(),
            "Loaded CliConfig"
        );
    }
}

/// Loads a static YAML config file (no secrets) and injects credentials from the environment.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CliConfig> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => content,
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(anyhow::anyhow!(
                "Failed to read config file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct RawConfig {
        readme: ReadmeConfig,
        github: GitHubSection,
    }

    // An empty file is a valid, all-defaults config.
    let raw: RawConfig = if config_content.trim().is_empty() {
        RawConfig::default()
    } else {
        match serde_yaml::from_str(&config_content) {
            Ok(conf) => {
                info!(config_path = ?path_ref, "Parsed config YAML successfully");
                conf
            }
            Err(e) => {
                error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
                return Err(anyhow::anyhow!("Failed to parse config YAML: {e}"));
            }
        }
    };

    if raw.github.max_files == 0 {
        return Err(anyhow::anyhow!("github.max_files must be at least 1"));
    }

    let config = CliConfig {
        readme: raw.readme,
        github: raw.github,
        credentials: Credentials::from_env(),
    };
    config.trace_loaded();
    Ok(config)
}
