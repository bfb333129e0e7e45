//! OpenAI chat-completions adapter.
//!
//! Requires an API key (`OPENAI_API_KEY`); without it every call fails fast with
//! [`ProviderError::MissingApiKey`] and the pipeline falls back to the template engine.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::contract::{GitHubFile, ReadmeProvider, RepositoryInfo, TextGenerationApi};
use crate::error::ProviderError;
use crate::readme_config::ReadmeConfig;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";

const SYSTEM_PROMPT: &str = "You are an expert technical writer specializing in creating comprehensive, professional README files for software projects. Generate detailed, well-structured documentation that follows best practices.";
const MAX_TOKENS: u32 = 4000;
const TEMPERATURE: f32 = 0.7;
const PROMPT_FILE_LIMIT: usize = 20;

pub struct OpenAiApi {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiApi {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: String) -> Self {
        OpenAiApi {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl TextGenerationApi for OpenAiApi {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        let body = json!({
            "model": model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt },
            ],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
        });
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "OpenAI API error");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let completion: ChatCompletion = response.json().await?;
        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default())
    }
}

/// Model to request: the configured one, unless it names the local template engine.
pub fn model_for(config: &ReadmeConfig) -> &str {
    let model = config.ai_model.trim();
    if model.is_empty() || model == ReadmeConfig::default().ai_model {
        DEFAULT_MODEL
    } else {
        model
    }
}

pub fn build_prompt(info: &RepositoryInfo, files: &[GitHubFile], config: &ReadmeConfig) -> String {
    let structure: Vec<&str> = files
        .iter()
        .filter(|f| !f.is_dir())
        .take(PROMPT_FILE_LIMIT)
        .map(|f| f.path.as_str())
        .collect();
    let description = if info.description.is_empty() {
        "No description provided"
    } else {
        info.description.as_str()
    };

    let mut prompt = format!(
        "Create a comprehensive README.md for the following GitHub repository:\n\n\
         **Repository Information:**\n\
         - Name: {}\n\
         - Description: {description}\n\
         - Language: {}\n\
         - Stars: {}\n\
         - Forks: {}\n\n\
         **File Structure (first {PROMPT_FILE_LIMIT} files):**\n{}\n\n\
         **Configuration:**\n\
         - Header Alignment: {}\n\
         - Include Emojis: {}\n\
         - Badge Style: {}\n\
         - License: {}\n\n\
         **Sections to Include:**",
        info.name,
        info.language,
        info.stars,
        info.forks,
        structure.join("\n"),
        config.header_alignment.as_str(),
        config.add_emojis_to_headings,
        config.badge_style.as_str(),
        config.license_type.as_str(),
    );
    for section in config.sections.enabled() {
        prompt.push_str(&format!("\n- {section}"));
    }
    if let Some(custom) = config.custom_prompt.as_deref().filter(|p| !p.trim().is_empty()) {
        prompt.push_str(&format!("\n\n**Additional Instructions:**\n{custom}"));
    }
    prompt.push_str(&format!(
        "\n\n**Requirements:**\n\
         1. Use professional, clear language\n\
         2. Include relevant badges and shields\n\
         3. Provide comprehensive installation and usage instructions\n\
         4. Add appropriate emojis if enabled\n\
         5. Follow the specified alignment for headers\n\
         6. Make it engaging and informative\n\
         7. Include code examples where appropriate\n\
         8. Add a table of contents if the README is long\n\
         9. Use the specified badge style: {}\n\n\
         Generate a complete, professional README.md file:",
        config.badge_style.as_str()
    ));
    prompt
}

/// `api` is `None` when no key is configured.
pub struct OpenAiProvider<T: TextGenerationApi = OpenAiApi> {
    api: Option<T>,
}

impl OpenAiProvider<OpenAiApi> {
    /// Without a key the provider stays registered but fails fast on every call.
    pub fn with_api_key(api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|k| !k.is_empty());
        info!(api_key_set = api_key.is_some(), "Initialized OpenAiProvider");
        OpenAiProvider {
            api: api_key.map(OpenAiApi::new),
        }
    }
}

impl<T: TextGenerationApi> OpenAiProvider<T> {
    pub fn new(api: T) -> Self {
        OpenAiProvider { api: Some(api) }
    }

    pub fn unconfigured() -> Self {
        OpenAiProvider { api: None }
    }
}

#[async_trait]
impl<T: TextGenerationApi> ReadmeProvider for OpenAiProvider<T> {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn generate_readme(
        &self,
        info: &RepositoryInfo,
        files: &[GitHubFile],
        config: &ReadmeConfig,
    ) -> Result<String, ProviderError> {
        let api = self
            .api
            .as_ref()
            .ok_or(ProviderError::MissingApiKey { provider: "OpenAI" })?;
        let model = model_for(config);
        info!(model, repo = %info.full_name, "Requesting OpenAI completion");
        let text = api.complete(model, &build_prompt(info, files, config)).await?;
        if text.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::MockTextGenerationApi;

    fn info() -> RepositoryInfo {
        RepositoryInfo {
            name: "demo".into(),
            full_name: "acme/demo".into(),
            description: "Tiny demo".into(),
            language: "Rust".into(),
            stars: 7,
            forks: 2,
            is_private: false,
            default_branch: "main".into(),
        }
    }

    #[test]
    fn model_defaults_to_gpt4() {
        assert_eq!(model_for(&ReadmeConfig::default()), "gpt-4");
        let config = ReadmeConfig {
            ai_model: "gpt-4o-mini".into(),
            ..Default::default()
        };
        assert_eq!(model_for(&config), "gpt-4o-mini");
    }

    #[test]
    fn prompt_carries_sections_and_custom_instructions() {
        let config = ReadmeConfig {
            custom_prompt: Some("Mention the CLI".into()),
            ..Default::default()
        };
        let prompt = build_prompt(&info(), &[GitHubFile::file("src/main.rs", Some(""))], &config);
        assert!(prompt.contains("- Name: demo"));
        assert!(prompt.contains("src/main.rs"));
        assert!(prompt.contains("\n- techStack"));
        assert!(!prompt.contains("\n- roadmap"));
        assert!(prompt.contains("Mention the CLI"));
        assert!(prompt.contains("Use the specified badge style: for-the-badge"));
    }

    #[tokio::test]
    async fn missing_key_fails_fast() {
        let provider: OpenAiProvider<MockTextGenerationApi> = OpenAiProvider::unconfigured();
        let err = provider
            .generate_readme(&info(), &[], &ReadmeConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey { .. }));
    }

    #[tokio::test]
    async fn empty_completion_is_an_error() {
        let mut api = MockTextGenerationApi::new();
        api.expect_complete()
            .times(1)
            .returning(|_, _| Ok("   ".to_string()));
        let provider = OpenAiProvider::new(api);
        let err = provider
            .generate_readme(&info(), &[], &ReadmeConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::EmptyResponse));
    }
}
