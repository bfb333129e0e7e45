//! Hugging Face inference adapter.
//!
//! Candidate models are tried in order; the first response longer than
//! [`MIN_USEFUL_RESPONSE`] characters is post-processed and returned. When every model
//! fails, the compact fallback README is returned instead, so this adapter only errors on
//! programming mistakes, never on remote failures.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::contract::{GitHubFile, ReadmeProvider, RepositoryInfo, TextGenerationApi};
use crate::error::ProviderError;
use crate::readme_config::{HeaderAlignment, ReadmeConfig};
use crate::template::render_fallback_readme;

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";

pub const CANDIDATE_MODELS: &[&str] = &[
    "microsoft/DialoGPT-medium",
    "facebook/blenderbot-400M-distill",
    "microsoft/DialoGPT-small",
];

pub const MIN_USEFUL_RESPONSE: usize = 100;

const PROMPT_FILE_LIMIT: usize = 10;

/// Raw inference API client. The bearer token is optional for public models.
pub struct HuggingFaceApi {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HuggingFaceApi {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: Option<String>) -> Self {
        HuggingFaceApi {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }
}

fn generated_text(data: &Value) -> Option<&str> {
    match data {
        Value::Array(items) => items.first()?.get("generated_text")?.as_str(),
        other => other.get("generated_text")?.as_str(),
    }
}

#[async_trait]
impl TextGenerationApi for HuggingFaceApi {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        let body = json!({
            "inputs": prompt,
            "parameters": { "max_length": 1000, "temperature": 0.7, "do_sample": true },
            "options": { "wait_for_model": true },
        });
        let mut request = self
            .client
            .post(format!("{}/{}", self.base_url, model))
            .json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let data: Value = response.json().await?;
        generated_text(&data)
            .map(str::to_string)
            .ok_or(ProviderError::EmptyResponse)
    }
}

pub fn build_prompt(info: &RepositoryInfo, files: &[GitHubFile]) -> String {
    let paths: Vec<&str> = files
        .iter()
        .filter(|f| !f.is_dir())
        .take(PROMPT_FILE_LIMIT)
        .map(|f| f.path.as_str())
        .collect();
    let description = if info.description.is_empty() {
        "A software project"
    } else {
        info.description.as_str()
    };
    format!(
        "Create a README.md for {} ({}): {}. Files: {}. Include installation, usage, and features.",
        info.name,
        info.language,
        description,
        paths.join(", ")
    )
}

/// Drops chatter before the first heading, adds a title if missing and applies alignment.
pub fn format_response(response: &str, info: &RepositoryInfo, config: &ReadmeConfig) -> String {
    let mut cleaned = match response.find('#') {
        Some(i) => response[i..].trim().to_string(),
        None => response.trim().to_string(),
    };
    if !cleaned.starts_with('#') {
        let emoji = if config.add_emojis_to_headings { "🚀 " } else { "" };
        cleaned = format!("# {emoji}{}\n\n{cleaned}", info.name);
    }
    match config.header_alignment {
        HeaderAlignment::Left => cleaned,
        alignment => format!(
            "<div align=\"{}\">\n\n{cleaned}\n\n</div>",
            alignment.as_str()
        ),
    }
}

pub struct HuggingFaceProvider<T: TextGenerationApi = HuggingFaceApi> {
    api: T,
}

impl HuggingFaceProvider<HuggingFaceApi> {
    /// Anonymous access when `api_key` is `None`.
    pub fn with_api_key(api_key: Option<String>) -> Self {
        info!(api_key_set = api_key.is_some(), "Initialized HuggingFaceProvider");
        HuggingFaceProvider::new(HuggingFaceApi::new(api_key))
    }
}

impl<T: TextGenerationApi> HuggingFaceProvider<T> {
    pub fn new(api: T) -> Self {
        HuggingFaceProvider { api }
    }
}

#[async_trait]
impl<T: TextGenerationApi> ReadmeProvider for HuggingFaceProvider<T> {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    async fn generate_readme(
        &self,
        info: &RepositoryInfo,
        files: &[GitHubFile],
        config: &ReadmeConfig,
    ) -> Result<String, ProviderError> {
        let prompt = build_prompt(info, files);
        for model in CANDIDATE_MODELS {
            match self.api.complete(model, &prompt).await {
                Ok(text) if text.chars().count() > MIN_USEFUL_RESPONSE => {
                    info!(model, "Hugging Face model produced README");
                    return Ok(format_response(&text, info, config));
                }
                Ok(text) => {
                    warn!(model, length = text.len(), "Model response too short, trying next")
                }
                Err(e) => warn!(model, error = %e, "Model failed, trying next"),
            }
        }
        warn!(repo = %info.full_name, "All Hugging Face models failed, using fallback README");
        Ok(render_fallback_readme(info, files, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> RepositoryInfo {
        RepositoryInfo {
            name: "demo".into(),
            full_name: "acme/demo".into(),
            description: String::new(),
            language: "Go".into(),
            stars: 0,
            forks: 0,
            is_private: false,
            default_branch: "main".into(),
        }
    }

    #[test]
    fn prompt_lists_first_ten_files() {
        let mut files: Vec<GitHubFile> = (0..12)
            .map(|i| GitHubFile::file(&format!("f{i}.go"), Some("")))
            .collect();
        files.insert(0, GitHubFile::dir("cmd"));
        let prompt = build_prompt(&info(), &files);
        assert!(prompt.contains("demo (Go): A software project"));
        assert!(prompt.contains("f9.go"));
        assert!(!prompt.contains("f10.go"));
        assert!(!prompt.contains("cmd"));
    }

    #[test]
    fn formatting_strips_preamble_and_wraps() {
        let config = ReadmeConfig::default();
        let out = format_response("Sure! Here it is:\n# Demo\nbody", &info(), &config);
        assert!(out.starts_with("<div align=\"center\">\n\n# Demo"));
        assert!(out.ends_with("</div>"));

        let left = ReadmeConfig {
            header_alignment: HeaderAlignment::Left,
            ..Default::default()
        };
        let out = format_response("no heading here", &info(), &left);
        assert_eq!(out, "# 🚀 demo\n\nno heading here");
    }

    #[test]
    fn extracts_generated_text_from_both_shapes() {
        let array = json!([{ "generated_text": "a" }]);
        let object = json!({ "generated_text": "b" });
        assert_eq!(generated_text(&array), Some("a"));
        assert_eq!(generated_text(&object), Some("b"));
        assert_eq!(generated_text(&json!({ "error": "loading" })), None);
    }
}
