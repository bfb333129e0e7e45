//! User-chosen README configuration.
//!
//! Deserializes from camelCase JSON or YAML; every field is optional and falls back to
//! [`ReadmeConfig::default`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderAlignment {
    Left,
    #[default]
    Center,
    Right,
}

impl HeaderAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderAlignment::Left => "left",
            HeaderAlignment::Center => "center",
            HeaderAlignment::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TocStyle {
    #[default]
    Bullet,
    Numbered,
    Minimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BadgeStyle {
    #[serde(rename = "flat")]
    Flat,
    #[serde(rename = "flat-square")]
    FlatSquare,
    #[default]
    #[serde(rename = "for-the-badge")]
    ForTheBadge,
    #[serde(rename = "plastic")]
    Plastic,
}

impl BadgeStyle {
    /// Value of the shields.io `style` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeStyle::Flat => "flat",
            BadgeStyle::FlatSquare => "flat-square",
            BadgeStyle::ForTheBadge => "for-the-badge",
            BadgeStyle::Plastic => "plastic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    OpenAi,
    Anthropic,
    HuggingFace,
    #[default]
    Local,
}

impl AiProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiProvider::OpenAi => "openai",
            AiProvider::Anthropic => "anthropic",
            AiProvider::HuggingFace => "huggingface",
            AiProvider::Local => "local",
        }
    }
}

impl From<&str> for AiProvider {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "openai" => AiProvider::OpenAi,
            "anthropic" => AiProvider::Anthropic,
            "huggingface" | "hugging-face" | "hf" => AiProvider::HuggingFace,
            "local" => AiProvider::Local,
            other => {
                tracing::warn!(provider = other, "Unknown AI provider, defaulting to local");
                AiProvider::Local
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LicenseType {
    #[default]
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "Apache-2.0")]
    Apache2,
    #[serde(rename = "GPL-3.0")]
    Gpl3,
    #[serde(rename = "BSD-3-Clause")]
    Bsd3Clause,
    #[serde(rename = "Custom")]
    Custom,
}

impl LicenseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseType::Mit => "MIT",
            LicenseType::Apache2 => "Apache-2.0",
            LicenseType::Gpl3 => "GPL-3.0",
            LicenseType::Bsd3Clause => "BSD-3-Clause",
            LicenseType::Custom => "Custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Default,
    Blue,
    Green,
    Purple,
    Custom,
}

/// Section toggles. Each flag gates exactly one Markdown section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sections {
    pub features: bool,
    pub project_structure: bool,
    pub project_ideas: bool,
    pub roadmap: bool,
    pub contributors: bool,
    pub license: bool,
    pub acknowledgments: bool,
    pub installation: bool,
    pub usage: bool,
    pub tech_stack: bool,
    pub badges: bool,
}

impl Default for Sections {
    fn default() -> Self {
        Sections {
            features: true,
            project_structure: true,
            project_ideas: false,
            roadmap: false,
            contributors: true,
            license: true,
            acknowledgments: true,
            installation: true,
            usage: true,
            tech_stack: true,
            badges: true,
        }
    }
}

impl Sections {
    /// Names of enabled sections, in declaration order.
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            ("features", self.features),
            ("projectStructure", self.project_structure),
            ("projectIdeas", self.project_ideas),
            ("roadmap", self.roadmap),
            ("contributors", self.contributors),
            ("license", self.license),
            ("acknowledgments", self.acknowledgments),
            ("installation", self.installation),
            ("usage", self.usage),
            ("techStack", self.tech_stack),
            ("badges", self.badges),
        ]
        .into_iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReadmeConfig {
    pub header_alignment: HeaderAlignment,
    pub table_of_contents_style: TocStyle,
    pub generate_logo: bool,
    pub add_emojis_to_headings: bool,
    pub ai_provider: AiProvider,
    pub ai_model: String,
    pub custom_prompt: Option<String>,
    pub sections: Sections,
    pub project_description: Option<String>,
    pub custom_features: Vec<String>,
    pub custom_tech_stack: Vec<String>,
    pub license_type: LicenseType,
    pub badge_style: BadgeStyle,
    pub color_scheme: ColorScheme,
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        ReadmeConfig {
            header_alignment: HeaderAlignment::Center,
            table_of_contents_style: TocStyle::Bullet,
            generate_logo: false,
            add_emojis_to_headings: true,
            ai_provider: AiProvider::Local,
            ai_model: "intelligent-template".to_string(),
            custom_prompt: None,
            sections: Sections::default(),
            project_description: None,
            custom_features: Vec::new(),
            custom_tech_stack: Vec::new(),
            license_type: LicenseType::Mit,
            badge_style: BadgeStyle::ForTheBadge,
            color_scheme: ColorScheme::Default,
        }
    }
}

impl ReadmeConfig {
    pub fn trace_loaded(&self) {
        tracing::info!(
            provider = self.ai_provider.as_str(),
            model = %self.ai_model,
            alignment = self.header_alignment.as_str(),
            sections = ?self.sections.enabled(),
            "Loaded ReadmeConfig"
        );
        tracing::debug!(?self, "ReadmeConfig loaded (full debug)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let config: ReadmeConfig = serde_json::from_str(
            r#"{"headerAlignment":"left","aiProvider":"huggingface","sections":{"roadmap":true},"badgeStyle":"flat-square","licenseType":"Apache-2.0"}"#,
        )
        .unwrap();
        assert_eq!(config.header_alignment, HeaderAlignment::Left);
        assert_eq!(config.ai_provider, AiProvider::HuggingFace);
        assert!(config.sections.roadmap);
        assert!(config.sections.features);
        assert!(!config.sections.project_ideas);
        assert_eq!(config.badge_style.as_str(), "flat-square");
        assert_eq!(config.license_type.as_str(), "Apache-2.0");
        assert!(config.add_emojis_to_headings);
    }

    #[test]
    fn provider_names_parse_loosely() {
        assert_eq!(AiProvider::from("OpenAI"), AiProvider::OpenAi);
        assert_eq!(AiProvider::from("hf"), AiProvider::HuggingFace);
        assert_eq!(AiProvider::from("something-else"), AiProvider::Local);
    }
}
