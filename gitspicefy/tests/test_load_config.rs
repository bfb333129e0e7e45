use gitspicefy::load_config::load_config;
use gitspicefy_core::readme_config::{AiProvider, BadgeStyle, HeaderAlignment};
use serial_test::serial;
use std::env;
use std::fs::write;
use tempfile::NamedTempFile;

fn config_file(yaml: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("temp file");
    write(file.path(), yaml).unwrap();
    file
}

fn clear_credentials() {
    for var in ["GITHUB_TOKEN", "OPENAI_API_KEY", "HUGGINGFACE_API_KEY"] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn loads_readme_and_github_sections() {
    clear_credentials();
    let file = config_file(
        r#"
readme:
  headerAlignment: left
  aiProvider: huggingface
  badgeStyle: flat-square
  customFeatures:
    - Offline mode
  sections:
    roadmap: true
github:
  max_files: 30
"#,
    );

    let config = load_config(file.path()).expect("Config should load");

    assert_eq!(config.readme.header_alignment, HeaderAlignment::Left);
    assert_eq!(config.readme.ai_provider, AiProvider::HuggingFace);
    assert_eq!(config.readme.badge_style, BadgeStyle::FlatSquare);
    assert_eq!(config.readme.custom_features, vec!["Offline mode".to_string()]);
    assert!(config.readme.sections.roadmap);
    // Unspecified toggles keep their defaults.
    assert!(config.readme.sections.features);
    assert_eq!(config.github.max_files, 30);
    assert_eq!(config.github.api_base_url, "https://api.github.com");
    assert_eq!(config.credentials.github_token, None);
}

#[test]
#[serial]
fn empty_file_yields_defaults() {
    clear_credentials();
    let file = config_file("");

    let config = load_config(file.path()).expect("Empty config should load");

    assert_eq!(config.readme, gitspicefy_core::ReadmeConfig::default());
    assert_eq!(config.github.max_files, 50);
}

#[test]
#[serial]
fn credentials_come_from_environment() {
    clear_credentials();
    env::set_var("GITHUB_TOKEN", "ghp_test");
    env::set_var("OPENAI_API_KEY", "");
    env::set_var("HUGGINGFACE_API_KEY", "hf_test");

    let file = config_file("github:\n  max_files: 5\n");
    let config = load_config(file.path()).expect("Config should load");

    assert_eq!(config.credentials.github_token.as_deref(), Some("ghp_test"));
    // Empty values count as unset.
    assert_eq!(config.credentials.openai_api_key, None);
    assert_eq!(config.credentials.huggingface_api_key.as_deref(), Some("hf_test"));

    let debug = format!("{:?}", config.credentials);
    assert!(!debug.contains("ghp_test"));
    assert!(debug.contains("<set>"));

    clear_credentials();
}

#[test]
#[serial]
fn rejects_malformed_yaml() {
    let file = config_file("readme:\n  headerAlignment: sideways\n");
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config YAML"));
}

#[test]
#[serial]
fn rejects_zero_max_files() {
    let file = config_file("github:\n  max_files: 0\n");
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("max_files"));
}

#[test]
#[serial]
fn missing_file_is_an_error() {
    let err = load_config("/definitely/not/here.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
