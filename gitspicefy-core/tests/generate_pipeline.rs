use gitspicefy_core::contract::{
    GitHubFile, MockGitHubApi, MockReadmeProvider, MockTextGenerationApi, RepositoryInfo,
};
use gitspicefy_core::error::{GenerateError, GitHubError, ProviderError};
use gitspicefy_core::providers::{
    generate_enhanced_readme, HuggingFaceProvider, LocalProvider, ProviderRegistry,
};
use gitspicefy_core::readme_config::{AiProvider, ReadmeConfig};
use gitspicefy_core::Generator;

fn info() -> RepositoryInfo {
    RepositoryInfo {
        name: "polls".to_string(),
        full_name: "acme/polls".to_string(),
        description: "Voting app".to_string(),
        language: "Python".to_string(),
        stars: 1,
        forks: 0,
        is_private: false,
        default_branch: "trunk".to_string(),
    }
}

fn python_repo() -> MockGitHubApi {
    let mut api = MockGitHubApi::new();
    api.expect_repository_info()
        .withf(|owner, repo| owner == "acme" && repo == "polls")
        .returning(|_, _| Ok(info()));
    api.expect_list_directory()
        .withf(|_, _, path, branch| path.is_empty() && branch == "trunk")
        .returning(|_, _, _, _| {
            Ok(vec![
                GitHubFile::file("requirements.txt", None),
                GitHubFile::file("manage.py", None),
            ])
        });
    api.expect_file_content()
        .returning(|_, _, path, _| Ok(format!("# {path}")));
    api
}

fn failing_provider() -> MockReadmeProvider {
    let mut provider = MockReadmeProvider::new();
    provider.expect_name().return_const("openai");
    provider
        .expect_generate_readme()
        .times(1)
        .returning(|_, _, _| Err(ProviderError::MissingApiKey { provider: "OpenAI" }));
    provider
}

#[tokio::test]
async fn test_invalid_url_makes_no_network_call() {
    let mut api = MockGitHubApi::new();
    api.expect_repository_info().never();
    api.expect_list_directory().never();
    let generator = Generator::new(api, ProviderRegistry::new());

    let err = generator
        .generate("https://gitlab.com/acme/polls", None)
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::InvalidInput(_)));
    assert!(err.user_message().contains("https://github.com/owner/repo"));
}

#[tokio::test]
async fn test_basic_pipeline_uses_fixed_layout() {
    let generator = Generator::new(python_repo(), ProviderRegistry::new());
    let report = generator
        .generate("https://github.com/acme/polls.git", None)
        .await
        .expect("generation should succeed");

    assert!(report.readme.contains("pip install -r requirements.txt"));
    assert!(report.readme.contains("- **Type**: Python\n"));
    assert!(report.readme.contains("### 🎯 Core Capabilities"));
    assert!(report.readme.contains("cd polls && pip install -r requirements.txt && python main.py"));
    assert!(!report.readme.contains("## 🛠️ Tech Stack"));
    assert_eq!(report.repository.full_name, "acme/polls");
    assert_eq!(report.files.len(), 2);
    assert_eq!(report.files[0].path, "requirements.txt");
}

#[tokio::test]
async fn test_provider_failure_falls_back_to_template() {
    let mut registry = ProviderRegistry::new();
    registry.register(AiProvider::OpenAi, Box::new(failing_provider()));
    let generator = Generator::new(python_repo(), registry);
    let config = ReadmeConfig {
        ai_provider: AiProvider::OpenAi,
        ..Default::default()
    };

    let report = generator
        .generate("https://github.com/acme/polls", Some(&config))
        .await
        .expect("fallback should hide provider errors");
    assert!(!report.readme.is_empty());
    assert!(report.readme.contains("Django Application"));
}

#[tokio::test]
async fn test_repository_errors_are_classified() {
    let mut api = MockGitHubApi::new();
    api.expect_repository_info().returning(|owner, repo| {
        Err(GitHubError::NotFound {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    });
    let generator = Generator::new(api, ProviderRegistry::new());
    let err = generator
        .generate("https://github.com/acme/missing", None)
        .await
        .unwrap_err();
    assert!(matches!(&err, GenerateError::NotFound(r) if r == "acme/missing"));

    let mut api = MockGitHubApi::new();
    api.expect_repository_info().returning(|_, _| {
        Err(GitHubError::RateLimited {
            reset_at: Some(1_700_000_000),
        })
    });
    let generator = Generator::new(api, ProviderRegistry::new());
    let err = generator
        .generate("https://github.com/acme/polls", None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GenerateError::RateLimited {
            reset_at: Some(1_700_000_000)
        }
    ));
    assert!(err.user_message().contains("GITHUB_TOKEN"));
}

#[tokio::test]
async fn test_unregistered_provider_uses_template() {
    let mut registry = ProviderRegistry::new();
    registry.register(AiProvider::Local, Box::new(LocalProvider));
    let config = ReadmeConfig {
        ai_provider: AiProvider::Anthropic,
        ..Default::default()
    };
    let files = vec![GitHubFile::file("requirements.txt", Some("flask"))];

    let readme = generate_enhanced_readme(&registry, &info(), &files, &config).await;
    assert!(readme.contains("# 🐍 polls"));
}

#[tokio::test]
async fn test_huggingface_uses_fallback_when_every_model_fails() {
    let mut api = MockTextGenerationApi::new();
    api.expect_complete()
        .times(3)
        .returning(|_, _| Err(ProviderError::Status {
            status: 503,
            body: "loading".into(),
        }));
    let mut registry = ProviderRegistry::new();
    registry.register(
        AiProvider::HuggingFace,
        Box::new(HuggingFaceProvider::new(api)),
    );
    let config = ReadmeConfig {
        ai_provider: AiProvider::HuggingFace,
        ..Default::default()
    };
    let files = vec![GitHubFile::file("requirements.txt", Some("flask"))];

    let readme = generate_enhanced_readme(&registry, &info(), &files, &config).await;
    assert!(readme.contains("This Python project demonstrates modern development practices"));
    assert!(readme.contains("pip install -r requirements.txt"));
}

#[tokio::test]
async fn test_huggingface_takes_first_useful_model() {
    let mut api = MockTextGenerationApi::new();
    api.expect_complete()
        .withf(|model, _| model == "microsoft/DialoGPT-medium")
        .returning(|_, _| Ok("too short".to_string()));
    api.expect_complete()
        .withf(|model, _| model == "facebook/blenderbot-400M-distill")
        .returning(|_, _| Ok(format!("Here you go\n# Polls\n{}", "text ".repeat(40))));
    api.expect_complete()
        .withf(|model, _| model == "microsoft/DialoGPT-small")
        .never();
    let provider = HuggingFaceProvider::new(api);
    let mut registry = ProviderRegistry::new();
    registry.register(AiProvider::HuggingFace, Box::new(provider));
    let config = ReadmeConfig {
        ai_provider: AiProvider::HuggingFace,
        ..Default::default()
    };

    let readme = generate_enhanced_readme(&registry, &info(), &[], &config).await;
    assert!(readme.starts_with("<div align=\"center\">\n\n# Polls"));
}
