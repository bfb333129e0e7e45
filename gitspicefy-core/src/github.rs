//! GitHub REST client and the bounded repository walk.
//!
//! [`GitHubClient`] implements [`GitHubApi`] over `reqwest`. [`get_all_files`] walks any
//! [`GitHubApi`] depth-first from the repository root, collecting at most `max_files` files
//! with content. Failures inside the walk are logged and skipped: one broken subtree never
//! fails the whole generation. Throttling is the exception: the first rate-limit error ends
//! the walk and the files collected so far are returned.

use std::collections::HashSet;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::{header, Client, Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, warn};
use url::Url;

pub use crate::contract::{EntryKind, GitHubApi, GitHubFile, RepositoryInfo};
use crate::error::GitHubError;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_MAX_FILES: usize = 50;
/// Files of this size or larger are never downloaded.
pub const MAX_FILE_SIZE: u64 = 100_000;

const USER_AGENT: &str = "GitSpicefy-App/1.0";
const MAX_RETRIES: u32 = 2;
const MAX_RATE_LIMIT_WAIT: Duration = Duration::from_secs(60);

const ALLOWED_EXTENSIONS: &[&str] = &[
    ".js", ".jsx", ".ts", ".tsx", ".py", ".java", ".cpp", ".c", ".h", ".css", ".scss", ".html",
    ".vue", ".php", ".rb", ".go", ".rs", ".md", ".txt", ".json", ".xml", ".yml", ".yaml", ".toml",
    ".sh", ".bat", ".ps1", ".sql", ".r", ".swift", ".kt", ".dart",
];

const ALLOWED_NAMES: &[&str] = &[
    "readme",
    "license",
    "changelog",
    "contributing",
    "package.json",
    "composer.json",
    "cargo.toml",
    "go.mod",
    "requirements.txt",
    "dockerfile",
    "docker-compose.yml",
    ".gitignore",
    ".env.example",
];

pub const SKIPPED_DIRECTORIES: &[&str] = &[
    "node_modules",
    ".git",
    ".next",
    "dist",
    "build",
    "target",
    "vendor",
    "__pycache__",
    ".vscode",
    ".idea",
    "coverage",
    ".nyc_output",
    "logs",
    "tmp",
    "temp",
    ".cache",
];

/// Whether a file name passes the extension/name allow-list.
pub fn should_process_file(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    // A name without a dot is compared as a whole.
    let extension = lower.rfind('.').map(|i| &lower[i..]).unwrap_or(&lower);
    ALLOWED_EXTENSIONS.contains(&extension) || ALLOWED_NAMES.iter().any(|n| lower.contains(n))
}

pub fn should_process_directory(dir_name: &str) -> bool {
    !SKIPPED_DIRECTORIES.contains(&dir_name.to_lowercase().as_str())
}

/// True when any directory segment of `path` is on the deny-list.
pub fn is_in_skipped_directory(path: &str) -> bool {
    let mut segments: Vec<&str> = path.split('/').collect();
    segments.pop();
    segments.into_iter().any(|s| !should_process_directory(s))
}

/// Walks the repository depth-first in listing order and returns every visited directory
/// plus up to `max_files` allow-listed files with their content.
pub async fn get_all_files<A>(
    api: &A,
    owner: &str,
    repo: &str,
    branch: &str,
    max_files: usize,
) -> Vec<GitHubFile>
where
    A: GitHubApi + ?Sized,
{
    let mut collected: Vec<GitHubFile> = Vec::new();
    let mut with_content = 0usize;
    let mut seen: HashSet<String> = HashSet::new();

    let root = match api.list_directory(owner, repo, "", branch).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!(error = %e, owner, repo, "Error processing root directory");
            return collected;
        }
    };
    let mut pending = vec![root.into_iter()];

    while with_content < max_files {
        let next = match pending.last_mut() {
            Some(entries) => entries.next(),
            None => break,
        };
        let Some(entry) = next else {
            pending.pop();
            continue;
        };
        if !seen.insert(entry.path.clone()) || is_in_skipped_directory(&entry.path) {
            continue;
        }

        match entry.kind {
            EntryKind::File => {
                if !should_process_file(&entry.name) || entry.size.unwrap_or(0) >= MAX_FILE_SIZE {
                    debug!(path = %entry.path, size = ?entry.size, "Skipping file");
                    continue;
                }
                match api.file_content(owner, repo, &entry.path, branch).await {
                    Ok(content) => {
                        with_content += 1;
                        collected.push(GitHubFile {
                            content: Some(content),
                            ..entry
                        });
                    }
                    Err(GitHubError::RateLimited { reset_at }) => {
                        warn!(path = %entry.path, ?reset_at, "Rate limited, returning partial file list");
                        break;
                    }
                    Err(e) => warn!(path = %entry.path, error = %e, "Skipping unreadable file"),
                }
            }
            EntryKind::Dir => {
                if !should_process_directory(&entry.name) {
                    debug!(path = %entry.path, "Skipping directory");
                    continue;
                }
                match api.list_directory(owner, repo, &entry.path, branch).await {
                    Ok(children) => {
                        collected.push(GitHubFile {
                            content: None,
                            ..entry
                        });
                        pending.push(children.into_iter());
                    }
                    Err(GitHubError::RateLimited { reset_at }) => {
                        warn!(path = %entry.path, ?reset_at, "Rate limited, returning partial file list");
                        break;
                    }
                    Err(e) => {
                        warn!(path = %entry.path, error = %e, "Error processing directory")
                    }
                }
            }
        }
    }

    info!(
        owner,
        repo,
        files = with_content,
        directories = collected.len() - with_content,
        "Collected repository files"
    );
    collected
}

#[derive(Debug, Deserialize)]
struct RepoResponse {
    name: String,
    full_name: String,
    description: Option<String>,
    language: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
    #[serde(default)]
    private: bool,
    default_branch: String,
}

impl From<RepoResponse> for RepositoryInfo {
    fn from(r: RepoResponse) -> Self {
        RepositoryInfo {
            name: r.name,
            full_name: r.full_name,
            description: r.description.unwrap_or_default(),
            language: r.language.unwrap_or_else(|| "Unknown".to_string()),
            stars: r.stargazers_count,
            forks: r.forks_count,
            is_private: r.private,
            default_branch: r.default_branch,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ContentEntry {
    name: String,
    path: String,
    #[serde(rename = "type")]
    kind: String,
    size: Option<u64>,
    content: Option<String>,
    encoding: Option<String>,
}

impl ContentEntry {
    fn into_content(self) -> Result<String, GitHubError> {
        match (self.content, self.encoding.as_deref()) {
            (Some(content), Some("base64") | None) => decode_content(&self.path, &content),
            (Some(_), Some(other)) => Err(GitHubError::Decode {
                reason: format!("unsupported encoding {other}"),
                path: self.path,
            }),
            (None, _) => Err(GitHubError::MissingContent { path: self.path }),
        }
    }

    fn into_file(self) -> GitHubFile {
        GitHubFile {
            name: self.name,
            path: self.path,
            kind: if self.kind == "dir" {
                EntryKind::Dir
            } else {
                EntryKind::File
            },
            size: self.size,
            content: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ContentsResponse {
    Many(Vec<ContentEntry>),
    One(Box<ContentEntry>),
}

/// Decodes a contents-API base64 payload (GitHub wraps it at 60 columns).
pub fn decode_content(path: &str, encoded: &str) -> Result<String, GitHubError> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = BASE64.decode(compact).map_err(|e| GitHubError::Decode {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn header_u64(response: &Response, name: &str) -> Option<u64> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

/// Throttled when GitHub says so: 429, or 403 with no requests remaining.
pub fn is_rate_limit_status(status: StatusCode, remaining: Option<u64>) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
        || (status == StatusCode::FORBIDDEN && remaining == Some(0))
}

fn is_rate_limited(response: &Response) -> bool {
    is_rate_limit_status(
        response.status(),
        header_u64(response, "x-ratelimit-remaining"),
    )
}

/// Time to wait before retrying a throttled request.
///
/// `None` when the reset is unknown, already past, or a minute or more away: such a request
/// is not retried and the rate-limit error surfaces immediately.
pub fn rate_limit_wait(reset_at: Option<u64>, now: u64) -> Option<Duration> {
    let wait = Duration::from_secs(reset_at?.checked_sub(now)?);
    (!wait.is_zero() && wait < MAX_RATE_LIMIT_WAIT).then_some(wait)
}

/// Maps a non-success response to a [`GitHubError`].
pub fn classify_status(
    status: StatusCode,
    remaining: Option<u64>,
    reset_at: Option<u64>,
    body: String,
    owner: &str,
    repo: &str,
) -> GitHubError {
    match status {
        StatusCode::NOT_FOUND => GitHubError::NotFound {
            owner: owner.to_string(),
            repo: repo.to_string(),
        },
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
            if is_rate_limit_status(status, remaining)
                || body.to_lowercase().contains("rate limit") =>
        {
            GitHubError::RateLimited { reset_at }
        }
        StatusCode::FORBIDDEN => GitHubError::Forbidden,
        StatusCode::UNAUTHORIZED => GitHubError::Unauthorized,
        other => GitHubError::Api {
            status: other.as_u16(),
            body,
        },
    }
}

/// `base` extended with percent-encoded `segments` and an optional `ref` query.
pub fn api_url(base: &Url, segments: &[&str], git_ref: Option<&str>) -> Result<Url, GitHubError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| GitHubError::InvalidBaseUrl {
            url: base.to_string(),
            reason: "cannot be a base".to_string(),
        })?
        .pop_if_empty()
        .extend(segments.iter().filter(|s| !s.is_empty()));
    if let Some(git_ref) = git_ref {
        url.query_pairs_mut().append_pair("ref", git_ref);
    }
    Ok(url)
}

/// GitHub REST API client. Anonymous access when `token` is `None`.
pub struct GitHubClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Result<Self, GitHubError> {
        Self::with_base_url(DEFAULT_API_BASE, token)
    }

    pub fn with_base_url(base_url: &str, token: Option<String>) -> Result<Self, GitHubError> {
        let parsed = Url::parse(base_url).map_err(|e| GitHubError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(GitHubError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "cannot be a base".to_string(),
            });
        }
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(USER_AGENT),
        );
        let client = Client::builder().default_headers(headers).build()?;
        info!(
            base_url,
            token_set = token.is_some(),
            "Initialized GitHubClient"
        );
        Ok(GitHubClient {
            client,
            base_url: parsed,
            token,
        })
    }

    async fn fetch_with_retry(&self, url: &Url) -> Result<Response, GitHubError> {
        let mut attempt = 0;
        loop {
            let mut request = self.client.get(url.clone());
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }
            match request.send().await {
                Ok(response) if is_rate_limited(&response) && attempt < MAX_RETRIES => {
                    let reset_at = header_u64(&response, "x-ratelimit-reset");
                    match rate_limit_wait(reset_at, unix_now()) {
                        Some(wait) => {
                            warn!(url = %url, attempt, wait_secs = wait.as_secs(), "Rate limited, waiting before retry");
                            tokio::time::sleep(wait).await;
                        }
                        None => {
                            warn!(url = %url, ?reset_at, "Rate limited, reset too far away to wait");
                            return Ok(response);
                        }
                    }
                }
                Ok(response) => return Ok(response),
                Err(e) if attempt < MAX_RETRIES => {
                    warn!(url = %url, attempt, error = %e, "Request failed, retrying");
                    tokio::time::sleep(Duration::from_secs(u64::from(attempt) + 1)).await;
                }
                Err(e) => return Err(GitHubError::Transport(e)),
            }
            attempt += 1;
        }
    }

    async fn error_for(response: Response, owner: &str, repo: &str) -> GitHubError {
        let status = response.status();
        let remaining = header_u64(&response, "x-ratelimit-remaining");
        let reset_at = header_u64(&response, "x-ratelimit-reset");
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<Failed to decode response body>"));
        classify_status(status, remaining, reset_at, body, owner, repo)
    }

    async fn contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> Result<ContentsResponse, GitHubError> {
        let mut segments = vec!["repos", owner, repo, "contents"];
        segments.extend(path.split('/'));
        let url = api_url(&self.base_url, &segments, Some(branch))?;
        let response = self.fetch_with_retry(&url).await?;
        if !response.status().is_success() {
            return Err(Self::error_for(response, owner, repo).await);
        }
        Ok(response.json::<ContentsResponse>().await?)
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn repository_info(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<RepositoryInfo, GitHubError> {
        let url = api_url(&self.base_url, &["repos", owner, repo], None)?;
        info!(url = %url, "Fetching repository info");
        let response = self.fetch_with_retry(&url).await?;
        info!(status = %response.status(), "Repository info response");
        if !response.status().is_success() {
            let err = Self::error_for(response, owner, repo).await;
            tracing::error!(error = %err, owner, repo, "GitHub API error");
            return Err(err);
        }
        let data: RepoResponse = response.json().await?;
        Ok(data.into())
    }

    async fn list_directory(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> Result<Vec<GitHubFile>, GitHubError> {
        let entries = match self.contents(owner, repo, path, branch).await? {
            ContentsResponse::Many(entries) => entries,
            ContentsResponse::One(entry) => vec![*entry],
        };
        debug!(path, count = entries.len(), "Listed directory");
        Ok(entries.into_iter().map(ContentEntry::into_file).collect())
    }

    async fn file_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> Result<String, GitHubError> {
        let entry = match self.contents(owner, repo, path, branch).await? {
            ContentsResponse::One(entry) => *entry,
            ContentsResponse::Many(_) => {
                return Err(GitHubError::MissingContent {
                    path: path.to_string(),
                })
            }
        };
        entry.into_content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_matches_extensions_and_names() {
        assert!(should_process_file("main.rs"));
        assert!(should_process_file("App.TSX"));
        assert!(should_process_file("Dockerfile"));
        assert!(should_process_file("README"));
        assert!(should_process_file("LICENSE-MIT"));
        assert!(!should_process_file("logo.png"));
        assert!(!should_process_file("Makefile"));
        assert!(!should_process_file("archive.tar.gz"));
    }

    #[test]
    fn deny_list_is_case_insensitive() {
        assert!(!should_process_directory("node_modules"));
        assert!(!should_process_directory("Build"));
        assert!(should_process_directory("src"));
        assert!(is_in_skipped_directory("web/node_modules/react/index.js"));
        assert!(!is_in_skipped_directory("src/build.rs"));
    }

    #[test]
    fn rate_limit_wait_only_for_near_resets() {
        assert_eq!(rate_limit_wait(Some(1_030), 1_000), Some(Duration::from_secs(30)));
        assert_eq!(rate_limit_wait(Some(1_059), 1_000), Some(Duration::from_secs(59)));
        assert_eq!(rate_limit_wait(Some(1_060), 1_000), None);
        assert_eq!(rate_limit_wait(Some(4_600), 1_000), None);
        assert_eq!(rate_limit_wait(Some(1_000), 1_000), None);
        assert_eq!(rate_limit_wait(Some(900), 1_000), None);
        assert_eq!(rate_limit_wait(None, 1_000), None);
    }

    fn classify(status: u16, remaining: Option<u64>, body: &str) -> GitHubError {
        let status = StatusCode::from_u16(status).unwrap();
        classify_status(status, remaining, Some(1_700_000_000), body.to_string(), "acme", "demo")
    }

    #[test]
    fn classifies_every_status_branch() {
        assert!(matches!(
            classify(404, None, ""),
            GitHubError::NotFound { owner, repo } if owner == "acme" && repo == "demo"
        ));
        assert!(matches!(classify(401, None, ""), GitHubError::Unauthorized));
        assert!(matches!(
            classify(403, Some(0), ""),
            GitHubError::RateLimited { reset_at: Some(1_700_000_000) }
        ));
        assert!(matches!(
            classify(403, Some(12), "API rate limit exceeded for 1.2.3.4"),
            GitHubError::RateLimited { .. }
        ));
        assert!(matches!(classify(403, Some(12), "Resource not accessible"), GitHubError::Forbidden));
        assert!(matches!(classify(403, None, ""), GitHubError::Forbidden));
        assert!(matches!(classify(429, Some(3), ""), GitHubError::RateLimited { .. }));
        assert!(matches!(
            classify(500, None, "oops"),
            GitHubError::Api { status: 500, body } if body == "oops"
        ));
    }

    #[test]
    fn rate_limit_status_needs_exhausted_quota_on_403() {
        assert!(is_rate_limit_status(StatusCode::FORBIDDEN, Some(0)));
        assert!(!is_rate_limit_status(StatusCode::FORBIDDEN, Some(1)));
        assert!(!is_rate_limit_status(StatusCode::FORBIDDEN, None));
        assert!(is_rate_limit_status(StatusCode::TOO_MANY_REQUESTS, None));
        assert!(!is_rate_limit_status(StatusCode::NOT_FOUND, Some(0)));
    }

    #[test]
    fn contents_listing_maps_entry_kinds() {
        let json = r#"[
            {"name": "src", "path": "src", "type": "dir", "size": 0},
            {"name": "main.rs", "path": "main.rs", "type": "file", "size": 42},
            {"name": "vendor", "path": "vendor", "type": "submodule", "size": 0}
        ]"#;
        let ContentsResponse::Many(entries) = serde_json::from_str::<ContentsResponse>(json).unwrap() else {
            panic!("a JSON array is a directory listing");
        };
        let files: Vec<GitHubFile> = entries.into_iter().map(ContentEntry::into_file).collect();
        assert_eq!(files.len(), 3);
        assert!(files[0].is_dir());
        assert_eq!(files[1].kind, EntryKind::File);
        assert_eq!(files[1].size, Some(42));
        assert!(files.iter().all(|f| f.content.is_none()));
    }

    #[test]
    fn single_contents_object_decodes() {
        let json = r#"{"name": "a.txt", "path": "docs/a.txt", "type": "file", "size": 11,
                       "content": "aGVsbG8g\nd29ybGQ=\n", "encoding": "base64"}"#;
        let ContentsResponse::One(entry) = serde_json::from_str::<ContentsResponse>(json).unwrap() else {
            panic!("a JSON object is a single entry");
        };
        assert_eq!(entry.into_content().unwrap(), "hello world");

        let json = r#"{"name": "big.bin", "path": "big.bin", "type": "file", "size": 5000000,
                       "content": "", "encoding": "none"}"#;
        let ContentsResponse::One(entry) = serde_json::from_str::<ContentsResponse>(json).unwrap() else {
            panic!("a JSON object is a single entry");
        };
        assert!(matches!(entry.into_content(), Err(GitHubError::Decode { .. })));

        let json = r#"{"name": "link", "path": "link", "type": "symlink"}"#;
        let ContentsResponse::One(entry) = serde_json::from_str::<ContentsResponse>(json).unwrap() else {
            panic!("a JSON object is a single entry");
        };
        assert!(matches!(entry.into_content(), Err(GitHubError::MissingContent { path }) if path == "link"));
    }

    #[test]
    fn api_urls_are_percent_encoded() {
        let base = Url::parse("https://api.github.com").unwrap();
        let url = api_url(
            &base,
            &["repos", "acme", "demo", "contents", "docs", "my file#1?.md"],
            Some("feature/x"),
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/acme/demo/contents/docs/my%20file%231%3F.md?ref=feature%2Fx"
        );

        let base = Url::parse("http://localhost:8080/api/v3/").unwrap();
        let url = api_url(&base, &["repos", "acme", "demo", "contents", ""], Some("main")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v3/repos/acme/demo/contents?ref=main");
    }

    #[test]
    fn rejects_unusable_base_url() {
        assert!(matches!(
            GitHubClient::with_base_url("not a url", None),
            Err(GitHubError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            GitHubClient::with_base_url("mailto:ops@example.com", None),
            Err(GitHubError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn decodes_wrapped_base64() {
        let decoded = decode_content("a.txt", "aGVs\nbG8g\nd29y\nbGQ=\n").unwrap();
        assert_eq!(decoded, "hello world");
        assert!(decode_content("a.txt", "***").is_err());
    }
}
