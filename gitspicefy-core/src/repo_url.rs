//! GitHub repository URL acceptance.
//!
//! Only `https://github.com/<owner>/<repo>` (optionally followed by more path segments) is
//! accepted. Owner and repository must match `[A-Za-z0-9._-]+`. Anything else is rejected
//! before any network call is made.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Owner/repository pair extracted from a GitHub URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("static pattern compiles"))
}

fn path_parts(url: &str) -> Option<Vec<String>> {
    let parsed = Url::parse(url.trim()).ok()?;
    if parsed.scheme() != "https" || parsed.host_str() != Some("github.com") {
        return None;
    }
    let parts: Vec<String> = parsed
        .path_segments()?
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    if parts.len() < 2 {
        return None;
    }
    Some(parts)
}

pub fn is_valid_github_url(url: &str) -> bool {
    match path_parts(url) {
        Some(parts) => name_pattern().is_match(&parts[0]) && name_pattern().is_match(&parts[1]),
        None => false,
    }
}

/// Extracts owner and repository from a valid GitHub URL. A trailing `.git` is dropped.
pub fn parse_github_url(url: &str) -> Option<RepoRef> {
    if !is_valid_github_url(url) {
        tracing::debug!(url, "Rejected GitHub URL");
        return None;
    }
    let parts = path_parts(url)?;
    let repo = parts[1].strip_suffix(".git").unwrap_or(&parts[1]).to_string();
    if repo.is_empty() {
        return None;
    }
    Some(RepoRef {
        owner: parts[0].clone(),
        repo,
    })
}

pub fn normalize_github_url(url: &str) -> Option<String> {
    parse_github_url(url).map(|r| format!("https://github.com/{}/{}", r.owner, r.repo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_owner_and_repo() {
        assert!(is_valid_github_url("https://github.com/foo/bar"));
        assert!(is_valid_github_url("https://github.com/foo/bar/tree/main/src"));
        assert!(is_valid_github_url("  https://github.com/my.org/repo_name-2  "));
    }

    #[test]
    fn rejects_other_hosts_and_short_paths() {
        assert!(!is_valid_github_url("https://gitlab.com/foo/bar"));
        assert!(!is_valid_github_url("https://github.com/foo"));
        assert!(!is_valid_github_url("https://github.com/"));
        assert!(!is_valid_github_url("not a url"));
        assert!(!is_valid_github_url(""));
        assert!(!is_valid_github_url("http://github.com/foo/bar"));
        assert!(!is_valid_github_url("https://github.com/foo/b%20ar"));
    }

    #[test]
    fn parse_strips_git_suffix() {
        let parsed = parse_github_url("https://github.com/rust-lang/cargo.git").unwrap();
        assert_eq!(parsed.owner, "rust-lang");
        assert_eq!(parsed.repo, "cargo");
        assert_eq!(
            normalize_github_url("https://github.com/foo/bar/issues/").as_deref(),
            Some("https://github.com/foo/bar")
        );
    }
}
