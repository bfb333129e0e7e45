#![doc = "gitspicefy-core: core logic library for GitSpicefy."]

//! This crate contains the repository analysis and README synthesis pipeline for GitSpicefy.
//! Authentication, usage limits and persistence belong to the caller and are not included here.
//!
//! # Usage
//! Build a [`generate::Generator`] from a [`github::GitHubClient`] and a
//! [`providers::ProviderRegistry`], then call `generate` with a repository URL.

pub mod analyze;
pub mod basic;
pub mod contract;
pub mod error;
pub mod generate;
pub mod github;
pub mod logo;
pub mod providers;
pub mod rate_limit;
pub mod readme_config;
pub mod repo_url;
pub mod template;

pub use error::GenerateError;
pub use generate::{GenerationReport, Generator};
pub use readme_config::ReadmeConfig;
