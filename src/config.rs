use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub api_base_url: String,
    pub username: String,
    pub readme_path: PathBuf,
    pub svg_path: PathBuf,
    pub avatar_path: PathBuf,
}

/// Where the generated files land.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub readme: PathBuf,
    pub svg: PathBuf,
    pub avatar: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            readme: PathBuf::from("README.md"),
            svg: PathBuf::from("github_profile.svg"),
            avatar: PathBuf::from("avatar.png"),
        }
    }
}

impl Config {
    pub fn from_env(username: &str, paths: OutputPaths) -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), username, paths)
    }

    pub fn from_lookup<F>(lookup: F, username: &str, paths: OutputPaths) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let github_token = lookup("GITHUB_TOKEN")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                Error::Config(
                    "GitHub token not found. Set GITHUB_TOKEN in environment.".to_string(),
                )
            })?;

        let api_base_url = lookup("GITHUB_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        if username.trim().is_empty() {
            return Err(Error::Config("username must not be empty".to_string()));
        }

        Ok(Self {
            github_token,
            api_base_url,
            username: username.to_string(),
            readme_path: paths.readme,
            svg_path: paths.svg,
            avatar_path: paths.avatar,
        })
    }
}
