use serde::{Deserialize, Serialize};

pub const NO_BIO_PLACEHOLDER: &str = "No bio available";

/// Account-level fields from `GET /users/{login}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub public_gists: u64,
    #[serde(default)]
    pub bio: Option<String>,
    pub avatar_url: String,
}

impl AccountProfile {
    /// Bio text with the placeholder substituted for a missing or blank bio.
    pub fn bio_or_placeholder(&self) -> &str {
        match self.bio.as_deref() {
            Some(bio) if !bio.trim().is_empty() => bio,
            _ => NO_BIO_PLACEHOLDER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    #[serde(rename = "stargazers_count", default)]
    pub star_count: u64,
}
