use serde::de::IgnoredAny;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::github::paginator::{Paginated, Paginator};
use crate::github::transport::{HttpTransport, Transport};
use crate::models::{AccountProfile, RepositorySummary};

const PER_PAGE: u32 = 100;

/// GitHub answers 409 for commit listings of repositories with no commits.
const EMPTY_REPOSITORY: u16 = 409;

pub struct GitHubClient {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(&config.github_token)?;
        Ok(Self::with_transport(Arc::new(transport), &config.api_base_url))
    }

    pub fn with_transport(transport: Arc<dyn Transport>, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn get_user(&self, username: &str) -> Result<AccountProfile> {
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::info!("Fetching user: {}", username);

        let page = self.transport.get(&url).await.map_err(|e| match e.status() {
            Some(404) => Error::UserNotFound(username.to_string()),
            _ => e,
        })?;

        Ok(serde_json::from_str(&page.body)?)
    }

    /// Every repository owned by `username`, in provider order. A failing
    /// page stops the walk and leaves the earlier pages in the result.
    pub async fn list_repositories(&self, username: &str) -> Paginated<RepositorySummary> {
        let url = format!(
            "{}/users/{}/repos?per_page={}",
            self.base_url, username, PER_PAGE
        );
        tracing::info!("Fetching repositories for: {}", username);
        Paginator::new(self.transport.as_ref()).fetch_all(&url).await
    }

    pub async fn count_commits(&self, owner: &str, repo: &str) -> Result<u64> {
        let url = format!(
            "{}/repos/{}/{}/commits?per_page={}",
            self.base_url, owner, repo, PER_PAGE
        );
        tracing::debug!("Counting commits for: {}/{}", owner, repo);

        let paged: Paginated<IgnoredAny> =
            Paginator::new(self.transport.as_ref()).fetch_all(&url).await;

        match paged.into_result() {
            Ok(items) => Ok(items.len() as u64),
            Err(e) if e.status() == Some(EMPTY_REPOSITORY) => Ok(0),
            Err(e) => Err(e),
        }
    }

    pub async fn get_repo_languages(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<HashMap<String, u64>> {
        let url = format!("{}/repos/{}/{}/languages", self.base_url, owner, repo);
        tracing::debug!("Fetching languages for: {}/{}", owner, repo);

        let page = self.transport.get(&url).await?;
        Ok(serde_json::from_str(&page.body)?)
    }

    pub async fn download_avatar(&self, url: &str) -> Result<Vec<u8>> {
        self.transport.download(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::testing::FakeTransport;

    const BASE: &str = "https://api.test";

    fn client(fake: FakeTransport) -> (GitHubClient, Arc<FakeTransport>) {
        let fake = Arc::new(fake);
        (GitHubClient::with_transport(fake.clone(), BASE), fake)
    }

    #[tokio::test]
    async fn test_get_user() {
        let (client, _) = client(FakeTransport::new().page(
            "https://api.test/users/octocat",
            r#"{"followers": 5, "following": 2, "public_repos": 3, "public_gists": 0,
                "bio": "hi", "avatar_url": "https://img.test/a.png"}"#,
            None,
        ));
        let profile = client.get_user("octocat").await.unwrap();
        assert_eq!(profile.followers, 5);
        assert_eq!(profile.bio.as_deref(), Some("hi"));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let (client, _) =
            client(FakeTransport::new().status("https://api.test/users/ghost", 404));
        let err = client.get_user("ghost").await.unwrap_err();
        assert!(matches!(err, Error::UserNotFound(name) if name == "ghost"));
    }

    #[tokio::test]
    async fn test_list_repositories_follows_next_links() {
        let (client, fake) = client(
            FakeTransport::new()
                .page(
                    "https://api.test/users/octocat/repos?per_page=100",
                    r#"[{"name": "a", "stargazers_count": 1}]"#,
                    Some("https://api.test/users/octocat/repos?per_page=100&page=2"),
                )
                .page(
                    "https://api.test/users/octocat/repos?per_page=100&page=2",
                    r#"[{"name": "b", "stargazers_count": 2}]"#,
                    None,
                ),
        );
        let repos = client.list_repositories("octocat").await;
        assert!(!repos.is_truncated());
        assert_eq!(repos.pages, 2);
        let names: Vec<_> = repos.items.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(fake.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_list_repositories_keeps_first_page_when_second_fails() {
        let (client, _) = client(
            FakeTransport::new()
                .page(
                    "https://api.test/users/octocat/repos?per_page=100",
                    r#"[{"name": "a"}, {"name": "b"}, {"name": "c"}]"#,
                    Some("https://api.test/users/octocat/repos?per_page=100&page=2"),
                )
                .status(
                    "https://api.test/users/octocat/repos?per_page=100&page=2",
                    502,
                ),
        );
        let repos = client.list_repositories("octocat").await;
        assert!(repos.is_truncated());
        assert_eq!(repos.items.len(), 3);
    }

    #[tokio::test]
    async fn test_count_commits_across_pages() {
        let (client, _) = client(
            FakeTransport::new()
                .page(
                    "https://api.test/repos/octocat/a/commits?per_page=100",
                    r#"[{"sha": "1"}, {"sha": "2"}]"#,
                    Some("https://api.test/repos/octocat/a/commits?per_page=100&page=2"),
                )
                .page(
                    "https://api.test/repos/octocat/a/commits?per_page=100&page=2",
                    r#"[{"sha": "3", "commit": {"message": "x"}}]"#,
                    None,
                ),
        );
        assert_eq!(client.count_commits("octocat", "a").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_count_commits_failure_discards_partial_count() {
        let (client, _) = client(
            FakeTransport::new()
                .page(
                    "https://api.test/repos/octocat/a/commits?per_page=100",
                    r#"[{"sha": "1"}]"#,
                    Some("https://api.test/repos/octocat/a/commits?per_page=100&page=2"),
                )
                .status(
                    "https://api.test/repos/octocat/a/commits?per_page=100&page=2",
                    500,
                ),
        );
        assert!(client.count_commits("octocat", "a").await.is_err());
    }

    #[tokio::test]
    async fn test_empty_repository_has_zero_commits() {
        let (client, _) = client(FakeTransport::new().status(
            "https://api.test/repos/octocat/empty/commits?per_page=100",
            409,
        ));
        assert_eq!(client.count_commits("octocat", "empty").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_get_repo_languages() {
        let (client, _) = client(FakeTransport::new().page(
            "https://api.test/repos/octocat/a/languages",
            r#"{"Rust": 1200, "Shell": 34}"#,
            None,
        ));
        let languages = client.get_repo_languages("octocat", "a").await.unwrap();
        assert_eq!(languages.get("Rust"), Some(&1200));
        assert_eq!(languages.values().sum::<u64>(), 1234);
    }
}
