use async_trait::async_trait;
use reqwest::{header, Client};

use crate::error::{Error, Result};
use crate::github::paginator::parse_next_link;

const USER_AGENT: &str = "profilestats/0.1";

/// One successful response body plus the pagination cursor, if any.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub body: String,
    pub next: Option<String>,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Authenticated API read. Non-2xx statuses are errors.
    async fn get(&self, url: &str) -> Result<Page>;

    /// Unauthenticated binary fetch, used for the avatar.
    async fn download(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct HttpTransport {
    api: Client,
    plain: Client,
}

impl HttpTransport {
    pub fn new(token: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", token))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(USER_AGENT),
        );

        let api = Client::builder().default_headers(headers).build()?;
        let plain = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self { api, plain })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Page> {
        tracing::debug!("GET {}", url);
        let response = self.api.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi {
                status: status.as_u16(),
                message: format!("GET {} failed: {}", url, body.trim()),
            });
        }

        let next = response
            .headers()
            .get(header::LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_next_link);

        let body = response.text().await?;
        Ok(Page { body, next })
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("Downloading {}", url);
        let response = self.plain.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
