//! In-memory transport for unit tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::github::transport::{Page, Transport};

enum Canned {
    Page { body: String, next: Option<String> },
    Bytes(Vec<u8>),
    Status(u16),
}

#[derive(Default)]
pub struct FakeTransport {
    routes: HashMap<String, Canned>,
    calls: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str, next: Option<&str>) -> Self {
        self.routes.insert(
            url.to_string(),
            Canned::Page {
                body: body.to_string(),
                next: next.map(str::to_string),
            },
        );
        self
    }

    pub fn bytes(mut self, url: &str, bytes: Vec<u8>) -> Self {
        self.routes.insert(url.to_string(), Canned::Bytes(bytes));
        self
    }

    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.routes.insert(url.to_string(), Canned::Status(status));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn lookup(&self, url: &str) -> Result<&Canned> {
        self.calls.lock().unwrap().push(url.to_string());
        self.routes.get(url).ok_or_else(|| Error::GitHubApi {
            status: 404,
            message: format!("no route for {}", url),
        })
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, url: &str) -> Result<Page> {
        match self.lookup(url)? {
            Canned::Page { body, next } => Ok(Page {
                body: body.clone(),
                next: next.clone(),
            }),
            Canned::Status(status) => Err(Error::GitHubApi {
                status: *status,
                message: format!("GET {} failed", url),
            }),
            Canned::Bytes(_) => Err(Error::GitHubApi {
                status: 406,
                message: "binary route".to_string(),
            }),
        }
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        match self.lookup(url)? {
            Canned::Bytes(bytes) => Ok(bytes.clone()),
            Canned::Page { body, .. } => Ok(body.clone().into_bytes()),
            Canned::Status(status) => Err(Error::GitHubApi {
                status: *status,
                message: format!("download {} failed", url),
            }),
        }
    }
}
