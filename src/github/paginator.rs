use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::github::transport::Transport;

/// Items gathered across pages. `failure` holds the error that stopped the
/// walk early; `items` then contains only the pages fetched before it.
#[derive(Debug)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: usize,
    pub failure: Option<Error>,
}

impl<T> Paginated<T> {
    pub fn is_truncated(&self) -> bool {
        self.failure.is_some()
    }

    /// All-or-nothing view: any page failure discards what was collected.
    pub fn into_result(self) -> Result<Vec<T>> {
        match self.failure {
            Some(e) => Err(e),
            None => Ok(self.items),
        }
    }
}

pub struct Paginator<'a> {
    transport: &'a dyn Transport,
}

impl<'a> Paginator<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Follows `rel="next"` links from `first_url` until the provider stops
    /// sending one.
    pub async fn fetch_all<T: DeserializeOwned>(&self, first_url: &str) -> Paginated<T> {
        let mut all_items = Vec::new();
        let mut pages = 0;
        let mut url = first_url.to_string();

        loop {
            let page = match self.transport.get(&url).await {
                Ok(page) => page,
                Err(e) => {
                    return Paginated {
                        items: all_items,
                        pages,
                        failure: Some(e),
                    }
                }
            };

            let items: Vec<T> = match serde_json::from_str(&page.body) {
                Ok(items) => items,
                Err(e) => {
                    return Paginated {
                        items: all_items,
                        pages,
                        failure: Some(e.into()),
                    }
                }
            };

            pages += 1;
            all_items.extend(items);

            match page.next {
                Some(next) if next != url => url = next,
                _ => break,
            }
        }

        Paginated {
            items: all_items,
            pages,
            failure: None,
        }
    }
}

/// Extracts the `rel="next"` target from a `Link` header value.
pub fn parse_next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|part| {
        let mut segments = part.split(';');
        let target = segments.next()?.trim();
        let is_next = segments.any(|param| {
            let param = param.trim();
            param == "rel=\"next\"" || param == "rel=next"
        });
        if !is_next {
            return None;
        }
        target
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .map(str::to_string)
    })
}
