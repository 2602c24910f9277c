//! One-shot cart feed retrieval.

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::CartFeed;

use crate::error::LoadError;

#[async_trait]
pub trait CartFeedSource: Send + Sync {
    async fn fetch_cart(&self) -> Result<CartFeed, LoadError>;
}

/// Fetches the feed over HTTP. No timeout is set; the request runs until the
/// transport resolves or fails.
#[derive(Clone)]
pub struct HttpFeedSource {
    client: Client,
    url: String,
}

impl HttpFeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl CartFeedSource for HttpFeedSource {
    async fn fetch_cart(&self) -> Result<CartFeed, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| LoadError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| LoadError::Transport {
                url: self.url.clone(),
                source,
            })?;
        let feed = CartFeed::from_slice(&body).map_err(|source| LoadError::Decode {
            url: self.url.clone(),
            source,
        })?;
        tracing::debug!(url = %self.url, items = feed.items.len(), "cart feed fetched");
        Ok(feed)
    }
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
