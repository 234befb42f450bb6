//! HTTP feed fetcher

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::ports::FeedSource;
use crate::error::FeedError;

const FEED_ACCEPT: &str = "application/rss+xml, application/xml;q=0.9, text/xml;q=0.8";

const FEED_USER_AGENT: &str = concat!("feedbot/", env!("CARGO_PKG_VERSION"));

pub struct HttpFeedFetcher {
    http: Client,
}

impl HttpFeedFetcher {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }
}

impl Default for HttpFeedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedSource for HttpFeedFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FeedError> {
        let response = self
            .http
            .get(url)
            .header("Accept", FEED_ACCEPT)
            .header("User-Agent", FEED_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        tracing::debug!(url = %url, bytes = body.len(), "Fetched feed");
        Ok(body.to_vec())
    }
}
