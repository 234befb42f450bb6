use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use crate::app::WatermarkGate;
use crate::domain::entities::FeedKey;
use crate::error::ConfigError;

pub const DEFAULT_DISCORD_API_URL: &str = "https://discord.com/api/v10";
pub const DEFAULT_BUCKET: &str = "feedbot";
pub const DEFAULT_NAMESPACE: &str = "aws_rss_bot";
pub const DEFAULT_STORE: &str = "./data";

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Base URL for webhook follow-ups
    pub discord_api_url: String,
    pub feeds: FeedCatalog,
    pub store: StoreLocation,
    /// Bucket holding the watermark objects
    pub bucket: String,
    pub namespace: String,
    pub gate: WatermarkGate,
}

/// Where watermark objects live
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreLocation {
    Filesystem(PathBuf),
    /// Object service reachable at `<base>/<bucket>/<key>`
    Http(String),
}

impl StoreLocation {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            StoreLocation::Http(value.trim_end_matches('/').to_string())
        } else {
            StoreLocation::Filesystem(PathBuf::from(value))
        }
    }
}

/// Feed identities the bot knows how to fetch
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedCatalog {
    urls: HashMap<FeedKey, String>,
}

impl FeedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(mut self, feed: FeedKey, url: impl Into<String>) -> Self {
        self.urls.insert(feed, url.into());
        self
    }

    pub fn url_for(&self, feed: &FeedKey) -> Option<&str> {
        self.urls.get(feed).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Build from a comma-separated `FEEDS` list, reading `{NAME}_URL` for
    /// each entry
    fn from_lookup<F>(feeds: &str, lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut catalog = Self::new();
        for name in feeds.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            let feed = FeedKey::new(name).map_err(|e| ConfigError::Invalid {
                name: "FEEDS".to_string(),
                reason: e.to_string(),
            })?;
            let variable = feed.url_variable();
            let url = lookup(&variable).ok_or(ConfigError::Missing(variable))?;
            catalog = catalog.with_feed(feed, url);
        }
        Ok(catalog)
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(p) => p.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT".to_string(),
                reason: format!("{:?} is not a port number", p),
            })?,
            None => 8080,
        };

        let gate = match lookup("WATERMARK_GATE") {
            Some(g) => g.parse().map_err(|reason| ConfigError::Invalid {
                name: "WATERMARK_GATE".to_string(),
                reason,
            })?,
            None => WatermarkGate::default(),
        };

        let feeds = match lookup("FEEDS") {
            Some(list) => FeedCatalog::from_lookup(&list, &lookup)?,
            None => FeedCatalog::new(),
        };

        Ok(Self {
            port,
            discord_api_url: lookup("DISCORD_API_URL")
                .unwrap_or_else(|| DEFAULT_DISCORD_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            feeds,
            store: StoreLocation::parse(
                &lookup("WATERMARK_STORE").unwrap_or_else(|| DEFAULT_STORE.to_string()),
            ),
            bucket: lookup("LAST_UPDATED_S3_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            namespace: lookup("WATERMARK_NAMESPACE")
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            gate,
        })
    }
}
