//! Feed domain entities
//!
//! Feed identities and the items parsed out of a feed document.

use chrono::{DateTime, FixedOffset};

use super::watermark::{parse_feed_timestamp, Watermark};
use crate::error::DomainError;

/// Identity of a configured feed, as typed by the user.
///
/// Stored upper-cased; it names both the configured feed URL and the
/// watermark object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedKey(String);

impl FeedKey {
    pub fn new(identity: &str) -> Result<Self, DomainError> {
        let identity = identity.trim();
        if identity.is_empty() {
            return Err(DomainError::Validation(
                "feed identity must not be empty".to_string(),
            ));
        }
        Ok(Self(identity.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Object key of this feed's watermark under `namespace`
    pub fn watermark_key(&self, namespace: &str) -> String {
        format!(
            "{}/last_updates/{}_LAST_PUBLISHED_DATE.txt",
            namespace.trim_end_matches('/'),
            self.0
        )
    }

    /// Environment variable holding this feed's URL
    pub fn url_variable(&self) -> String {
        format!("{}_URL", self.0)
    }
}

impl std::fmt::Display for FeedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of a parsed feed
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    /// May contain HTML markup; forwarded as-is
    pub summary: String,
    /// Published timestamp exactly as it appeared in the feed
    pub published: String,
    pub published_at: DateTime<FixedOffset>,
    pub tags: Vec<String>,
}

impl FeedItem {
    /// Build an item, parsing the feed-native `published` string.
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        summary: impl Into<String>,
        published: impl Into<String>,
        tags: Vec<String>,
    ) -> Result<Self, DomainError> {
        let published = published.into();
        let published_at = parse_feed_timestamp(&published)?;
        Ok(Self {
            title: title.into(),
            link: link.into(),
            summary: summary.into(),
            published,
            published_at,
            tags,
        })
    }

    /// Strictly newer than the watermark; everything is new without one.
    pub fn is_newer_than(&self, watermark: Option<&Watermark>) -> bool {
        match watermark {
            Some(watermark) => self.published_at > watermark.instant(),
            None => true,
        }
    }

    pub fn watermark(&self) -> Watermark {
        Watermark::new(self.published_at)
    }
}
