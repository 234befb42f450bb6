//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, Duration, FixedOffset};

use crate::domain::entities::{FeedItem, Interaction, ReplyTarget, FEED_TIMESTAMP_FORMAT};
use crate::domain::ports::BotToken;

/// Publication time of the first generated item
pub fn base_time() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2023-11-30T08:00:00+00:00").unwrap()
}

/// Feed-native timestamp `hours` after `base_time`
pub fn feed_timestamp(hours: usize) -> String {
    (base_time() + Duration::hours(hours as i64))
        .format(FEED_TIMESTAMP_FORMAT)
        .to_string()
}

/// Create a feed item with a specific feed-native published string
pub fn test_item_at(title: &str, published: &str) -> FeedItem {
    FeedItem::new(
        title,
        format!("https://example.com/{}", slug(title)),
        format!("Summary of {}", title),
        published,
        vec![],
    )
    .unwrap()
}

/// Create `n` short items published one hour apart, oldest first
pub fn test_items(n: usize) -> Vec<FeedItem> {
    (0..n)
        .map(|i| test_item_at(&format!("Blog {}", i), &feed_timestamp(i)))
        .collect()
}

/// Create an untagged item whose summary is exactly `summary_len` characters
pub fn test_item_with_summary(title: &str, hours: usize, summary_len: usize) -> FeedItem {
    FeedItem::new(
        title,
        format!("https://example.com/{}", slug(title)),
        "x".repeat(summary_len),
        feed_timestamp(hours),
        vec![],
    )
    .unwrap()
}

/// One `<item>` of a generated RSS document
#[derive(Debug, Clone)]
pub struct FixtureItem {
    pub title: String,
    pub pub_date: String,
    pub summary: String,
    pub tags: Vec<String>,
}

impl FixtureItem {
    pub fn new(title: &str, pub_date: &str) -> Self {
        Self {
            title: title.to_string(),
            pub_date: pub_date.to_string(),
            summary: format!("Summary of {}", title),
            tags: vec![],
        }
    }

    /// Item titled `Blog {hours}` published `hours` after `base_time`
    pub fn at(hours: usize) -> Self {
        Self::new(&format!("Blog {}", hours), &feed_timestamp(hours))
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }
}

/// Items published at `hours` offsets, in the given order
pub fn fixture_items(hours: impl IntoIterator<Item = usize>) -> Vec<FixtureItem> {
    hours.into_iter().map(FixtureItem::at).collect()
}

/// Render an RSS 2.0 document containing `items` in the given order
pub fn rss_document(items: &[FixtureItem]) -> String {
    let mut doc = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
<title>Example Blog</title>
<link>https://example.com</link>
<description>Posts from the example blog</description>
"#,
    );

    for item in items {
        doc.push_str("<item>\n");
        doc.push_str(&format!("<title>{}</title>\n", escape(&item.title)));
        doc.push_str(&format!(
            "<link>https://example.com/{}</link>\n",
            slug(&item.title)
        ));
        doc.push_str(&format!(
            "<description>{}</description>\n",
            escape(&item.summary)
        ));
        doc.push_str(&format!("<pubDate>{}</pubDate>\n", item.pub_date));
        for tag in &item.tags {
            doc.push_str(&format!("<category>{}</category>\n", escape(tag)));
        }
        doc.push_str("</item>\n");
    }

    doc.push_str("</channel>\n</rss>\n");
    doc
}

/// Create an interaction for `command` with an optional first option
pub fn test_interaction(command: &str, option: Option<&str>) -> Interaction {
    let options = match option {
        Some(value) => serde_json::json!([{ "name": "blog", "value": value }]),
        None => serde_json::json!([]),
    };
    serde_json::from_value(serde_json::json!({
        "application_id": "app-123",
        "token": "interaction-token",
        "data": { "name": command, "options": options }
    }))
    .unwrap()
}

/// Reply target matching `test_interaction`
pub fn test_target() -> ReplyTarget {
    ReplyTarget {
        application_id: "app-123".to_string(),
        token: "interaction-token".to_string(),
    }
}

pub fn test_token() -> BotToken {
    BotToken::new("bot-token")
}

fn slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
