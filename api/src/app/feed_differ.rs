//! Feed differ
//!
//! Parses an RSS document and works out which items are newer than the
//! stored watermark.

use rss::Channel;

use crate::domain::entities::{FeedItem, Watermark};
use crate::error::{DomainError, FeedError};

/// Items to notify about, oldest first, and the watermark to record once they
/// have been delivered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedDiff {
    pub new_items: Vec<FeedItem>,
    pub candidate: Option<Watermark>,
}

impl FeedDiff {
    pub fn is_empty(&self) -> bool {
        self.new_items.is_empty()
    }
}

/// Parse a raw feed document.
///
/// Anything that is not a well-formed RSS channel is `FeedError::Malformed`.
pub fn parse_channel(document: &[u8]) -> Result<Channel, FeedError> {
    Ok(Channel::read_from(document)?)
}

/// Convert every channel item into a `FeedItem`.
///
/// An item without a usable `pubDate` cannot be placed relative to the
/// watermark, so it fails the whole feed.
pub fn items_from_channel(channel: &Channel) -> Result<Vec<FeedItem>, DomainError> {
    channel
        .items()
        .iter()
        .map(|item| {
            let title = item.title().unwrap_or_default();
            let published = item
                .pub_date()
                .ok_or_else(|| DomainError::MissingTimestamp(title.to_string()))?;
            let tags = item
                .categories()
                .iter()
                .map(|c| c.name().to_string())
                .collect();

            FeedItem::new(
                title,
                item.link().unwrap_or_default(),
                item.description().unwrap_or_default(),
                published,
                tags,
            )
        })
        .collect()
}

/// Select items strictly newer than `watermark`, oldest first.
///
/// The sort is stable, so items sharing a timestamp keep feed order.
pub fn diff(items: Vec<FeedItem>, watermark: Option<&Watermark>) -> FeedDiff {
    let mut new_items: Vec<FeedItem> = items
        .into_iter()
        .filter(|item| item.is_newer_than(watermark))
        .collect();

    if new_items.is_empty() {
        return FeedDiff::default();
    }

    new_items.sort_by_key(|item| item.published_at);
    let candidate = new_items.last().map(FeedItem::watermark);

    FeedDiff {
        new_items,
        candidate,
    }
}
