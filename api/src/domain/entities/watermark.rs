//! Watermark domain entity
//!
//! The last published time that was successfully notified for a feed, plus
//! the two timestamp formats it moves between.

use chrono::{DateTime, FixedOffset};

use crate::error::DomainError;

/// Timestamp format used by feed `pubDate` values, e.g. `Thu, 30 Nov 2023 20:15:02 +0000`
pub const FEED_TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Timestamp format of stored watermarks, e.g. `30-11-2023 20:15:02 +0000`
pub const STORE_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S %z";

/// Feed format without the leading day name
const FEED_DATE_FORMAT: &str = "%d %b %Y %H:%M:%S %z";

/// Parse a feed-native published timestamp.
///
/// The day name is ignored, so a weekday that disagrees with the date still
/// parses. Numeric offsets are the common case; RFC 2822 zone names (`GMT`,
/// `EST`, ...) are accepted as a fallback.
pub fn parse_feed_timestamp(value: &str) -> Result<DateTime<FixedOffset>, DomainError> {
    let value = value.trim();
    let date = strip_day_name(value);
    DateTime::parse_from_str(date, FEED_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc2822(date))
        .map_err(|e| DomainError::invalid_timestamp(value, e))
}

fn strip_day_name(value: &str) -> &str {
    match value.split_once(',') {
        Some((day, rest)) if !day.is_empty() && day.chars().all(|c| c.is_ascii_alphabetic()) => {
            rest.trim_start()
        }
        _ => value,
    }
}

/// Last notified published time for one feed.
///
/// Ordering and equality compare instants, so two watermarks with different
/// offsets but the same instant are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Watermark(DateTime<FixedOffset>);

impl Watermark {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self(instant)
    }

    /// Parse a watermark in store format
    pub fn parse(stored: &str) -> Result<Self, DomainError> {
        let stored = stored.trim();
        DateTime::parse_from_str(stored, STORE_TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|e| DomainError::invalid_timestamp(stored, e))
    }

    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// Render in store format, keeping the item's UTC offset
    pub fn to_store_string(&self) -> String {
        self.0.format(STORE_TIMESTAMP_FORMAT).to_string()
    }
}

impl std::fmt::Display for Watermark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_store_string())
    }
}
