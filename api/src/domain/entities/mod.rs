//! Domain entities
//!
//! Pure domain models: feed items, message cards, watermarks and the inbound
//! interaction payload.

pub mod card;
pub mod feed;
pub mod interaction;
pub mod watermark;

#[allow(unused_imports)]
pub use card::{total_length, CardField, CardFooter, MessageCard, CARD_COLOR, TAGS_FIELD_NAME};
pub use feed::{FeedItem, FeedKey};
#[allow(unused_imports)]
pub use interaction::{CommandOption, Interaction, InteractionData, ReplyTarget};
#[allow(unused_imports)]
pub use watermark::{
    parse_feed_timestamp, Watermark, FEED_TIMESTAMP_FORMAT, STORE_TIMESTAMP_FORMAT,
};
