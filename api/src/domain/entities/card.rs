//! Message card domain entity
//!
//! A Discord embed rendered from one feed item.

use serde::Serialize;

use super::feed::FeedItem;

/// Accent colour shared by every card
pub const CARD_COLOR: u32 = 0x36EEEE;

/// Name of the single field that carries the item's tags
pub const TAGS_FIELD_NAME: &str = "Tags";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardFooter {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardField {
    pub name: String,
    pub value: String,
}

/// Rich embed as posted to the notification sink
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageCard {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    pub description: String,
    pub color: u32,
    pub footer: CardFooter,
    pub fields: Vec<CardField>,
}

impl MessageCard {
    /// Characters this card counts against the per-message budget.
    ///
    /// Title, description, field names and values, and footer text; measured
    /// in Unicode scalar values.
    pub fn length(&self) -> usize {
        let fields: usize = self
            .fields
            .iter()
            .map(|f| f.name.chars().count() + f.value.chars().count())
            .sum();
        self.title.chars().count()
            + self.description.chars().count()
            + fields
            + self.footer.text.chars().count()
    }
}

impl From<&FeedItem> for MessageCard {
    fn from(item: &FeedItem) -> Self {
        MessageCard {
            title: item.title.clone(),
            kind: "rich".to_string(),
            url: item.link.clone(),
            description: item.summary.clone(),
            color: CARD_COLOR,
            footer: CardFooter {
                text: item.published.clone(),
            },
            fields: vec![CardField {
                name: TAGS_FIELD_NAME.to_string(),
                value: item.tags.join(","),
            }],
        }
    }
}

/// Summed length of a sequence of cards
pub fn total_length(cards: &[MessageCard]) -> usize {
    cards.iter().map(MessageCard::length).sum()
}
