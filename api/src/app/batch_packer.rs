//! Batch packer
//!
//! Turns new feed items into deliverable batches of message cards.
//!
//! Packing happens in two levels, both order-preserving:
//! 1. count-chunking into runs of at most `max_items` items (the platform's
//!    embed-per-message limit);
//! 2. length-splitting each chunk by recursive bisection until every batch is
//!    within `max_chars` or holds a single card.
//!
//! A single card longer than `max_chars` is delivered as its own batch,
//! untruncated.

use crate::domain::entities::{total_length, FeedItem, MessageCard};

/// Embeds allowed in one message
pub const MAX_CARDS_PER_MESSAGE: usize = 10;

/// Combined embed characters allowed in one message
pub const MAX_MESSAGE_CHARS: usize = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackLimits {
    pub max_items: usize,
    pub max_chars: usize,
}

impl Default for PackLimits {
    fn default() -> Self {
        Self {
            max_items: MAX_CARDS_PER_MESSAGE,
            max_chars: MAX_MESSAGE_CHARS,
        }
    }
}

/// One message worth of cards
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// Position in emission order across all chunks
    pub index: usize,
    pub cards: Vec<MessageCard>,
}

impl Batch {
    pub fn length(&self) -> usize {
        total_length(&self.cards)
    }
}

/// Batches produced from one count-chunk
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub index: usize,
    pub batches: Vec<Batch>,
}

impl Chunk {
    pub fn card_count(&self) -> usize {
        self.batches.iter().map(|b| b.cards.len()).sum()
    }
}

/// Pack items (already in delivery order) into chunks of batches.
pub fn pack(items: &[FeedItem], limits: PackLimits) -> Vec<Chunk> {
    let max_items = limits.max_items.max(1);
    let mut next_batch = 0;

    items
        .chunks(max_items)
        .enumerate()
        .map(|(index, chunk_items)| {
            let cards = chunk_items.iter().map(MessageCard::from).collect();
            let batches = split_by_length(cards, limits.max_chars)
                .into_iter()
                .map(|cards| {
                    let batch = Batch {
                        index: next_batch,
                        cards,
                    };
                    next_batch += 1;
                    batch
                })
                .collect();
            Chunk { index, batches }
        })
        .collect()
}

/// Bisect `cards` until every part is within `max_chars` or a single card.
///
/// Split point is `len / 2`; the left half is emitted first.
pub fn split_by_length(mut cards: Vec<MessageCard>, max_chars: usize) -> Vec<Vec<MessageCard>> {
    if cards.len() <= 1 || total_length(&cards) <= max_chars {
        return vec![cards];
    }

    let right = cards.split_off(cards.len() / 2);
    let mut parts = split_by_length(cards, max_chars);
    parts.extend(split_by_length(right, max_chars));
    parts
}
