//! Notification sink port trait
//!
//! Defines the interface for posting follow-up messages to an interaction.

use async_trait::async_trait;
use serde::Serialize;

use super::secrets::BotToken;
use crate::domain::entities::{MessageCard, ReplyTarget};
use crate::error::NotifyError;

/// Body of one follow-up message
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReplyPayload {
    Text { content: String },
    Embeds { embeds: Vec<MessageCard> },
}

impl ReplyPayload {
    pub fn text(content: impl Into<String>) -> Self {
        ReplyPayload::Text {
            content: content.into(),
        }
    }

    pub fn embeds(cards: Vec<MessageCard>) -> Self {
        ReplyPayload::Embeds { embeds: cards }
    }
}

/// Port trait for the notification sink
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Post one message.
    ///
    /// `Ok` only when the sink acknowledged with HTTP 200; any other status is
    /// `NotifyError::Rejected`, transport failures are `NotifyError::Request`.
    async fn post(
        &self,
        target: &ReplyTarget,
        token: &BotToken,
        payload: &ReplyPayload,
    ) -> Result<(), NotifyError>;
}
