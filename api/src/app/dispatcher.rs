//! Response dispatcher
//!
//! Posts follow-up messages to an interaction and records which batches the
//! sink accepted.

use std::sync::Arc;

use super::batch_packer::Chunk;
use crate::domain::entities::{MessageCard, ReplyTarget};
use crate::domain::ports::{BotToken, NotificationSink, ReplyPayload};
use crate::error::NotifyError;

/// Per-batch delivery outcome, grouped by count-chunk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub chunks: Vec<Vec<bool>>,
}

impl DeliveryReport {
    pub fn posts(&self) -> usize {
        self.chunks.iter().map(Vec::len).sum()
    }

    pub fn failures(&self) -> usize {
        self.chunks.iter().flatten().filter(|ok| !**ok).count()
    }

    pub fn all_delivered(&self) -> bool {
        self.posts() > 0 && self.failures() == 0
    }

    pub fn first_chunk_delivered(&self) -> bool {
        self.chunks
            .first()
            .is_some_and(|batches| !batches.is_empty() && batches.iter().all(|ok| *ok))
    }
}

/// Rule deciding whether a delivery justifies advancing the watermark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatermarkGate {
    /// Every batch of every chunk must be accepted
    #[default]
    AllBatches,
    /// Only the first chunk's batches must be accepted; later chunk failures
    /// are tolerated
    FirstChunk,
}

impl WatermarkGate {
    pub fn allows(&self, report: &DeliveryReport) -> bool {
        match self {
            WatermarkGate::AllBatches => report.all_delivered(),
            WatermarkGate::FirstChunk => report.first_chunk_delivered(),
        }
    }
}

impl std::fmt::Display for WatermarkGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WatermarkGate::AllBatches => write!(f, "all-batches"),
            WatermarkGate::FirstChunk => write!(f, "first-chunk"),
        }
    }
}

impl std::str::FromStr for WatermarkGate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all-batches" | "all" => Ok(WatermarkGate::AllBatches),
            "first-chunk" | "first" => Ok(WatermarkGate::FirstChunk),
            other => Err(format!("Unknown watermark gate: {}", other)),
        }
    }
}

pub struct Dispatcher<N>
where
    N: NotificationSink,
{
    sink: Arc<N>,
}

impl<N> Dispatcher<N>
where
    N: NotificationSink,
{
    pub fn new(sink: Arc<N>) -> Self {
        Self { sink }
    }

    /// Post one batch of cards; `true` when the sink answered 200.
    ///
    /// Rejections are logged and reported as `false`; transport failures
    /// are returned as errors.
    pub async fn send(
        &self,
        target: &ReplyTarget,
        token: &BotToken,
        cards: &[MessageCard],
    ) -> Result<bool, NotifyError> {
        self.post(target, token, &ReplyPayload::embeds(cards.to_vec()))
            .await
    }

    /// Post a plain text reply
    pub async fn send_text(
        &self,
        target: &ReplyTarget,
        token: &BotToken,
        content: &str,
    ) -> Result<bool, NotifyError> {
        self.post(target, token, &ReplyPayload::text(content)).await
    }

    /// Send every batch of every chunk, in order, through the same target.
    ///
    /// A rejected batch does not stop the remaining ones.
    pub async fn dispatch(
        &self,
        target: &ReplyTarget,
        token: &BotToken,
        chunks: &[Chunk],
    ) -> Result<DeliveryReport, NotifyError> {
        let mut report = DeliveryReport::default();

        for chunk in chunks {
            let mut results = Vec::with_capacity(chunk.batches.len());
            for batch in &chunk.batches {
                let delivered = self.send(target, token, &batch.cards).await?;
                tracing::debug!(
                    chunk = chunk.index,
                    batch = batch.index,
                    cards = batch.cards.len(),
                    length = batch.length(),
                    delivered,
                    "Posted batch"
                );
                results.push(delivered);
            }
            report.chunks.push(results);
        }

        Ok(report)
    }

    async fn post(
        &self,
        target: &ReplyTarget,
        token: &BotToken,
        payload: &ReplyPayload,
    ) -> Result<bool, NotifyError> {
        match self.sink.post(target, token, payload).await {
            Ok(()) => Ok(true),
            Err(NotifyError::Rejected { status, message }) => {
                tracing::warn!(status, body = %message, "Notification rejected");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
