//! Fetch pipeline
//!
//! Body of the `fetch` command: load the watermark, fetch and diff the feed,
//! pack and dispatch the new items, then advance the watermark when the gate
//! allows it.

use std::sync::Arc;

use serde::Serialize;

use super::batch_packer::{pack, PackLimits};
use super::dispatcher::{Dispatcher, WatermarkGate};
use super::feed_differ::{diff, items_from_channel, parse_channel};
use super::watermark_store::WatermarkStore;
use crate::config::FeedCatalog;
use crate::domain::entities::{FeedKey, ReplyTarget};
use crate::domain::ports::{BlobStore, BotToken, FeedSource, NotificationSink};
use crate::error::AppError;

pub const FETCH_FAILED_REPLY: &str = "Error fetching blogs.";
pub const NO_NEW_ITEMS_REPLY: &str = "No new blogs published.";

/// How a fetch invocation ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FetchOutcome {
    /// Feed could not be fetched or parsed
    FeedUnavailable,
    NoNewItems,
    Delivered {
        items: usize,
        batches: usize,
        failed_batches: usize,
        watermark_updated: bool,
    },
}

pub struct FetchPipeline<B, F, N>
where
    B: BlobStore,
    F: FeedSource,
    N: NotificationSink,
{
    watermarks: WatermarkStore<B>,
    source: Arc<F>,
    dispatcher: Dispatcher<N>,
    catalog: FeedCatalog,
    limits: PackLimits,
    gate: WatermarkGate,
}

impl<B, F, N> FetchPipeline<B, F, N>
where
    B: BlobStore,
    F: FeedSource,
    N: NotificationSink,
{
    pub fn new(
        watermarks: WatermarkStore<B>,
        source: Arc<F>,
        sink: Arc<N>,
        catalog: FeedCatalog,
        gate: WatermarkGate,
    ) -> Self {
        Self {
            watermarks,
            source,
            dispatcher: Dispatcher::new(sink),
            catalog,
            limits: PackLimits::default(),
            gate,
        }
    }

    pub fn with_limits(mut self, limits: PackLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn dispatcher(&self) -> &Dispatcher<N> {
        &self.dispatcher
    }

    pub async fn run(
        &self,
        target: &ReplyTarget,
        token: &BotToken,
        feed_arg: Option<&str>,
    ) -> Result<FetchOutcome, AppError> {
        let name = feed_arg.ok_or_else(|| AppError::MissingArgument("fetch".to_string()))?;
        let feed = FeedKey::new(name)?;
        let url = self
            .catalog
            .url_for(&feed)
            .ok_or_else(|| AppError::UnknownFeed(feed.to_string()))?;

        let watermark = self.watermarks.load(&feed).await?;
        tracing::debug!(
            feed = %feed,
            watermark = ?watermark.map(|w| w.to_store_string()),
            "Loaded watermark"
        );

        let channel = match self
            .source
            .fetch(url)
            .await
            .and_then(|document| parse_channel(&document))
        {
            Ok(channel) => channel,
            Err(e) => {
                tracing::warn!(feed = %feed, url = %url, error = %e, "Feed unavailable");
                self.dispatcher
                    .send_text(target, token, FETCH_FAILED_REPLY)
                    .await?;
                return Ok(FetchOutcome::FeedUnavailable);
            }
        };

        let items = items_from_channel(&channel)?;
        let total = items.len();
        let diff = diff(items, watermark.as_ref());
        tracing::info!(feed = %feed, total, new = diff.new_items.len(), "Diffed feed");

        let candidate = match diff.candidate {
            Some(candidate) if !diff.new_items.is_empty() => candidate,
            _ => {
                self.dispatcher
                    .send_text(target, token, NO_NEW_ITEMS_REPLY)
                    .await?;
                return Ok(FetchOutcome::NoNewItems);
            }
        };

        let chunks = pack(&diff.new_items, self.limits);
        let report = self.dispatcher.dispatch(target, token, &chunks).await?;

        let watermark_updated = if self.gate.allows(&report) {
            self.watermarks.put(&feed, &candidate).await
        } else {
            tracing::warn!(
                feed = %feed,
                gate = %self.gate,
                failed = report.failures(),
                "Delivery incomplete, watermark left unchanged"
            );
            false
        };

        Ok(FetchOutcome::Delivered {
            items: diff.new_items.len(),
            batches: report.posts(),
            failed_batches: report.failures(),
            watermark_updated,
        })
    }
}
