//! Watermark store
//!
//! Reads and writes one timestamp per feed on top of a blob store. Store
//! failures never escape: reads degrade to "no watermark" and writes report
//! `false`.

use std::sync::Arc;

use crate::domain::entities::{FeedKey, Watermark};
use crate::domain::ports::BlobStore;
use crate::error::DomainError;

pub struct WatermarkStore<B>
where
    B: BlobStore,
{
    store: Arc<B>,
    bucket: String,
    namespace: String,
}

impl<B> WatermarkStore<B>
where
    B: BlobStore,
{
    pub fn new(store: Arc<B>, bucket: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            store,
            bucket: bucket.into(),
            namespace: namespace.into(),
        }
    }

    pub fn key_for(&self, feed: &FeedKey) -> String {
        feed.watermark_key(&self.namespace)
    }

    /// Stored timestamp string, or `None` when absent or unreadable
    pub async fn get(&self, feed: &FeedKey) -> Option<String> {
        let key = self.key_for(feed);
        match self.store.get_object(&self.bucket, &key).await {
            Ok(Some(value)) => {
                let value = value.trim();
                if value.is_empty() {
                    tracing::warn!(key = %key, "Watermark object is empty");
                    None
                } else {
                    Some(value.to_string())
                }
            }
            Ok(None) => {
                tracing::info!(key = %key, "No watermark stored yet");
                None
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to read watermark");
                None
            }
        }
    }

    /// Write the watermark; returns whether the store acknowledged it
    pub async fn put(&self, feed: &FeedKey, watermark: &Watermark) -> bool {
        let key = self.key_for(feed);
        let value = watermark.to_store_string();
        match self.store.put_object(&self.bucket, &key, &value).await {
            Ok(()) => {
                tracing::info!(key = %key, watermark = %value, "Updated watermark");
                true
            }
            Err(e) => {
                tracing::error!(key = %key, error = %e, "Failed to write watermark");
                false
            }
        }
    }

    /// Stored watermark, parsed.
    ///
    /// A value that is present but not in store format is an error rather than
    /// "no watermark", so a corrupted object never re-sends a whole feed.
    pub async fn load(&self, feed: &FeedKey) -> Result<Option<Watermark>, DomainError> {
        self.get(feed)
            .await
            .map(|value| Watermark::parse(&value))
            .transpose()
    }
}
