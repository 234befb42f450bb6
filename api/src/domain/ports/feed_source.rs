//! Feed source port trait
//!
//! Defines the interface for downloading a raw feed document.

use async_trait::async_trait;

use crate::error::FeedError;

/// Port trait for fetching feed documents
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Download the document at `url`; non-success statuses are errors
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FeedError>;
}
