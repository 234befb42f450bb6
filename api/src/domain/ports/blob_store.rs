//! Blob store port trait
//!
//! Defines the interface for the key-value object store holding watermarks.

use async_trait::async_trait;

use crate::error::StoreError;

/// Port trait for a bucketed key-value object store with text bodies
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Read an object; `Ok(None)` when it does not exist
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Option<String>, StoreError>;

    /// Write an object, replacing any previous body
    async fn put_object(&self, bucket: &str, key: &str, body: &str) -> Result<(), StoreError>;
}
