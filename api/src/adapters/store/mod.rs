//! Blob store adapters
//!
//! Backends for watermark persistence, selected from configuration.

pub mod fs;
pub mod http;

use async_trait::async_trait;

pub use fs::FsBlobStore;
pub use http::HttpBlobStore;

use crate::config::StoreLocation;
use crate::domain::ports::BlobStore;
use crate::error::StoreError;

/// The blob store chosen at startup
pub enum ConfiguredBlobStore {
    Filesystem(FsBlobStore),
    Http(HttpBlobStore),
}

impl ConfiguredBlobStore {
    pub fn from_location(location: &StoreLocation) -> Self {
        match location {
            StoreLocation::Filesystem(root) => {
                ConfiguredBlobStore::Filesystem(FsBlobStore::new(root.clone()))
            }
            StoreLocation::Http(base) => ConfiguredBlobStore::Http(HttpBlobStore::new(base.clone())),
        }
    }
}

#[async_trait]
impl BlobStore for ConfiguredBlobStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            ConfiguredBlobStore::Filesystem(store) => store.get_object(bucket, key).await,
            ConfiguredBlobStore::Http(store) => store.get_object(bucket, key).await,
        }
    }

    async fn put_object(&self, bucket: &str, key: &str, body: &str) -> Result<(), StoreError> {
        match self {
            ConfiguredBlobStore::Filesystem(store) => store.put_object(bucket, key, body).await,
            ConfiguredBlobStore::Http(store) => store.put_object(bucket, key, body).await,
        }
    }
}
