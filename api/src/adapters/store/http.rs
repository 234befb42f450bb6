//! HTTP object-store client
//!
//! Speaks plain `GET`/`PUT <base>/<bucket>/<key>` against an S3-style
//! object service.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::domain::ports::BlobStore;
use crate::error::StoreError;

pub struct HttpBlobStore {
    http: Client,
    base_url: String,
}

impl HttpBlobStore {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/{}/{}", self.base_url, bucket, key.trim_start_matches('/'))
    }

    async fn api_error(response: reqwest::Response) -> StoreError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        StoreError::Api { status, message }
    }
}

#[async_trait]
impl BlobStore for HttpBlobStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Option<String>, StoreError> {
        let response = self.http.get(self.object_url(bucket, key)).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.text().await?)),
            _ => Err(Self::api_error(response).await),
        }
    }

    async fn put_object(&self, bucket: &str, key: &str, body: &str) -> Result<(), StoreError> {
        let response = self
            .http
            .put(self.object_url(bucket, key))
            .header("Content-Type", "text/plain; charset=utf-8")
            .body(body.to_string())
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::api_error(response).await)
        }
    }
}
