//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{MessageCard, ReplyTarget};
use crate::domain::ports::{
    BlobStore, BotToken, FeedSource, NotificationSink, ReplyPayload, SecretSource,
};
use crate::error::{FeedError, NotifyError, SecretError, StoreError};

/// A genuine `reqwest::Error`, for simulating transport failures
pub fn transport_error() -> reqwest::Error {
    reqwest::Client::new()
        .get("not a url")
        .build()
        .unwrap_err()
}

// ============================================================================
// In-Memory Blob Store
// ============================================================================

#[derive(Default)]
pub struct InMemoryBlobStore {
    objects: Arc<RwLock<HashMap<(String, String), String>>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an object for testing
    pub fn with_object(self, bucket: &str, key: &str, body: &str) -> Self {
        self.objects
            .write()
            .unwrap()
            .insert((bucket.to_string(), key.to_string()), body.to_string());
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<String> {
        self.objects
            .read()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.read().unwrap().len()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Api {
                status: 503,
                message: "store unavailable".to_string(),
            });
        }
        Ok(self.object(bucket, key))
    }

    async fn put_object(&self, bucket: &str, key: &str, body: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Api {
                status: 503,
                message: "store unavailable".to_string(),
            });
        }
        self.objects
            .write()
            .unwrap()
            .insert((bucket.to_string(), key.to_string()), body.to_string());
        Ok(())
    }
}

// ============================================================================
// Static Feed Source
// ============================================================================

enum FeedResponse {
    Document(Vec<u8>),
    Status(u16),
}

/// Serves one canned response and records requested URLs
pub struct StaticFeedSource {
    response: RwLock<FeedResponse>,
    requests: RwLock<Vec<String>>,
}

impl StaticFeedSource {
    pub fn with_document(document: &str) -> Self {
        Self {
            response: RwLock::new(FeedResponse::Document(document.as_bytes().to_vec())),
            requests: RwLock::new(Vec::new()),
        }
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            response: RwLock::new(FeedResponse::Status(status)),
            requests: RwLock::new(Vec::new()),
        }
    }

    /// Replace the served document, e.g. after new posts are published
    pub fn set_document(&self, document: &str) {
        *self.response.write().unwrap() = FeedResponse::Document(document.as_bytes().to_vec());
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.read().unwrap().clone()
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FeedError> {
        self.requests.write().unwrap().push(url.to_string());
        match &*self.response.read().unwrap() {
            FeedResponse::Document(body) => Ok(body.clone()),
            FeedResponse::Status(status) => Err(FeedError::Status(*status)),
        }
    }
}

// ============================================================================
// Recording Notification Sink
// ============================================================================

#[derive(Debug, Clone)]
pub struct RecordedPost {
    pub target: ReplyTarget,
    pub token: BotToken,
    pub payload: ReplyPayload,
}

/// Records every post; selected calls can be rejected or fail in transport
#[derive(Default)]
pub struct RecordingSink {
    posts: RwLock<Vec<RecordedPost>>,
    rejected_calls: HashSet<usize>,
    unreachable: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer non-200 for the given zero-based call numbers
    pub fn rejecting_calls(mut self, calls: &[usize]) -> Self {
        self.rejected_calls.extend(calls.iter().copied());
        self
    }

    /// Fail every call with a transport error
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn posts(&self) -> Vec<RecordedPost> {
        self.posts.read().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.posts()
            .into_iter()
            .filter_map(|p| match p.payload {
                ReplyPayload::Text { content } => Some(content),
                ReplyPayload::Embeds { .. } => None,
            })
            .collect()
    }

    pub fn embed_batches(&self) -> Vec<Vec<MessageCard>> {
        self.posts()
            .into_iter()
            .filter_map(|p| match p.payload {
                ReplyPayload::Embeds { embeds } => Some(embeds),
                ReplyPayload::Text { .. } => None,
            })
            .collect()
    }

    pub fn targets(&self) -> Vec<ReplyTarget> {
        self.posts().into_iter().map(|p| p.target).collect()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.posts()
            .into_iter()
            .map(|p| p.token.expose().to_string())
            .collect()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn post(
        &self,
        target: &ReplyTarget,
        token: &BotToken,
        payload: &ReplyPayload,
    ) -> Result<(), NotifyError> {
        if self.unreachable {
            return Err(NotifyError::Request(transport_error()));
        }

        let call = {
            let mut posts = self.posts.write().unwrap();
            posts.push(RecordedPost {
                target: target.clone(),
                token: token.clone(),
                payload: payload.clone(),
            });
            posts.len() - 1
        };

        if self.rejected_calls.contains(&call) {
            return Err(NotifyError::Rejected {
                status: 400,
                message: r#"{"message": "Invalid Form Body"}"#.to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Static Secret Source
// ============================================================================

pub struct StaticSecretSource {
    token: Option<String>,
}

impl StaticSecretSource {
    pub fn new(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
        }
    }

    pub fn missing() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl SecretSource for StaticSecretSource {
    async fn bot_token(&self) -> Result<BotToken, SecretError> {
        self.token
            .as_deref()
            .map(BotToken::new)
            .ok_or_else(|| SecretError::Missing("BOT_TOKEN".to_string()))
    }
}
