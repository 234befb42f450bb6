//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod blob_store;
pub mod feed_source;
pub mod notifier;
pub mod secrets;

pub use blob_store::BlobStore;
pub use feed_source::FeedSource;
pub use notifier::{NotificationSink, ReplyPayload};
pub use secrets::{BotToken, SecretSource};
