//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod discord;
pub mod feeds;
pub mod secrets;
pub mod store;

pub use discord::DiscordWebhookClient;
pub use feeds::HttpFeedFetcher;
pub use secrets::EnvSecretSource;
pub use store::ConfiguredBlobStore;
