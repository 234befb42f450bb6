//! Discord adapter
//!
//! Posts interaction follow-up messages through the webhook API.

pub mod client;

pub use client::DiscordWebhookClient;
