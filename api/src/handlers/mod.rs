//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod interactions;

pub use interactions::post_interaction;
