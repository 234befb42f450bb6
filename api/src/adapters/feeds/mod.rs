//! Feed adapter

pub mod http;

pub use http::HttpFeedFetcher;
