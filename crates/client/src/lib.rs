//! Client code for wikisearch.
//!
//! This crate provides the Wikipedia search client: request construction,
//! the HTTP call, response normalization and result caching.

pub mod wikipedia;

pub use wikipedia::{ResultRecord, SearchRequest, WikiConfig, WikiError, WikipediaClient};
