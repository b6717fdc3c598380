//! Core types and shared functionality for wikisearch.
//!
//! This crate provides:
//! - In-memory result cache with wholesale expiry
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheConfig, CacheStats, QueryCache, WholesaleCache, normalize_query};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
