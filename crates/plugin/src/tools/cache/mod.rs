//! Cache-related MCP tools.
//!
//! This module provides tools for inspecting and purging the result cache.

pub mod purge;
pub mod stats;

pub use purge::{CachePurgeOutput, CachePurgeParams, purge_impl};
pub use stats::{CacheStatsOutput, CacheStatsParams, stats_impl};
