//! In-memory cache for search results.
//!
//! This module provides a process-local query cache with a coarse,
//! wholesale eviction policy:
//!
//! - Keys are normalized query strings (see [`normalize_query`])
//! - The whole store expires at once, either by age or by occupancy
//! - Expiry is evaluated lazily on `get` and `set`, never on a timer
//!
//! The policy lives behind the [`QueryCache`] trait so the search client does
//! not depend on how entries are evicted.

pub mod key;
pub mod wholesale;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use key::normalize_query;
pub use wholesale::WholesaleCache;

/// Default lifetime of one cache epoch, in hours.
pub const DEFAULT_EXPIRY_HOURS: u64 = 24;

/// Default occupancy bound before the store is discarded.
pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// Bounds for a cache epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Hours after which the whole store is discarded.
    pub expiry_hours: u64,
    /// Number of entries above which the whole store is discarded.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { expiry_hours: DEFAULT_EXPIRY_HOURS, max_entries: DEFAULT_MAX_ENTRIES }
    }
}

/// Point-in-time view of a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CacheStats {
    /// Entries currently held (may exceed `max_entries` by one until the next access).
    pub entries: usize,
    pub max_entries: usize,
    pub expiry_hours: u64,
    /// Seconds since the current epoch started.
    pub age_secs: u64,
}

/// Key/value store for query results.
///
/// Implementations never fail: a missing key is `None`, and eviction is an
/// internal concern.
pub trait QueryCache<V>: Send + Sync {
    /// Whether `key` is present right now. Does not evaluate expiry.
    fn has(&self, key: &str) -> bool;

    /// Look up `key`, returning an owned snapshot of the value.
    fn get(&self, key: &str) -> Option<V>;

    /// Insert or overwrite `key`.
    fn set(&self, key: &str, value: V);

    /// Number of entries currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard every entry. Returns how many were dropped.
    fn clear(&self) -> usize;

    fn stats(&self) -> CacheStats;
}
