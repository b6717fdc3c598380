//! Wholesale-expiry cache.
//!
//! Either the whole store is valid or the whole store is discarded. One
//! timestamp and one size check replace per-entry bookkeeping.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

use super::{CacheConfig, CacheStats, QueryCache};

struct CacheState<V> {
    config: CacheConfig,
    entries: HashMap<String, V>,
    created_at: Instant,
}

impl<V> CacheState<V> {
    fn new(config: CacheConfig) -> Self {
        Self { config, entries: HashMap::new(), created_at: Instant::now() }
    }

    fn ttl(&self) -> Duration {
        Duration::from_secs(self.config.expiry_hours.saturating_mul(3600))
    }

    /// Clear everything if the epoch is too old or the store overflowed.
    fn check_expiry(&mut self) {
        let expired = self.created_at.elapsed() >= self.ttl();
        let oversized = self.entries.len() > self.config.max_entries;

        if expired || oversized {
            tracing::debug!(
                entries = self.entries.len(),
                expired,
                oversized,
                "discarding search cache"
            );
            self.entries.clear();
            self.created_at = Instant::now();
        }
    }
}

/// Query cache with lazy, all-or-nothing expiry.
///
/// `get` reads before checking expiry, so a caller always receives the value
/// that was present even if that access empties the store. `set` checks
/// first, so stale data is flushed before the new entry lands. A `set` can
/// leave the store one entry over `max_entries`; the following access
/// corrects it.
pub struct WholesaleCache<V> {
    state: Mutex<CacheState<V>>,
}

impl<V: Clone + Send> WholesaleCache<V> {
    /// Create a cache with the given bounds. The epoch starts now.
    pub fn new(config: CacheConfig) -> Self {
        Self { state: Mutex::new(CacheState::new(config)) }
    }

    /// Replace the bounds, drop all contents and restart the epoch.
    pub fn initialize(&self, config: CacheConfig) {
        *self.lock() = CacheState::new(config);
    }

    pub fn config(&self) -> CacheConfig {
        self.lock().config
    }

    fn lock(&self) -> MutexGuard<'_, CacheState<V>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: Clone + Send> Default for WholesaleCache<V> {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl<V: Clone + Send> QueryCache<V> for WholesaleCache<V> {
    fn has(&self, key: &str) -> bool {
        self.lock().entries.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<V> {
        let mut state = self.lock();
        let value = state.entries.get(key).cloned();
        state.check_expiry();
        value
    }

    fn set(&self, key: &str, value: V) {
        let mut state = self.lock();
        state.check_expiry();
        state.entries.insert(key.to_string(), value);
    }

    fn len(&self) -> usize {
        self.lock().entries.len()
    }

    fn clear(&self) -> usize {
        let mut state = self.lock();
        let dropped = state.entries.len();
        state.entries.clear();
        state.created_at = Instant::now();
        dropped
    }

    fn stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            entries: state.entries.len(),
            max_entries: state.config.max_entries,
            expiry_hours: state.config.expiry_hours,
            age_secs: state.created_at.elapsed().as_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(expiry_hours: u64, max_entries: usize) -> WholesaleCache<Vec<u32>> {
        WholesaleCache::new(CacheConfig { expiry_hours, max_entries })
    }

    #[test]
    fn test_default_bounds() {
        let cache: WholesaleCache<Vec<u32>> = WholesaleCache::default();
        assert_eq!(cache.config(), CacheConfig { expiry_hours: 24, max_entries: 50 });
        assert!(cache.is_empty());
    }

    #[test]
    fn test_set_then_get() {
        let cache = cache(24, 50);
        cache.set("cat", vec![1, 2, 3]);
        assert_eq!(cache.get("cat"), Some(vec![1, 2, 3]));
        assert!(cache.has("cat"));
    }

    #[test]
    fn test_get_missing() {
        let cache = cache(24, 50);
        assert_eq!(cache.get("nothing"), None);
        assert!(!cache.has("nothing"));
    }

    #[test]
    fn test_set_overwrites() {
        let cache = cache(24, 50);
        cache.set("cat", vec![1]);
        cache.set("cat", vec![2]);
        assert_eq!(cache.get("cat"), Some(vec![2]));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_set_can_overflow_by_one() {
        let cache = cache(24, 3);
        for (i, key) in ["a", "b", "c", "d"].iter().enumerate() {
            cache.set(key, vec![i as u32]);
        }
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn test_set_after_overflow_clears_then_inserts() {
        let cache = cache(24, 3);
        for key in ["a", "b", "c", "d"] {
            cache.set(key, vec![]);
        }

        cache.set("e", vec![5]);

        assert_eq!(cache.len(), 1);
        assert!(cache.has("e"));
        assert!(!cache.has("a"));
    }

    #[test]
    fn test_get_after_overflow_returns_snapshot_then_clears() {
        let cache = cache(24, 3);
        for (i, key) in ["a", "b", "c", "d"].iter().enumerate() {
            cache.set(key, vec![i as u32]);
        }

        assert_eq!(cache.get("d"), Some(vec![3]));
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.get("d"), None);
    }

    #[test]
    fn test_full_but_not_over_is_kept() {
        let cache = cache(24, 2);
        cache.set("a", vec![1]);
        cache.set("b", vec![2]);
        assert_eq!(cache.get("a"), Some(vec![1]));
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_epoch_cleared_on_set() {
        let cache = cache(2, 50);
        cache.set("a", vec![1]);
        cache.set("b", vec![2]);

        tokio::time::advance(Duration::from_secs(2 * 3600)).await;
        cache.set("c", vec![3]);

        assert_eq!(cache.len(), 1);
        assert!(cache.has("c"));
        assert!(!cache.has("a"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_yet_expired() {
        let cache = cache(1, 50);
        cache.set("a", vec![1]);

        tokio::time::advance(Duration::from_secs(3599)).await;

        assert_eq!(cache.get("a"), Some(vec![1]));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_epoch_get_returns_then_clears() {
        let cache = cache(1, 50);
        cache.set("a", vec![1]);

        tokio::time::advance(Duration::from_secs(3600)).await;

        assert_eq!(cache.get("a"), Some(vec![1]));
        assert!(cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_has_does_not_expire() {
        let cache = cache(1, 50);
        cache.set("a", vec![1]);

        tokio::time::advance(Duration::from_secs(2 * 3600)).await;

        assert!(cache.has("a"));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_restarts_epoch() {
        let cache = cache(1, 50);
        cache.set("a", vec![1]);
        tokio::time::advance(Duration::from_secs(1800)).await;

        assert_eq!(cache.clear(), 1);
        assert_eq!(cache.stats().age_secs, 0);

        cache.set("b", vec![2]);
        tokio::time::advance(Duration::from_secs(1800)).await;
        assert_eq!(cache.get("b"), Some(vec![2]));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_initialize_resets_contents_and_bounds() {
        let cache = cache(24, 50);
        cache.set("a", vec![1]);
        tokio::time::advance(Duration::from_secs(60)).await;

        cache.initialize(CacheConfig { expiry_hours: 1, max_entries: 5 });

        assert!(cache.is_empty());
        let stats = cache.stats();
        assert_eq!(stats.max_entries, 5);
        assert_eq!(stats.expiry_hours, 1);
        assert_eq!(stats.age_secs, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stats_age() {
        let cache = cache(24, 50);
        cache.set("a", vec![1]);
        tokio::time::advance(Duration::from_secs(90)).await;

        let stats = cache.stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.age_secs, 90);
    }
}
