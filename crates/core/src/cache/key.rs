//! Cache key normalization.

/// Normalize a raw query into a cache key.
///
/// Surrounding whitespace is trimmed and the query is lower-cased, so
/// `" Cat "` and `"cat"` share one entry. An empty result means the query
/// should not be searched at all.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}
