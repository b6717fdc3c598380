//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `language` is empty or not a plain subdomain label (ASCII letters and `-`)
    /// - `expiry_hours` or `max_entries` is 0
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `user_agent` is empty
    /// - `base_url` is set but not an absolute http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.language.is_empty() || !self.language.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
            return Err(ConfigError::Invalid {
                field: "language".into(),
                reason: "must be a Wikipedia language code such as \"en\"".into(),
            });
        }

        if self.expiry_hours == 0 {
            return Err(ConfigError::Invalid { field: "expiry_hours".into(), reason: "must be greater than 0".into() });
        }

        if self.max_entries == 0 {
            return Err(ConfigError::Invalid { field: "max_entries".into(), reason: "must be greater than 0".into() });
        }

        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if let Some(base_url) = &self.base_url
            && !(base_url.starts_with("http://") || base_url.starts_with("https://"))
        {
            return Err(ConfigError::Invalid { field: "base_url".into(), reason: "must be an http(s) URL".into() });
        }

        if self.max_entries > 10_000 {
            tracing::warn!(max_entries = self.max_entries, "large max_entries; the cache is only purged wholesale");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_language() {
        let config = AppConfig { language: String::new(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "language"));
    }

    #[test]
    fn test_validate_language_with_dots() {
        let config = AppConfig { language: "evil.example.com/".into(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "language"));
    }

    #[test]
    fn test_validate_hyphenated_language() {
        let config = AppConfig { language: "zh-yue".into(), ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_expiry() {
        let config = AppConfig { expiry_hours: 0, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "expiry_hours"));
    }

    #[test]
    fn test_validate_zero_max_entries() {
        let config = AppConfig { max_entries: 0, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "max_entries"));
    }

    #[test]
    fn test_validate_timeout_too_small() {
        let config = AppConfig { timeout_ms: 50, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "timeout_ms"));
    }

    #[test]
    fn test_validate_timeout_exceeds_limit() {
        let config = AppConfig { timeout_ms: 301_000, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "timeout_ms"));
    }

    #[test]
    fn test_validate_empty_user_agent() {
        let config = AppConfig { user_agent: String::new(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "user_agent"));
    }

    #[test]
    fn test_validate_base_url_scheme() {
        let config = AppConfig { base_url: Some("ftp://example.com".into()), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "base_url"));

        let config = AppConfig { base_url: Some("http://127.0.0.1:8080/w/api.php".into()), ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_edge_case_values() {
        let config = AppConfig { expiry_hours: 1, max_entries: 1, timeout_ms: 100, ..Default::default() };
        assert!(config.validate().is_ok());
    }
}
