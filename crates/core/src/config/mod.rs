//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (WIKISEARCH_*)
//! 2. TOML config file (if WIKISEARCH_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::cache::{CacheConfig, DEFAULT_EXPIRY_HOURS, DEFAULT_MAX_ENTRIES};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (WIKISEARCH_*)
/// 2. TOML config file (if WIKISEARCH_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Wikipedia language edition, used as the API subdomain.
    ///
    /// Set via WIKISEARCH_LANGUAGE environment variable.
    #[serde(default = "default_language")]
    pub language: String,

    /// Override for the API endpoint (replaces `https://<language>.wikipedia.org/w/api.php`).
    ///
    /// Set via WIKISEARCH_BASE_URL environment variable.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Hours before the result cache is discarded.
    ///
    /// Set via WIKISEARCH_EXPIRY_HOURS environment variable.
    #[serde(default = "default_expiry_hours")]
    pub expiry_hours: u64,

    /// Cached queries above which the result cache is discarded.
    ///
    /// Set via WIKISEARCH_MAX_ENTRIES environment variable.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via WIKISEARCH_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via WIKISEARCH_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_language() -> String {
    "en".into()
}

fn default_expiry_hours() -> u64 {
    DEFAULT_EXPIRY_HOURS
}

fn default_max_entries() -> usize {
    DEFAULT_MAX_ENTRIES
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    "wikisearch/0.1".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            base_url: None,
            expiry_hours: default_expiry_hours(),
            max_entries: default_max_entries(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Bounds for the result cache.
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig { expiry_hours: self.expiry_hours, max_entries: self.max_entries }
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `WIKISEARCH_`
    /// 2. TOML file from `WIKISEARCH_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("WIKISEARCH_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("WIKISEARCH_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
