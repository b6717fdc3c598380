//! Wikipedia search client.
//!
//! Provides a client for the MediaWiki action API with result caching,
//! request validation, and response normalization.
//!
//! ### Behavior
//!
//! - **Endpoint**: `https://<language>.wikipedia.org/w/api.php`
//! - **Query**: generator search returning id, title, description, intro extract and canonical URL.
//! - **Caching**: results are cached under the normalized query; identical
//!   concurrent misses share a single request and its outcome.
//! - **Transport**: one attempt per miss, bounded by the configured timeout.
//! - **Normalization**: pages are ordered by the server's relevance index.

pub mod error;
pub mod request;
pub mod response;

pub use error::WikiError;
pub use request::{SearchRequest, endpoint_for};
pub use response::{ApiResponse, Page, ResultRecord, parse_records};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use reqwest::header;
use tokio::sync::watch;
use wikisearch_core::{AppConfig, CacheConfig, QueryCache, WholesaleCache, normalize_query};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "wikisearch/0.1";

/// Wikipedia client configuration.
#[derive(Debug, Clone)]
pub struct WikiConfig {
    /// Language edition (default: en).
    pub language: String,
    /// Full endpoint override, mainly for tests and mirrors.
    pub base_url: Option<String>,
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string (default: wikisearch/0.x).
    pub user_agent: String,
    /// Bounds for the result cache.
    pub cache: CacheConfig,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cache: CacheConfig::default(),
        }
    }
}

impl From<&AppConfig> for WikiConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            language: config.language.clone(),
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
            cache: config.cache_config(),
        }
    }
}

impl WikiConfig {
    /// The API endpoint requests are sent to.
    pub fn endpoint(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| endpoint_for(&self.language))
    }
}

type Outcome = Result<Vec<ResultRecord>, WikiError>;
type Flight = Arc<watch::Sender<Option<Outcome>>>;
type Inflight = Mutex<HashMap<String, Flight>>;

/// Wikipedia search client backed by a query cache.
pub struct WikipediaClient<C = WholesaleCache<Vec<ResultRecord>>> {
    http: reqwest::Client,
    config: WikiConfig,
    cache: Arc<C>,
    inflight: Inflight,
}

impl WikipediaClient {
    /// Create a client with a fresh wholesale cache sized by `config.cache`.
    pub fn new(config: WikiConfig) -> Result<Self, WikiError> {
        let cache = Arc::new(WholesaleCache::new(config.cache));
        Self::with_cache(config, cache)
    }
}

impl<C: QueryCache<Vec<ResultRecord>>> WikipediaClient<C> {
    /// Create a client that shares an existing cache.
    pub fn with_cache(config: WikiConfig, cache: Arc<C>) -> Result<Self, WikiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| WikiError::Network(Arc::new(e)))?;

        Ok(Self { http, config, cache, inflight: Mutex::new(HashMap::new()) })
    }

    pub fn config(&self) -> &WikiConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<C> {
        &self.cache
    }

    /// Search for articles matching `raw_query`.
    ///
    /// The query is trimmed and lower-cased first; a blank query returns an
    /// empty list without touching the cache or the network. Cached results
    /// are returned unchanged. Concurrent misses for the same query share one
    /// request and all receive its outcome, success or failure.
    pub async fn fetch_results(&self, raw_query: &str) -> Result<Vec<ResultRecord>, WikiError> {
        let key = normalize_query(raw_query);
        if key.is_empty() {
            return Ok(Vec::new());
        }

        loop {
            if let Some(records) = self.cached(&key) {
                tracing::debug!(query = %key, results = records.len(), "search cache hit");
                return Ok(records);
            }

            match self.join(&key) {
                Role::Follower(mut shared) => {
                    let outcome = shared.wait_for(Option::is_some).await.ok().and_then(|v| Option::clone(&v));
                    match outcome {
                        Some(outcome) => return outcome,
                        // leader was dropped before finishing
                        None => continue,
                    }
                }
                Role::Leader(flight) => {
                    tracing::debug!(query = %key, "search cache miss");
                    let outcome = self.request(&key).await;

                    match &outcome {
                        Ok(records) => self.cache.set(&key, records.clone()),
                        Err(e) => tracing::warn!(query = %key, error = %e, "Wikipedia search failed"),
                    }
                    flight.finish(outcome.clone());

                    return outcome;
                }
            }
        }
    }

    /// Cached records for `key`. A miss does not evaluate expiry.
    fn cached(&self, key: &str) -> Option<Vec<ResultRecord>> {
        if !self.cache.has(key) {
            return None;
        }
        self.cache.get(key)
    }

    /// Follow the request already in flight for `key`, or start one.
    fn join(&self, key: &str) -> Role<'_> {
        let mut inflight = self.inflight.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(flight) = inflight.get(key) {
            return Role::Follower(flight.subscribe());
        }

        let (sender, _) = watch::channel(None);
        let flight = Arc::new(sender);
        inflight.insert(key.to_string(), flight.clone());

        Role::Leader(LeaderGuard { inflight: &self.inflight, key: key.to_string(), flight })
    }

    /// Issue one search request and normalize the response.
    async fn request(&self, term: &str) -> Result<Vec<ResultRecord>, WikiError> {
        let req = SearchRequest::new(term);
        req.validate()?;
        let url = req.to_url(&self.config.endpoint())?;

        let start = Instant::now();

        let http_response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = http_response.status();
        tracing::debug!("Wikipedia API response status: {}", status);

        if status.is_client_error() || status.is_server_error() {
            return Err(WikiError::HttpError { status: status.as_u16() });
        }

        let bytes = http_response.bytes().await?;
        let records = parse_records(&bytes)?;

        tracing::debug!("search completed in {:?}, {} results", start.elapsed(), records.len());

        Ok(records)
    }
}

enum Role<'a> {
    Leader(LeaderGuard<'a>),
    Follower(watch::Receiver<Option<Outcome>>),
}

/// Owns the in-flight entry for one request.
///
/// Dropping the guard removes the entry, including when the leading future is
/// cancelled mid-request. Followers then see the channel close and retry.
struct LeaderGuard<'a> {
    inflight: &'a Inflight,
    key: String,
    flight: Flight,
}

impl LeaderGuard<'_> {
    fn finish(self, outcome: Outcome) {
        self.flight.send_replace(Some(outcome));
    }
}

impl Drop for LeaderGuard<'_> {
    fn drop(&mut self) {
        let mut inflight = self.inflight.lock().unwrap_or_else(PoisonError::into_inner);
        if inflight.get(&self.key).is_some_and(|current| Arc::ptr_eq(current, &self.flight)) {
            inflight.remove(&self.key);
        }
    }
}
