//! Launcher plugin contract over the Wikipedia client.
//!
//! The host calls [`Plugin::startup`] once, then [`Plugin::search`] as the
//! user types, [`Plugin::render_preview`] for the highlighted item and
//! [`Plugin::execute`] when an item is chosen.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wikisearch_client::{ResultRecord, WikiConfig, WikipediaClient};
use wikisearch_core::{AppConfig, CacheConfig, CacheStats, Error, QueryCache};

use crate::preview::render_document;
use crate::shell::{Shell, SystemShell};

/// Data carried with a result item back to `execute` and `render_preview`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Payload {
    /// Canonical article URL.
    pub url: Option<String>,
    /// Intro extract as HTML.
    pub html: Option<String>,
}

/// One entry in the launcher's result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DisplayItem {
    /// Wikipedia page id.
    pub id: u64,
    pub title: String,
    /// Short description, if the article has one.
    pub description: Option<String>,
    /// Whether a preview can be rendered.
    pub has_preview: bool,
    pub payload: Payload,
}

impl From<ResultRecord> for DisplayItem {
    fn from(record: ResultRecord) -> Self {
        DisplayItem {
            id: record.id,
            title: record.title,
            description: record.description,
            has_preview: record.extract_html.is_some(),
            payload: Payload { url: record.canonical_url, html: record.extract_html },
        }
    }
}

/// Receives the result list for a search.
pub trait ResultSink {
    fn add(&mut self, items: Vec<DisplayItem>);
}

impl ResultSink for Vec<DisplayItem> {
    fn add(&mut self, items: Vec<DisplayItem>) {
        self.extend(items);
    }
}

/// Receives the preview document for the highlighted item.
pub trait RenderSink {
    fn render(&mut self, html: String);
}

impl RenderSink for String {
    fn render(&mut self, html: String) {
        *self = html;
    }
}

/// How a search ended. The sink has already received the items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(usize),
    /// Blank query or no matching articles.
    Empty,
    /// The search failed; an empty list was pushed.
    Failed { reason: String },
}

/// The launcher plugin.
pub struct Plugin<S = SystemShell> {
    client: WikipediaClient,
    cache_config: CacheConfig,
    shell: S,
}

impl Plugin {
    /// Create a plugin that opens URLs with the system opener.
    pub fn new(config: &AppConfig) -> Result<Self, Error> {
        Self::with_shell(config, SystemShell)
    }
}

impl<S: Shell> Plugin<S> {
    pub fn with_shell(config: &AppConfig, shell: S) -> Result<Self, Error> {
        let client = WikipediaClient::new(WikiConfig::from(config))?;
        Ok(Self { client, cache_config: config.cache_config(), shell })
    }

    /// Reset the result cache to an empty epoch with the configured bounds.
    pub fn startup(&self) {
        self.client.cache().initialize(self.cache_config);
        tracing::info!(
            endpoint = %self.client.config().endpoint(),
            expiry_hours = self.cache_config.expiry_hours,
            max_entries = self.cache_config.max_entries,
            "wikisearch plugin started"
        );
    }

    /// Search and push the mapped results to `sink`.
    ///
    /// Always pushes exactly one list. A failed search pushes an empty list
    /// and reports the reason in the outcome instead of returning an error.
    pub async fn search(&self, query: &str, sink: &mut impl ResultSink) -> SearchOutcome {
        match self.client.fetch_results(query).await {
            Ok(records) => {
                let items: Vec<DisplayItem> = records.into_iter().map(DisplayItem::from).collect();
                let count = items.len();
                sink.add(items);
                if count == 0 { SearchOutcome::Empty } else { SearchOutcome::Found(count) }
            }
            Err(e) => {
                tracing::warn!(query, error = %e, "search degraded to empty result list");
                sink.add(Vec::new());
                SearchOutcome::Failed { reason: e.to_string() }
            }
        }
    }

    /// Open the item's article in the default browser.
    pub fn execute(&self, id: u64, payload: &Payload) -> Result<(), Error> {
        let raw = payload
            .url
            .as_deref()
            .ok_or_else(|| Error::InvalidInput(format!("result {id} has no URL")))?;

        let url = url::Url::parse(raw).map_err(|e| Error::InvalidUrl(format!("{raw}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl(format!("unsupported scheme: {}", url.scheme())));
        }

        tracing::debug!(id, url = %url, "opening result");
        self.shell
            .open_external(url.as_str())
            .map_err(|e| Error::OpenFailed(e.to_string()))
    }

    /// Render the preview document for an item into `sink`.
    pub fn render_preview(&self, id: u64, payload: &Payload, sink: &mut impl RenderSink) {
        tracing::debug!(id, has_html = payload.html.is_some(), "rendering preview");
        sink.render(render_document(payload.html.as_deref().unwrap_or_default()));
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.client.cache().stats()
    }

    /// Drop every cached query. Returns how many were dropped.
    pub fn purge_cache(&self) -> usize {
        let dropped = self.client.cache().clear();
        tracing::info!(dropped, "search cache purged");
        dropped
    }
}
