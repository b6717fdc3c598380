//! MediaWiki query response types and normalization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::WikiError;

/// Raw response from the MediaWiki action API.
///
/// A search with no hits omits `query` entirely.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub query: Option<QueryBody>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

/// The `query` object of a generator response.
#[derive(Debug, Deserialize)]
pub struct QueryBody {
    /// Page objects keyed by page id, in response order.
    #[serde(default)]
    pub pages: Map<String, Value>,
}

/// The `error` object returned with HTTP 200 for rejected requests.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    #[serde(default)]
    pub info: String,
}

/// Individual page object from a generator search.
#[derive(Debug, Deserialize)]
pub struct Page {
    pub pageid: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub canonicalurl: Option<String>,
    /// Search relevance; lower is more relevant.
    #[serde(default)]
    pub index: Option<u32>,
}

/// Normalized search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    /// Intro section as HTML.
    pub extract_html: Option<String>,
    pub canonical_url: Option<String>,
}

impl From<Page> for ResultRecord {
    fn from(page: Page) -> Self {
        ResultRecord {
            id: page.pageid,
            title: page.title,
            description: page.description,
            extract_html: page.extract,
            canonical_url: page.canonicalurl,
        }
    }
}

impl ApiResponse {
    /// Convert the raw response into records ordered by relevance.
    ///
    /// Pages sort ascending by `index`. Pages without an index go last, and
    /// equal indices keep response order.
    pub fn into_records(self) -> Result<Vec<ResultRecord>, WikiError> {
        if let Some(error) = self.error {
            return Err(WikiError::Api { code: error.code, info: error.info });
        }

        let Some(query) = self.query else {
            return Ok(Vec::new());
        };

        let mut pages = query
            .pages
            .into_iter()
            .map(|(key, value)| {
                serde_json::from_value::<Page>(value).map_err(|e| WikiError::Parse(format!("page {key}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        pages.sort_by_key(|page| (page.index.is_none(), page.index));

        Ok(pages.into_iter().map(ResultRecord::from).collect())
    }
}

/// Parse a response body into ordered records.
pub fn parse_records(body: &[u8]) -> Result<Vec<ResultRecord>, WikiError> {
    let response: ApiResponse = serde_json::from_slice(body).map_err(|e| WikiError::Parse(e.to_string()))?;
    response.into_records()
}
