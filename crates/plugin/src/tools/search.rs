//! search tool implementation.
//!
//! Searches Wikipedia through the plugin's cached client.

use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wikisearch_core::Error;

use crate::adapter::{DisplayItem, Plugin, SearchOutcome};
use crate::shell::Shell;

/// Input parameters for search tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Search query as typed by the user.
    pub query: String,
}

/// Whether the search produced results, none, or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    Found,
    Empty,
    Failed,
}

/// Output structure for search tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchOutput {
    /// Result items in relevance order.
    pub results: Vec<DisplayItem>,
    pub status: SearchStatus,
    /// Failure reason when `status` is `failed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Implementation of the search tool.
pub async fn search_impl<S: Shell>(plugin: &Plugin<S>, params: SearchParams) -> Result<CallToolResult, McpError> {
    let mut results: Vec<DisplayItem> = Vec::new();
    let outcome = plugin.search(&params.query, &mut results).await;

    let (status, error) = match outcome {
        SearchOutcome::Found(_) => (SearchStatus::Found, None),
        SearchOutcome::Empty => (SearchStatus::Empty, None),
        SearchOutcome::Failed { reason } => (SearchStatus::Failed, Some(reason)),
    };

    let output = SearchOutput { results, status, error };
    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::InvalidInput(format!("Failed to serialize results: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
