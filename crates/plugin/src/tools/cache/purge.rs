//! cache_purge tool implementation.
//!
//! Discards every cached query and starts a new cache epoch.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wikisearch_core::Error;

use crate::adapter::Plugin;
use crate::shell::Shell;

/// Parameters for the cache_purge tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CachePurgeParams {}

/// Output from the cache_purge tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CachePurgeOutput {
    /// Number of cached queries dropped.
    pub deleted: usize,
}

/// Implementation of the cache_purge tool.
pub async fn purge_impl<S: Shell>(plugin: &Plugin<S>, _params: CachePurgeParams) -> Result<CallToolResult, McpError> {
    let output = CachePurgeOutput { deleted: plugin.purge_cache() };
    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::InvalidInput(format!("Failed to serialize purge result: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::RecordingShell;
    use crate::tools::search::{SearchParams, search_impl};
    use crate::tools::tool_text;
    use wikisearch_core::AppConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_purge_after_searches() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "query": {"pages": {"1": {"pageid": 1, "title": "One", "index": 1}}}
            })))
            .expect(3)
            .mount(&mock_server)
            .await;

        let config = AppConfig { base_url: Some(format!("{}/w/api.php", mock_server.uri())), ..Default::default() };
        let plugin = Plugin::with_shell(&config, RecordingShell::default()).unwrap();

        for query in ["one", "two", "one"] {
            search_impl(&plugin, SearchParams { query: query.to_string() }).await.unwrap();
        }

        let result = purge_impl(&plugin, CachePurgeParams {}).await.unwrap();
        let output: CachePurgeOutput = serde_json::from_str(&tool_text(&result)).unwrap();
        assert_eq!(output.deleted, 2);

        // purged entries are fetched again
        search_impl(&plugin, SearchParams { query: "one".to_string() }).await.unwrap();
    }

    #[tokio::test]
    async fn test_purge_empty() {
        let plugin = Plugin::with_shell(&AppConfig::default(), RecordingShell::default()).unwrap();

        let result = purge_impl(&plugin, CachePurgeParams {}).await.unwrap();
        let output: CachePurgeOutput = serde_json::from_str(&tool_text(&result)).unwrap();
        assert_eq!(output.deleted, 0);
    }
}
