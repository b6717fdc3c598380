//! cache_stats tool implementation.
//!
//! Reports occupancy and age of the result cache.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wikisearch_core::{CacheStats, Error};

use crate::adapter::Plugin;
use crate::shell::Shell;

/// Parameters for the cache_stats tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CacheStatsParams {}

/// Output from the cache_stats tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CacheStatsOutput {
    pub stats: CacheStats,
}

/// Implementation of the cache_stats tool.
pub async fn stats_impl<S: Shell>(plugin: &Plugin<S>, _params: CacheStatsParams) -> Result<CallToolResult, McpError> {
    let output = CacheStatsOutput { stats: plugin.cache_stats() };
    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::InvalidInput(format!("Failed to serialize stats: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::RecordingShell;
    use crate::tools::tool_text;
    use wikisearch_core::AppConfig;

    #[tokio::test]
    async fn test_stats_empty() {
        let config = AppConfig { max_entries: 12, expiry_hours: 3, ..Default::default() };
        let plugin = Plugin::with_shell(&config, RecordingShell::default()).unwrap();

        let result = stats_impl(&plugin, CacheStatsParams {}).await.unwrap();
        let output: CacheStatsOutput = serde_json::from_str(&tool_text(&result)).unwrap();

        assert_eq!(output.stats.entries, 0);
        assert_eq!(output.stats.max_entries, 12);
        assert_eq!(output.stats.expiry_hours, 3);
    }
}
