//! MCP server handler implementation.
//!
//! This module defines the server handler that exposes the launcher plugin
//! contract to a host over MCP and routes tool calls to the plugin.
use std::sync::Arc;

use crate::adapter::Plugin;
use crate::tools::cache::{CachePurgeParams, CacheStatsParams, purge_impl, stats_impl};
use crate::tools::{
    ExecuteParams, RenderPreviewParams, SearchParams, execute_impl, render_preview_impl, search_impl,
};

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The MCP server handler for the wikisearch plugin.
#[derive(Clone)]
pub struct WikiSearchServer {
    plugin: Arc<Plugin>,
    tool_router: ToolRouter<Self>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl WikiSearchServer {
    /// Create a new server handler around a started plugin.
    pub fn new(plugin: Arc<Plugin>) -> Self {
        Self { plugin, tool_router: Self::tool_router() }
    }

    /// Search Wikipedia for articles matching a query.
    #[tool(
        description = "Search Wikipedia. Returns result items (id, title, description, has_preview, payload) in relevance order."
    )]
    async fn search(&self, params: Parameters<SearchParams>) -> Result<CallToolResult, McpError> {
        search_impl(&self.plugin, params.0).await
    }

    /// Open a result in the default browser.
    #[tool(description = "Open a search result's article URL in the system's default browser.")]
    async fn execute(&self, params: Parameters<ExecuteParams>) -> Result<CallToolResult, McpError> {
        execute_impl(&self.plugin, params.0).await
    }

    /// Render the preview pane for a result.
    #[tool(description = "Render an HTML preview document for a search result's intro extract.")]
    async fn render_preview(&self, params: Parameters<RenderPreviewParams>) -> Result<CallToolResult, McpError> {
        render_preview_impl(&self.plugin, params.0).await
    }

    /// Report result cache occupancy.
    #[tool(description = "Report how many queries are cached, the cache bounds, and the age of the cache.")]
    async fn cache_stats(&self, params: Parameters<CacheStatsParams>) -> Result<CallToolResult, McpError> {
        stats_impl(&self.plugin, params.0).await
    }

    /// Discard all cached queries.
    #[tool(description = "Discard every cached search result.")]
    async fn cache_purge(&self, params: Parameters<CachePurgeParams>) -> Result<CallToolResult, McpError> {
        purge_impl(&self.plugin, params.0).await
    }
}

impl ServerHandler for WikiSearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "wikisearch".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
