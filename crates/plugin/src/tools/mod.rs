//! MCP tool implementations.
//!
//! This module contains all tools exposed by the wikisearch plugin host.

pub mod cache;
pub mod execute;
pub mod render_preview;
pub mod search;

pub use execute::{ExecuteParams, execute_impl};
pub use render_preview::{RenderPreviewParams, render_preview_impl};
pub use search::{SearchOutput, SearchParams, SearchStatus, search_impl};

/// Text of the first content block of a tool result.
#[cfg(test)]
pub(crate) fn tool_text(result: &rmcp::model::CallToolResult) -> String {
    let content_val = serde_json::to_value(&result.content[0]).unwrap();
    content_val
        .get("text")
        .and_then(|v| v.as_str())
        .expect("Expected text field in content")
        .to_string()
}
