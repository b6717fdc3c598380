//! render_preview tool implementation.
//!
//! Returns the preview HTML document for a result item.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::adapter::{Payload, Plugin};
use crate::shell::Shell;

/// Parameters for the render_preview tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RenderPreviewParams {
    /// Id of the highlighted result item.
    pub id: u64,
    /// Payload returned with the item by `search`.
    pub payload: Payload,
}

/// Implementation of the render_preview tool.
pub async fn render_preview_impl<S: Shell>(
    plugin: &Plugin<S>, params: RenderPreviewParams,
) -> Result<CallToolResult, McpError> {
    let mut document = String::new();
    plugin.render_preview(params.id, &params.payload, &mut document);

    Ok(CallToolResult::success(vec![Content::text(document)]))
}
