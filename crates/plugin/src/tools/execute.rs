//! execute tool implementation.
//!
//! Opens a chosen result in the default browser.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::adapter::{Payload, Plugin};
use crate::shell::Shell;

/// Parameters for the execute tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExecuteParams {
    /// Id of the chosen result item.
    pub id: u64,
    /// Payload returned with the item by `search`.
    pub payload: Payload,
}

/// Implementation of the execute tool.
pub async fn execute_impl<S: Shell>(plugin: &Plugin<S>, params: ExecuteParams) -> Result<CallToolResult, McpError> {
    plugin.execute(params.id, &params.payload)?;

    let opened = params.payload.url.unwrap_or_default();
    Ok(CallToolResult::success(vec![Content::text(format!("opened {opened}"))]))
}
