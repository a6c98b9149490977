//! Folder deletion tool

use super::fetch_folder_node;
use crate::error::Result;
use crate::graphql::queries;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::DeleteFolderRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::Value;

/// Tool deleting a folder
#[derive(Default)]
pub struct DeleteFolderTool;

impl DeleteFolderTool {
    /// Creates a new instance of the DeleteFolderTool
    pub fn new() -> Self {
        Self
    }
}

async fn delete_folder(context: &ToolContext, id_or_path: &str) -> Result<String> {
    let node = fetch_folder_node(context, queries::DELETE_FOLDER, id_or_path, "deleteFolder").await?;
    let id = node
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or(id_or_path.trim())
        .to_string();
    tracing::info!("Deleted folder {}", id);
    Ok(id)
}

#[async_trait]
impl McpTool for DeleteFolderTool {
    fn name(&self) -> &'static str {
        "delete_folder"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "id_or_path": {
                    "type": "string",
                    "description": "Folder id or path"
                }
            },
            "required": ["id_or_path"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: DeleteFolderRequest = BaseToolImpl::parse_arguments(arguments)?;
        let result = delete_folder(context, &request.id_or_path).await;
        BaseToolImpl::respond(self.name(), result)
    }
}
