//! Folder creation tool

use crate::error::{ContentMcpError, Result};
use crate::graphql::queries;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{CreateFolderRequest, ObjectView};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::json;

const DEFAULT_FOLDER_CLASS: &str = "Folder";

/// Tool creating a folder under a parent folder
#[derive(Default)]
pub struct CreateFolderTool;

impl CreateFolderTool {
    /// Creates a new instance of the CreateFolderTool
    pub fn new() -> Self {
        Self
    }
}

async fn create_folder(context: &ToolContext, request: &CreateFolderRequest) -> Result<ObjectView> {
    BaseToolImpl::require_non_empty(&request.name, "name")?;
    BaseToolImpl::require_non_empty(&request.parent_folder, "parent_folder")?;
    let class_name = request
        .class_identifier
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_FOLDER_CLASS);

    tracing::info!(
        "Creating {} '{}' under {}",
        class_name,
        request.name,
        request.parent_folder
    );
    let data = context
        .repository
        .query(
            queries::CREATE_FOLDER,
            json!({
                "class_name": class_name,
                "folder_properties": {
                    "name": request.name.trim(),
                    "parent": {"identifier": request.parent_folder.trim()}
                }
            }),
        )
        .await?;
    let node = data
        .get("createFolder")
        .filter(|node| !node.is_null())
        .ok_or_else(|| ContentMcpError::backend("createFolder returned no folder"))?;
    ObjectView::from_node(node)
}

#[async_trait]
impl McpTool for CreateFolderTool {
    fn name(&self) -> &'static str {
        "create_folder"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Name of the new folder"
                },
                "parent_folder": {
                    "type": "string",
                    "description": "Id or path of the parent folder"
                },
                "class_identifier": {
                    "type": "string",
                    "description": "Folder class (defaults to Folder)"
                }
            },
            "required": ["name", "parent_folder"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateFolderRequest = BaseToolImpl::parse_arguments(arguments)?;
        let result = create_folder(context, &request).await;
        BaseToolImpl::respond(self.name(), result)
    }
}
