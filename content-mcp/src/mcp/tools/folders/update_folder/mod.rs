//! Folder update tool

use crate::error::{ContentMcpError, Result};
use crate::graphql::queries;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{ObjectView, UpdateFolderRequest};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{json, Map, Value};

/// Tool changing a folder's properties or class
#[derive(Default)]
pub struct UpdateFolderTool;

impl UpdateFolderTool {
    /// Creates a new instance of the UpdateFolderTool
    pub fn new() -> Self {
        Self
    }
}

async fn update_folder(context: &ToolContext, request: &UpdateFolderRequest) -> Result<ObjectView> {
    BaseToolImpl::require_non_empty(&request.identifier, "identifier")?;
    let identifier = request.identifier.trim();

    let mut variables = Map::new();
    variables.insert("identifier".to_string(), json!(identifier));
    let class_identifier = request
        .class_identifier
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());
    if let Some(class_identifier) = class_identifier {
        variables.insert("class_identifier".to_string(), json!(class_identifier));
    }
    if let Some(properties) = &request.folder_properties {
        variables.insert("folder_properties".to_string(), properties.to_input()?);
    }

    tracing::info!("Updating folder {}", identifier);
    let data = context
        .repository
        .query(queries::UPDATE_FOLDER, Value::Object(variables))
        .await?;
    let node = data
        .get("updateFolder")
        .filter(|node| !node.is_null())
        .ok_or_else(|| ContentMcpError::not_found(format!("Folder not found: {identifier}")))?;
    Ok(ObjectView::from_node(node)?.named_by("FolderName"))
}

#[async_trait]
impl McpTool for UpdateFolderTool {
    fn name(&self) -> &'static str {
        "update_folder"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "identifier": {
                    "type": "string",
                    "description": "Folder id or path"
                },
                "class_identifier": {
                    "type": "string",
                    "description": "New folder class"
                },
                "folder_properties": {
                    "type": "object",
                    "description": "Properties to set on the folder",
                    "properties": {
                        "name": {"type": "string", "description": "Folder name"},
                        "owner": {"type": "string"},
                        "properties": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "identifier": {"type": "string"},
                                    "value": {}
                                },
                                "required": ["identifier"]
                            }
                        }
                    }
                }
            },
            "required": ["identifier"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: UpdateFolderRequest = BaseToolImpl::parse_arguments(arguments)?;
        let result = update_folder(context, &request).await;
        BaseToolImpl::respond(self.name(), result)
    }
}
