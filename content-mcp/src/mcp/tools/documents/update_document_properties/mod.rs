//! Document property update tool

use super::{document_properties_schema, fetch_node_with};
use crate::error::Result;
use crate::graphql::queries;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{ObjectView, UpdateDocumentPropertiesRequest};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::Map;

/// Tool changing document properties without touching the class
#[derive(Default)]
pub struct UpdateDocumentPropertiesTool;

impl UpdateDocumentPropertiesTool {
    /// Creates a new instance of the UpdateDocumentPropertiesTool
    pub fn new() -> Self {
        Self
    }
}

async fn update_properties(
    context: &ToolContext,
    request: &UpdateDocumentPropertiesRequest,
) -> Result<ObjectView> {
    let mut variables = Map::new();
    if let Some(properties) = &request.document_properties {
        variables.insert("document_properties".to_string(), properties.to_input()?);
    }
    tracing::info!("Updating properties of document {}", request.identifier);
    let node = fetch_node_with(
        context,
        queries::UPDATE_DOCUMENT,
        &request.identifier,
        "updateDocument",
        variables,
    )
    .await?;
    Ok(ObjectView::from_node(&node)?.named_by("DocumentTitle"))
}

#[async_trait]
impl McpTool for UpdateDocumentPropertiesTool {
    fn name(&self) -> &'static str {
        "update_document_properties"
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
                    "description": "Document id or path"
                },
                "document_properties": document_properties_schema()
            },
            "required": ["identifier"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: UpdateDocumentPropertiesRequest = BaseToolImpl::parse_arguments(arguments)?;
        let result = update_properties(context, &request).await;
        BaseToolImpl::respond(self.name(), result)
    }
}
