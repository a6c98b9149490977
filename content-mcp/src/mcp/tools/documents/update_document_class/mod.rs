//! Document reclassification tool

use super::fetch_node_with;
use crate::error::Result;
use crate::graphql::queries;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{ObjectView, UpdateDocumentClassRequest};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{json, Map};

/// Tool changing the class of a document
#[derive(Default)]
pub struct UpdateDocumentClassTool;

impl UpdateDocumentClassTool {
    /// Creates a new instance of the UpdateDocumentClassTool
    pub fn new() -> Self {
        Self
    }
}

async fn update_class(
    context: &ToolContext,
    request: &UpdateDocumentClassRequest,
) -> Result<ObjectView> {
    BaseToolImpl::require_non_empty(&request.class_identifier, "class_identifier")?;
    let class_identifier = request.class_identifier.trim();

    let mut variables = Map::new();
    variables.insert("class_identifier".to_string(), json!(class_identifier));
    tracing::info!(
        "Moving document {} to class {}",
        request.identifier,
        class_identifier
    );
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
impl McpTool for UpdateDocumentClassTool {
    fn name(&self) -> &'static str {
        "update_document_class"
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
                "class_identifier": {
                    "type": "string",
                    "description": "Symbolic name of the new class"
                }
            },
            "required": ["identifier", "class_identifier"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: UpdateDocumentClassRequest = BaseToolImpl::parse_arguments(arguments)?;
        let result = update_class(context, &request).await;
        BaseToolImpl::respond(self.name(), result)
    }
}
