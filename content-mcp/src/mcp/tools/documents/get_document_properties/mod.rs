//! Document property retrieval tool

use super::fetch_node;
use crate::graphql::queries;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{IdentifierRequest, ObjectView};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool returning every property of a document
#[derive(Default)]
pub struct GetDocumentPropertiesTool;

impl GetDocumentPropertiesTool {
    /// Creates a new instance of the GetDocumentPropertiesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetDocumentPropertiesTool {
    fn name(&self) -> &'static str {
        "get_document_properties"
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
        let request: IdentifierRequest = BaseToolImpl::parse_arguments(arguments)?;
        let result = fetch_node(
            context,
            queries::DOCUMENT_PROPERTIES,
            &request.identifier,
            "document",
        )
        .await
        .and_then(|node| ObjectView::from_node(&node));
        BaseToolImpl::respond(self.name(), result)
    }
}
