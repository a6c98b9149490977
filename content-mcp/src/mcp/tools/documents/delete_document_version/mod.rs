//! Single version deletion tool

use super::delete_by_identifier;
use crate::graphql::queries;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::IdentifierRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool deleting one version of a document
#[derive(Default)]
pub struct DeleteDocumentVersionTool;

impl DeleteDocumentVersionTool {
    /// Creates a new instance of the DeleteDocumentVersionTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DeleteDocumentVersionTool {
    fn name(&self) -> &'static str {
        "delete_document_version"
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
                    "description": "Id of the document version to delete"
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
        let result = delete_by_identifier(
            context,
            queries::DELETE_DOCUMENT_VERSION,
            &request.identifier,
            "deleteDocument",
        )
        .await;
        BaseToolImpl::respond(self.name(), result)
    }
}
