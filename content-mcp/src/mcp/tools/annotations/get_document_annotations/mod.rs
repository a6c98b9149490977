//! Document annotation listing tool

use crate::error::Result;
use crate::graphql::{array_at, queries};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::documents::fetch_node;
use crate::mcp::types::{AnnotationView, DocumentIdRequest};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::Value;

/// Tool listing the annotations attached to a document
#[derive(Default)]
pub struct GetDocumentAnnotationsTool;

impl GetDocumentAnnotationsTool {
    /// Creates a new instance of the GetDocumentAnnotationsTool
    pub fn new() -> Self {
        Self
    }
}

async fn document_annotations(context: &ToolContext, document_id: &str) -> Result<Vec<AnnotationView>> {
    let document = fetch_node(context, queries::DOCUMENT_ANNOTATIONS, document_id, "document").await?;
    let annotations: Vec<AnnotationView> = serde_json::from_value(Value::Array(array_at(
        &document,
        "/annotations/annotations",
    )))?;
    tracing::debug!("{} annotations on {}", annotations.len(), document_id);
    Ok(annotations)
}

#[async_trait]
impl McpTool for GetDocumentAnnotationsTool {
    fn name(&self) -> &'static str {
        "get_document_annotations"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "document_id": {
                    "type": "string",
                    "description": "Document id or path"
                }
            },
            "required": ["document_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: DocumentIdRequest = BaseToolImpl::parse_arguments(arguments)?;
        let result = document_annotations(context, &request.document_id).await;
        BaseToolImpl::respond(self.name(), result)
    }
}
