//! Document creation tool

use super::DEFAULT_DOCUMENT_CLASS;
use crate::error::{ContentMcpError, Result};
use crate::graphql::queries;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{CreateDocumentRequest, ObjectView};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{Map, Value};

/// Tool creating a checked-in document
#[derive(Default)]
pub struct CreateDocumentTool;

impl CreateDocumentTool {
    /// Creates a new instance of the CreateDocumentTool
    pub fn new() -> Self {
        Self
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

async fn create_document(
    context: &ToolContext,
    request: &CreateDocumentRequest,
) -> Result<ObjectView> {
    let class_identifier = non_blank(&request.class_identifier).unwrap_or(DEFAULT_DOCUMENT_CLASS);

    let mut variables = Map::new();
    variables.insert("class_identifier".into(), class_identifier.into());
    if let Some(id) = non_blank(&request.id) {
        variables.insert("id".into(), id.into());
    }
    if let Some(folder) = non_blank(&request.file_in_folder_identifier) {
        variables.insert("file_in_folder_identifier".into(), folder.into());
    }
    if let Some(properties) = &request.document_properties {
        variables.insert("document_properties".into(), properties.to_input()?);
    }
    let checkin_action = request.checkin_action.clone().unwrap_or_default();
    variables.insert("checkin_action".into(), checkin_action.to_input());

    tracing::info!(
        "Creating {} document{}",
        class_identifier,
        non_blank(&request.file_in_folder_identifier)
            .map(|f| format!(" in {f}"))
            .unwrap_or_default()
    );
    let data = context
        .repository
        .query(queries::CREATE_DOCUMENT, Value::Object(variables))
        .await?;
    let node = data
        .get("createDocument")
        .filter(|node| !node.is_null())
        .ok_or_else(|| ContentMcpError::backend("createDocument returned no document"))?;
    Ok(ObjectView::from_node(node)?.named_by("DocumentTitle"))
}

#[async_trait]
impl McpTool for CreateDocumentTool {
    fn name(&self) -> &'static str {
        "create_document"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "class_identifier": {
                    "type": "string",
                    "description": "Document class (defaults to Document)"
                },
                "id": {
                    "type": "string",
                    "description": "GUID for the new document"
                },
                "document_properties": super::document_properties_schema(),
                "file_in_folder_identifier": {
                    "type": "string",
                    "description": "Id or path of the folder to file the document in"
                },
                "checkin_action": super::checkin_action_schema()
            }
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateDocumentRequest = BaseToolImpl::parse_arguments(arguments)?;
        let result = create_document(context, &request).await;
        BaseToolImpl::respond(self.name(), result)
    }
}
