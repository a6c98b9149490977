//! Unfile tool
//!
//! Removing a document from a folder deletes the containment relationship
//! that links them. The document itself is kept.

use super::resolve_folder_id;
use crate::error::{ContentMcpError, Result};
use crate::graphql::{array_at, queries};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::UnfileDocumentRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{json, Value};

/// Tool removing a document from a folder
#[derive(Default)]
pub struct UnfileDocumentTool;

impl UnfileDocumentTool {
    /// Creates a new instance of the UnfileDocumentTool
    pub fn new() -> Self {
        Self
    }
}

async fn unfile_document(context: &ToolContext, request: &UnfileDocumentRequest) -> Result<String> {
    BaseToolImpl::require_non_empty(&request.document_id, "document_id")?;
    let folder_id = resolve_folder_id(context, &request.folder_id_or_path).await?;
    let document_id = request.document_id.trim();

    let where_statement = format!("tail = ({folder_id}) and head = ({document_id})");
    let data = context
        .repository
        .query(
            queries::FILING_RELATIONSHIPS,
            json!({ "where_statement": where_statement }),
        )
        .await?;
    let relationships = array_at(&data, "/repositoryObjects/independentObjects");

    let relationship_id = match relationships.as_slice() {
        [] => {
            return Err(ContentMcpError::not_found(format!(
                "Document {document_id} is not filed in folder {}",
                request.folder_id_or_path.trim()
            )))
        }
        [only] => only
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| ContentMcpError::Internal("filing relationship without id".to_string()))?
            .to_string(),
        _ => {
            return Err(ContentMcpError::validation(format!(
                "Document {document_id} is filed more than once in folder {}; unfile it manually",
                request.folder_id_or_path.trim()
            )))
        }
    };

    let deleted = context
        .repository
        .query(
            queries::DELETE_FILING,
            json!({ "identifier": relationship_id }),
        )
        .await?;
    let id = deleted
        .get("deleteReferentialContainmentRelationship")
        .and_then(|node| node.get("id"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or(relationship_id);
    tracing::info!("Unfiled {} from {} ({})", document_id, folder_id, id);
    Ok(id)
}

#[async_trait]
impl McpTool for UnfileDocumentTool {
    fn name(&self) -> &'static str {
        "unfile_document"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "folder_id_or_path": {
                    "type": "string",
                    "description": "Id or path of the folder the document is filed in"
                },
                "document_id": {
                    "type": "string",
                    "description": "Id of the document to unfile"
                }
            },
            "required": ["folder_id_or_path", "document_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: UnfileDocumentRequest = BaseToolImpl::parse_arguments(arguments)?;
        let result = unfile_document(context, &request).await;
        BaseToolImpl::respond(self.name(), result)
    }
}
