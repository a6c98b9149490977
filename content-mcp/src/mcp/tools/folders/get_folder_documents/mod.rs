//! Folder listing tool

use super::fetch_folder_node;
use crate::error::Result;
use crate::graphql::{array_at, queries};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{FolderRequest, ObjectView};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool listing the documents filed in a folder
#[derive(Default)]
pub struct GetFolderDocumentsTool;

impl GetFolderDocumentsTool {
    /// Creates a new instance of the GetFolderDocumentsTool
    pub fn new() -> Self {
        Self
    }
}

async fn folder_documents(context: &ToolContext, id_or_path: &str) -> Result<Vec<ObjectView>> {
    let folder =
        fetch_folder_node(context, queries::FOLDER_DOCUMENTS, id_or_path, "folder").await?;
    let documents = array_at(&folder, "/containedDocuments/documents")
        .iter()
        .map(ObjectView::from_node)
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!("{} documents in {}", documents.len(), id_or_path);
    Ok(documents)
}

#[async_trait]
impl McpTool for GetFolderDocumentsTool {
    fn name(&self) -> &'static str {
        "get_folder_documents"
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
                    "description": "Folder id or path"
                }
            },
            "required": ["folder_id_or_path"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: FolderRequest = BaseToolImpl::parse_arguments(arguments)?;
        let result = folder_documents(context, &request.folder_id_or_path).await;
        BaseToolImpl::respond(self.name(), result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{arguments, create_test_context, result_json, MockGraphqlExecutor};
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_get_folder_documents_tool_schema() {
        let tool = GetFolderDocumentsTool::new();
        assert_eq!(tool.name(), "get_folder_documents");
        assert!(!tool.description().is_empty());
        assert_eq!(tool.schema()["required"], json!(["folder_id_or_path"]));
    }

    #[tokio::test]
    async fn test_lists_contained_documents() {
        let mock = Arc::new(MockGraphqlExecutor::new().with_response(
            "getContainedDocuments",
            json!({"data": {"folder": {"containedDocuments": {"documents": [
                {"id": "{D1}", "name": "Lease.pdf", "className": "Document",
                 "properties": [{"id": "DocumentTitle", "value": "Lease"}]},
                {"id": "{D2}", "name": "Invoice 42", "className": "Invoice", "properties": []}
            ]}}}}),
        ));
        let context = create_test_context(mock);

        let result = GetFolderDocumentsTool::new()
            .execute(arguments(json!({"folder_id_or_path": "/Contracts"})), &context)
            .await
            .unwrap();

        let documents = result_json(&result);
        assert_eq!(documents.as_array().unwrap().len(), 2);
        assert_eq!(documents[0]["name"], "Lease.pdf");
        assert_eq!(documents[0]["properties"]["DocumentTitle"], "Lease");
        assert_eq!(documents[1]["class_name"], "Invoice");
    }

    #[tokio::test]
    async fn test_empty_folder_returns_empty_list() {
        let mock = Arc::new(MockGraphqlExecutor::new().with_response(
            "getContainedDocuments",
            json!({"data": {"folder": {"containedDocuments": {"documents": []}}}}),
        ));
        let context = create_test_context(mock);

        let result = GetFolderDocumentsTool::new()
            .execute(arguments(json!({"folder_id_or_path": "{F1}"})), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        assert_eq!(result_json(&result), json!([]));
    }

    #[tokio::test]
    async fn test_missing_folder_is_error() {
        let mock = Arc::new(
            MockGraphqlExecutor::new()
                .with_response("getContainedDocuments", json!({"data": {"folder": null}})),
        );
        let context = create_test_context(mock);

        let result = GetFolderDocumentsTool::new()
            .execute(arguments(json!({"folder_id_or_path": "/Nope"})), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_json(&result)["message"], "Folder not found: /Nope");
    }
}
