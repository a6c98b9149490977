//! Document lookup by name keywords

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::LookupByNameRequest;
use crate::search::lookup_documents_by_name;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool finding documents whose name matches keywords
#[derive(Default)]
pub struct LookupDocumentsByNameTool;

impl LookupDocumentsByNameTool {
    /// Creates a new instance of the LookupDocumentsByNameTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for LookupDocumentsByNameTool {
    fn name(&self) -> &'static str {
        "lookup_documents_by_name"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "keywords": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Words expected in the document name"
                },
                "class_symbolic_name": {
                    "type": "string",
                    "description": "Document class to search (defaults to Document)"
                }
            },
            "required": ["keywords"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: LookupByNameRequest = BaseToolImpl::parse_arguments(arguments)?;
        let result = lookup_documents_by_name(
            &context.repository,
            &context.metadata,
            &request.keywords,
            request.class_symbolic_name.as_deref(),
        )
        .await;
        BaseToolImpl::respond(self.name(), result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        arguments, create_test_context, result_json, with_document_classes, MockGraphqlExecutor,
    };
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_lookup_documents_by_name_tool_schema() {
        let tool = LookupDocumentsByNameTool::new();
        assert_eq!(tool.name(), "lookup_documents_by_name");
        assert!(!tool.description().is_empty());
        assert_eq!(tool.schema()["required"], json!(["keywords"]));
    }

    #[tokio::test]
    async fn test_returns_ranked_matches() {
        let mock = Arc::new(
            with_document_classes(MockGraphqlExecutor::new()).with_response(
                "documentsByNameSearch",
                json!({"data": {"documents": {"documents": [
                    {"className": "Document", "id": "{D1}", "name": "Travel Policy"},
                    {"className": "Document", "id": "{D2}", "name": "Policy"}
                ]}}}),
            ),
        );
        let context = create_test_context(mock.clone());

        let result = LookupDocumentsByNameTool::new()
            .execute(arguments(json!({"keywords": ["policy"]})), &context)
            .await
            .unwrap();

        let matches = result_json(&result);
        assert_eq!(matches[0]["id"], "{D2}");
        assert_eq!(matches[1]["id"], "{D1}");
        let variables = mock.last_variables("documentsByNameSearch").unwrap();
        assert!(variables["where_statement"]
            .as_str()
            .unwrap()
            .ends_with("AND (LOWER(DocumentTitle) LIKE '%policy%')"));
    }

    #[tokio::test]
    async fn test_no_matches_is_tool_error() {
        let mock = Arc::new(
            with_document_classes(MockGraphqlExecutor::new()).with_response(
                "documentsByNameSearch",
                json!({"data": {"documents": {"documents": []}}}),
            ),
        );
        let context = create_test_context(mock);

        let result = LookupDocumentsByNameTool::new()
            .execute(arguments(json!({"keywords": ["policy"]})), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result_json(&result)["message"],
            "No document matching keywords [\"policy\"] found in the class 'Document'"
        );
    }
}
