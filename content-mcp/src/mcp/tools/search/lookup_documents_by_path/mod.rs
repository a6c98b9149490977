//! Document lookup by folder path keywords

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::LookupByPathRequest;
use crate::search::lookup_documents_by_path;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool finding document filings from keywords at each path level
#[derive(Default)]
pub struct LookupDocumentsByPathTool;

impl LookupDocumentsByPathTool {
    /// Creates a new instance of the LookupDocumentsByPathTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for LookupDocumentsByPathTool {
    fn name(&self) -> &'static str {
        "lookup_documents_by_path"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "keywords_at_path_levels": {
                    "type": "array",
                    "items": {
                        "type": "array",
                        "items": {"type": "string"}
                    },
                    "description": "Keywords per path level, outermost folder first, document last"
                },
                "class_symbolic_name": {
                    "type": "string",
                    "description": "Document class to search (defaults to Document)"
                }
            },
            "required": ["keywords_at_path_levels"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: LookupByPathRequest = BaseToolImpl::parse_arguments(arguments)?;
        let result = lookup_documents_by_path(
            &context.repository,
            &context.metadata,
            &request.keywords_at_path_levels,
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
    fn test_lookup_documents_by_path_tool_schema() {
        let tool = LookupDocumentsByPathTool::new();
        assert_eq!(tool.name(), "lookup_documents_by_path");
        assert!(!tool.description().is_empty());
        let schema = tool.schema();
        assert_eq!(schema["required"], json!(["keywords_at_path_levels"]));
        assert_eq!(
            schema["properties"]["keywords_at_path_levels"]["items"]["type"],
            "array"
        );
    }

    #[tokio::test]
    async fn test_filing_under_matched_folder_wins() {
        let mock = Arc::new(
            with_document_classes(MockGraphqlExecutor::new())
                .with_response(
                    "intermediateFoldersByNameSearch",
                    json!({"data": {"folders": {"folders": [
                        {"id": "{F1}", "name": "Contracts", "pathName": "/Legal/Contracts"}
                    ]}}}),
                )
                .with_response(
                    "documentsByPathSearch",
                    json!({"data": {"repositoryObjects": {"independentObjects": [
                        {
                            "id": "{R1}",
                            "containmentName": "Lease",
                            "tail": {"id": "{F1}", "name": "Contracts", "pathName": "/Legal/Contracts"},
                            "head": {"className": "Document", "id": "{D1}", "name": "Lease"}
                        },
                        {
                            "id": "{R2}",
                            "containmentName": "Lease",
                            "tail": {"id": "{F2}", "name": "Archive", "pathName": "/Archive"},
                            "head": {"className": "Document", "id": "{D2}", "name": "Lease"}
                        }
                    ]}}}),
                ),
        );
        let context = create_test_context(mock);

        let result = LookupDocumentsByPathTool::new()
            .execute(
                arguments(json!({"keywords_at_path_levels": [["contracts"], ["lease"]]})),
                &context,
            )
            .await
            .unwrap();

        let matches = result_json(&result);
        assert_eq!(matches[0]["containment_id"], "{R1}");
        assert_eq!(matches[0]["containment_path"], "/Legal/Contracts/Lease");
        let first = matches[0]["score"].as_f64().unwrap();
        assert!(matches
            .as_array()
            .unwrap()
            .iter()
            .skip(1)
            .all(|m| m["score"].as_f64().unwrap() < first));
    }

    #[tokio::test]
    async fn test_empty_levels_rejected() {
        let mock = Arc::new(MockGraphqlExecutor::new());
        let context = create_test_context(mock.clone());

        let result = LookupDocumentsByPathTool::new()
            .execute(arguments(json!({"keywords_at_path_levels": []})), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(mock.calls().is_empty());
    }
}
