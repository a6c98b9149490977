//! Version series deletion tool

use super::delete_by_identifier;
use crate::graphql::queries;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::IdentifierRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool deleting every version of a document
#[derive(Default)]
pub struct DeleteVersionSeriesTool;

impl DeleteVersionSeriesTool {
    /// Creates a new instance of the DeleteVersionSeriesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DeleteVersionSeriesTool {
    fn name(&self) -> &'static str {
        "delete_version_series"
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
                    "description": "Version series id, or the id of any version in it"
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
            queries::DELETE_VERSION_SERIES,
            &request.identifier,
            "deleteVersionSeries",
        )
        .await;
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
    fn test_delete_version_series_tool_schema() {
        let tool = DeleteVersionSeriesTool::new();
        assert_eq!(tool.name(), "delete_version_series");
        assert!(!tool.description().is_empty());
        assert_eq!(tool.schema()["required"], json!(["identifier"]));
    }

    #[tokio::test]
    async fn test_returns_deleted_series_id() {
        let mock = Arc::new(MockGraphqlExecutor::new().with_response(
            "deleteVersionSeries",
            json!({"data": {"deleteVersionSeries": {"id": "{VS1}", "className": "VersionSeries"}}}),
        ));
        let context = create_test_context(mock);

        let result = DeleteVersionSeriesTool::new()
            .execute(arguments(json!({"identifier": "{D1}"})), &context)
            .await
            .unwrap();

        assert_eq!(result_json(&result), json!("{VS1}"));
    }
}
