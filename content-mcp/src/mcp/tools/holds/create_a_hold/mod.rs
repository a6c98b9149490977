//! Hold creation tool

use super::HOLD_CLASS;
use crate::error::{ContentMcpError, Result};
use crate::graphql::queries;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{CreateHoldRequest, ObjectView};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::json;

/// Tool creating a legal hold
#[derive(Default)]
pub struct CreateAHoldTool;

impl CreateAHoldTool {
    /// Creates a new instance of the CreateAHoldTool
    pub fn new() -> Self {
        Self
    }
}

async fn create_hold(context: &ToolContext, display_name: &str) -> Result<ObjectView> {
    BaseToolImpl::require_non_empty(display_name, "display_name")?;
    tracing::info!("Creating hold '{}'", display_name.trim());
    let data = context
        .repository
        .query(
            queries::CREATE_HOLD,
            json!({ "class_name": HOLD_CLASS, "display_name": display_name.trim() }),
        )
        .await?;
    let node = data
        .get("changeObject")
        .filter(|node| !node.is_null())
        .ok_or_else(|| ContentMcpError::backend("createHold returned no hold"))?;
    ObjectView::from_node(node)
}

#[async_trait]
impl McpTool for CreateAHoldTool {
    fn name(&self) -> &'static str {
        "create_a_hold"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "display_name": {
                    "type": "string",
                    "description": "Display name of the new hold"
                }
            },
            "required": ["display_name"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateHoldRequest = BaseToolImpl::parse_arguments(arguments)?;
        let result = create_hold(context, &request.display_name).await;
        BaseToolImpl::respond(self.name(), result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{arguments, create_test_context, result_json, MockGraphqlExecutor};
    use std::sync::Arc;

    #[test]
    fn test_create_a_hold_tool_schema() {
        let tool = CreateAHoldTool::new();
        assert_eq!(tool.name(), "create_a_hold");
        assert!(!tool.description().is_empty());
        assert_eq!(tool.schema()["required"], json!(["display_name"]));
    }

    #[tokio::test]
    async fn test_creates_hold() {
        let mock = Arc::new(MockGraphqlExecutor::new().with_response(
            "createHold",
            json!({"data": {"changeObject": {
                "className": "CmHold",
                "properties": [
                    {"id": "Id", "value": "{H1}"},
                    {"id": "DisplayName", "value": "Litigation 2024"}
                ]
            }}}),
        ));
        let context = create_test_context(mock.clone());

        let result = CreateAHoldTool::new()
            .execute(arguments(json!({"display_name": "Litigation 2024"})), &context)
            .await
            .unwrap();

        let hold = result_json(&result);
        assert_eq!(hold["class_name"], "CmHold");
        assert_eq!(hold["properties"]["Id"], "{H1}");

        let variables = mock.last_variables("createHold").unwrap();
        assert_eq!(variables["class_name"], "CmHold");
        assert_eq!(variables["display_name"], "Litigation 2024");
    }

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let mock = Arc::new(MockGraphqlExecutor::new());
        let context = create_test_context(mock.clone());

        let result = CreateAHoldTool::new()
            .execute(arguments(json!({"display_name": "  "})), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(mock.calls().is_empty());
    }
}
