//! Hold deletion tool

use super::{delete_object, HOLD_CLASS};
use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::HoldObjectRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::Value;

/// Tool deleting a legal hold
#[derive(Default)]
pub struct RemoveAHoldTool;

impl RemoveAHoldTool {
    /// Creates a new instance of the RemoveAHoldTool
    pub fn new() -> Self {
        Self
    }
}

async fn remove_hold(context: &ToolContext, hold_id: &str) -> Result<String> {
    BaseToolImpl::require_non_empty(hold_id, "hold_object_id")?;
    let node = delete_object(context, HOLD_CLASS, hold_id.trim()).await?;
    Ok(node
        .pointer("/objectReference/identifier")
        .and_then(Value::as_str)
        .unwrap_or(hold_id.trim())
        .to_string())
}

#[async_trait]
impl McpTool for RemoveAHoldTool {
    fn name(&self) -> &'static str {
        "remove_a_hold"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "hold_object_id": {
                    "type": "string",
                    "description": "Id of the hold to delete"
                }
            },
            "required": ["hold_object_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: HoldObjectRequest = BaseToolImpl::parse_arguments(arguments)?;
        let result = remove_hold(context, &request.hold_object_id).await;
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
    fn test_remove_a_hold_tool_schema() {
        let tool = RemoveAHoldTool::new();
        assert_eq!(tool.name(), "remove_a_hold");
        assert!(!tool.description().is_empty());
        assert_eq!(tool.schema()["required"], json!(["hold_object_id"]));
    }

    #[tokio::test]
    async fn test_removes_hold() {
        let mock = Arc::new(MockGraphqlExecutor::new().with_response(
            "deleteObject",
            json!({"data": {"changeObject": {
                "className": "CmHold",
                "objectReference": {
                    "repositoryIdentifier": "TestOS",
                    "classIdentifier": "CmHold",
                    "identifier": "{H1}"
                }
            }}}),
        ));
        let context = create_test_context(mock.clone());

        let result = RemoveAHoldTool::new()
            .execute(arguments(json!({"hold_object_id": "{H1}"})), &context)
            .await
            .unwrap();

        assert_eq!(result_json(&result), json!("{H1}"));
        assert_eq!(
            mock.last_variables("deleteObject").unwrap()["class_name"],
            "CmHold"
        );
    }

    #[tokio::test]
    async fn test_hold_with_objects_reports_backend_error() {
        let mock = Arc::new(MockGraphqlExecutor::new().with_response(
            "deleteObject",
            json!({"errors": [{"message": "Hold still has held objects"}]}),
        ));
        let context = create_test_context(mock);

        let result = RemoveAHoldTool::new()
            .execute(arguments(json!({"hold_object_id": "{H1}"})), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
    }
}
