//! Tool placing an object under a hold

use crate::error::{ContentMcpError, Result};
use crate::graphql::queries;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{ObjectView, PutOnHoldRequest};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::json;

/// Tool creating a hold relationship for an object
#[derive(Default)]
pub struct PutAnObjectOnHoldTool;

impl PutAnObjectOnHoldTool {
    /// Creates a new instance of the PutAnObjectOnHoldTool
    pub fn new() -> Self {
        Self
    }
}

async fn put_on_hold(context: &ToolContext, request: &PutOnHoldRequest) -> Result<ObjectView> {
    BaseToolImpl::require_non_empty(&request.hold_id, "hold_id")?;
    BaseToolImpl::require_non_empty(&request.held_class, "held_class")?;
    BaseToolImpl::require_non_empty(&request.held_id, "held_id")?;

    tracing::info!(
        "Placing {} {} on hold {}",
        request.held_class,
        request.held_id,
        request.hold_id
    );
    let data = context
        .repository
        .query(
            queries::PUT_ON_HOLD,
            json!({
                "hold_identifier": request.hold_id.trim(),
                "held_class_name": request.held_class.trim(),
                "held_identifier": request.held_id.trim()
            }),
        )
        .await?;
    let node = data
        .get("changeObject")
        .filter(|node| !node.is_null())
        .ok_or_else(|| ContentMcpError::backend("putObjectOnHold returned no relationship"))?;
    ObjectView::from_node(node)
}

#[async_trait]
impl McpTool for PutAnObjectOnHoldTool {
    fn name(&self) -> &'static str {
        "put_an_object_on_hold"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "hold_id": {
                    "type": "string",
                    "description": "Id of the hold"
                },
                "held_class": {
                    "type": "string",
                    "description": "Class of the object to hold, e.g. Document"
                },
                "held_id": {
                    "type": "string",
                    "description": "Id of the object to hold"
                }
            },
            "required": ["hold_id", "held_class", "held_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: PutOnHoldRequest = BaseToolImpl::parse_arguments(arguments)?;
        let result = put_on_hold(context, &request).await;
        BaseToolImpl::respond(self.name(), result)
    }
}
