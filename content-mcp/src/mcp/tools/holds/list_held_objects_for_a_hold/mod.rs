//! Tool listing the objects under a hold

use super::{hold_relationships, relationship_where};
use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::HoldObjectRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::Value;

/// Tool listing the held objects of a hold
#[derive(Default)]
pub struct ListHeldObjectsForAHoldTool;

impl ListHeldObjectsForAHoldTool {
    /// Creates a new instance of the ListHeldObjectsForAHoldTool
    pub fn new() -> Self {
        Self
    }
}

async fn held_objects(context: &ToolContext, hold_id: &str) -> Result<Vec<Value>> {
    BaseToolImpl::require_non_empty(hold_id, "hold_object_id")?;
    let relationships = hold_relationships(context, &relationship_where(hold_id, None)).await?;
    Ok(relationships
        .into_iter()
        .filter_map(|mut properties| properties.remove("HeldObject"))
        .filter(|held| !held.is_null())
        .collect())
}

#[async_trait]
impl McpTool for ListHeldObjectsForAHoldTool {
    fn name(&self) -> &'static str {
        "list_held_objects_for_a_hold"
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
                    "description": "Id of the hold"
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
        let result = held_objects(context, &request.hold_object_id).await;
        BaseToolImpl::respond(self.name(), result)
    }
}
