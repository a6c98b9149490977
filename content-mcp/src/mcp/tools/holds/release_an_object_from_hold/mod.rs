//! Tool releasing an object from a hold

use super::{delete_object, hold_relationships, relationship_where, HOLD_RELATIONSHIP_CLASS};
use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ReleaseFromHoldRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde::Serialize;
use serde_json::Value;

/// What a release did
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseOutcome {
    /// `released` or `no_action_needed`
    pub status: String,
    /// Human readable summary
    pub message: String,
    /// Ids of the deleted hold relationships
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub released_relationships: Vec<String>,
}

/// Tool deleting the hold relationship between a hold and an object
#[derive(Default)]
pub struct ReleaseAnObjectFromHoldTool;

impl ReleaseAnObjectFromHoldTool {
    /// Creates a new instance of the ReleaseAnObjectFromHoldTool
    pub fn new() -> Self {
        Self
    }
}

async fn release(context: &ToolContext, request: &ReleaseFromHoldRequest) -> Result<ReleaseOutcome> {
    BaseToolImpl::require_non_empty(&request.hold_id, "hold_id")?;
    BaseToolImpl::require_non_empty(&request.held_id, "held_id")?;

    let where_statement = relationship_where(&request.hold_id, Some(&request.held_id));
    let relationship_ids: Vec<String> = hold_relationships(context, &where_statement)
        .await?
        .iter()
        .filter_map(|properties| properties.get("Id").and_then(Value::as_str))
        .map(str::to_string)
        .collect();

    if relationship_ids.is_empty() {
        return Ok(ReleaseOutcome {
            status: "no_action_needed".to_string(),
            message: "No hold relationship found between the specified hold and held object."
                .to_string(),
            released_relationships: Vec::new(),
        });
    }

    for id in &relationship_ids {
        delete_object(context, HOLD_RELATIONSHIP_CLASS, id).await?;
    }
    Ok(ReleaseOutcome {
        status: "released".to_string(),
        message: format!(
            "Released {} from hold {}",
            request.held_id.trim(),
            request.hold_id.trim()
        ),
        released_relationships: relationship_ids,
    })
}

#[async_trait]
impl McpTool for ReleaseAnObjectFromHoldTool {
    fn name(&self) -> &'static str {
        "release_an_object_from_hold"
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
                "held_id": {
                    "type": "string",
                    "description": "Id of the held object"
                }
            },
            "required": ["hold_id", "held_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ReleaseFromHoldRequest = BaseToolImpl::parse_arguments(arguments)?;
        let result = release(context, &request).await;
        BaseToolImpl::respond(self.name(), result)
    }
}
