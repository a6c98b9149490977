//! Hold lookup tool

use crate::error::Result;
use crate::graphql::{array_at, queries};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{ListHoldsRequest, ObjectView};
use crate::search::where_clause::quote_literal;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::json;

/// Tool finding holds by display name
#[derive(Default)]
pub struct ListHoldsByNameTool;

impl ListHoldsByNameTool {
    /// Creates a new instance of the ListHoldsByNameTool
    pub fn new() -> Self {
        Self
    }
}

/// Case-insensitive substring match on `DisplayName`
fn display_name_where(name: &str) -> String {
    format!(
        "LOWER([DisplayName]) LIKE LOWER({})",
        quote_literal(&format!("%{}%", name.trim()))
    )
}

async fn holds_by_name(context: &ToolContext, name: &str) -> Result<Vec<ObjectView>> {
    BaseToolImpl::require_non_empty(name, "hold_display_name")?;
    let data = context
        .repository
        .query(
            queries::HOLDS_BY_NAME,
            json!({ "where_statement": display_name_where(name) }),
        )
        .await?;
    array_at(&data, "/repositoryObjects/independentObjects")
        .iter()
        .map(ObjectView::from_node)
        .collect()
}

#[async_trait]
impl McpTool for ListHoldsByNameTool {
    fn name(&self) -> &'static str {
        "list_holds_by_name"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "hold_display_name": {
                    "type": "string",
                    "description": "Text contained in the hold's display name"
                }
            },
            "required": ["hold_display_name"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ListHoldsRequest = BaseToolImpl::parse_arguments(arguments)?;
        let result = holds_by_name(context, &request.hold_display_name).await;
        BaseToolImpl::respond(self.name(), result)
    }
}
