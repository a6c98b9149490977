//! Root class listing tool

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::EmptyRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool listing the root class names
#[derive(Default)]
pub struct ListRootClassesTool;

impl ListRootClassesTool {
    /// Creates a new instance of the ListRootClassesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListRootClassesTool {
    fn name(&self) -> &'static str {
        "list_root_classes"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let _request: EmptyRequest = BaseToolImpl::parse_arguments(arguments)?;
        let roots = context.cache().read().await.get_root_class_keys();
        BaseToolImpl::create_success_response(&roots)
    }
}
