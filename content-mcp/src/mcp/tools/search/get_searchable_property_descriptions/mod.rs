//! Searchable property description tool

use crate::error::ContentMcpError;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ClassNameRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool returning the properties of a class that can appear in a search
#[derive(Default)]
pub struct GetSearchablePropertyDescriptionsTool;

impl GetSearchablePropertyDescriptionsTool {
    /// Creates a new instance of the GetSearchablePropertyDescriptionsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetSearchablePropertyDescriptionsTool {
    fn name(&self) -> &'static str {
        "get_searchable_property_descriptions"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "class_symbolic_name": {
                    "type": "string",
                    "description": "Symbolic name of the class to search"
                }
            },
            "required": ["class_symbolic_name"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ClassNameRequest = BaseToolImpl::parse_arguments(arguments)?;
        let class_name = request.class_symbolic_name.trim();
        let result = if class_name.is_empty() {
            Err(ContentMcpError::validation("class_symbolic_name is required"))
        } else {
            context.metadata.class_metadata(class_name).await.map(|class| {
                class
                    .property_descriptions
                    .into_iter()
                    .filter(|p| p.is_searchable)
                    .collect::<Vec<_>>()
            })
        };
        BaseToolImpl::respond(self.name(), result)
    }
}
