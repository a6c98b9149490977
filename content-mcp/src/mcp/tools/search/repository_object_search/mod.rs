//! Property-based repository search tool

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::RepositoryObjectSearchRequest;
use crate::search::search_repository_objects;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool searching objects of a class by property conditions
#[derive(Default)]
pub struct RepositoryObjectSearchTool;

impl RepositoryObjectSearchTool {
    /// Creates a new instance of the RepositoryObjectSearchTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for RepositoryObjectSearchTool {
    fn name(&self) -> &'static str {
        "repository_object_search"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "search_parameters": {
                    "type": "object",
                    "properties": {
                        "search_class": {
                            "type": "string",
                            "description": "Symbolic name of the class to search"
                        },
                        "search_properties": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "property_name": {"type": "string"},
                                    "property_value": {"type": "string"},
                                    "operator": {
                                        "type": "string",
                                        "enum": ["=", ">", "<", ">=", "<=", "!=", "CONTAINS", "STARTS", "ENDS"]
                                    }
                                },
                                "required": ["property_name", "property_value", "operator"]
                            }
                        }
                    },
                    "required": ["search_class"]
                }
            },
            "required": ["search_parameters"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: RepositoryObjectSearchRequest = BaseToolImpl::parse_arguments(arguments)?;
        tracing::info!(
            "Searching class {} with {} conditions",
            request.search_parameters.search_class,
            request.search_parameters.search_properties.len()
        );
        let result = search_repository_objects(
            &context.repository,
            &context.metadata,
            &request.search_parameters,
        )
        .await;
        BaseToolImpl::respond(self.name(), result)
    }
}
