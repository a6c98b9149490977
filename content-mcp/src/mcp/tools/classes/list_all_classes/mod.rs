//! Class listing tool for one root class

use super::resolve_root_class;
use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::RootClassRequest;
use crate::metadata::{ClassSummary, RootClass};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool listing every cached class under a root class
#[derive(Default)]
pub struct ListAllClassesTool;

impl ListAllClassesTool {
    /// Creates a new instance of the ListAllClassesTool
    pub fn new() -> Self {
        Self
    }

    async fn list(&self, root: RootClass, context: &ToolContext) -> Result<Vec<ClassSummary>> {
        context.metadata.populate_root_bucket(root).await?;

        let cache = context.cache().read().await;
        let mut summaries: Vec<ClassSummary> = cache
            .get_all_keys_for_root(root.as_str())
            .iter()
            .filter_map(|name| cache.get_class_data(root.as_str(), name))
            .map(|class| class.summary())
            .collect();
        summaries.sort_by(|a, b| a.symbolic_name.cmp(&b.symbolic_name));
        Ok(summaries)
    }
}

#[async_trait]
impl McpTool for ListAllClassesTool {
    fn name(&self) -> &'static str {
        "list_all_classes"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "root_class": {
                    "type": "string",
                    "description": "Root class name as returned by list_root_classes"
                }
            },
            "required": ["root_class"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: RootClassRequest = BaseToolImpl::parse_arguments(arguments)?;
        let root = match resolve_root_class(&request.root_class, context).await {
            Ok(root) => root,
            Err(error) => return BaseToolImpl::respond_with::<()>(self.name(), Err(error)),
        };
        BaseToolImpl::respond(self.name(), self.list(root, context).await)
    }
}
