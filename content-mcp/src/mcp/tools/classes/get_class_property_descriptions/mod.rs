//! Class property description tool

use crate::error::ContentMcpError;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ClassNameRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool returning the property descriptions of a class
#[derive(Default)]
pub struct GetClassPropertyDescriptionsTool;

impl GetClassPropertyDescriptionsTool {
    /// Creates a new instance of the GetClassPropertyDescriptionsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetClassPropertyDescriptionsTool {
    fn name(&self) -> &'static str {
        "get_class_property_descriptions"
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
                    "description": "Symbolic name of the class"
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
            context
                .metadata
                .class_metadata(class_name)
                .await
                .map(|class| class.property_descriptions)
        };
        BaseToolImpl::respond(self.name(), result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        arguments, create_test_context, result_json, with_document_classes, MockGraphqlExecutor,
    };
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_get_class_property_descriptions_tool_schema() {
        let tool = GetClassPropertyDescriptionsTool::new();
        assert_eq!(tool.name(), "get_class_property_descriptions");
        assert!(!tool.description().is_empty());
        assert_eq!(tool.schema()["required"], json!(["class_symbolic_name"]));
    }

    #[tokio::test]
    async fn test_returns_all_properties_and_caches() {
        let mock = Arc::new(with_document_classes(MockGraphqlExecutor::new()));
        let context = create_test_context(mock.clone());
        let tool = GetClassPropertyDescriptionsTool::new();

        for _ in 0..2 {
            let result = tool
                .execute(arguments(json!({"class_symbolic_name": "Document"})), &context)
                .await
                .unwrap();
            let properties = result_json(&result);
            assert_eq!(properties.as_array().unwrap().len(), 3);
            assert_eq!(properties[0]["symbolic_name"], "DocumentTitle");
            assert_eq!(properties[1]["data_type"], "DOUBLE");
        }
        assert_eq!(mock.call_count("getClassMetadataWithSuperclasses"), 1);
    }

    #[tokio::test]
    async fn test_unknown_class_is_tool_error() {
        let mock = Arc::new(MockGraphqlExecutor::new().with_response(
            "getClassMetadataWithSuperclasses",
            json!({"data": {"classDescription": null}}),
        ));
        let context = create_test_context(mock);

        let result = GetClassPropertyDescriptionsTool::new()
            .execute(arguments(json!({"class_symbolic_name": "Nope"})), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_json(&result)["message"], "Class 'Nope' not found");
    }
}
