//! Tool registry for MCP operations
//!
//! Every tool implements [`McpTool`] and is registered by name. The server
//! dispatches `call_tool` requests through the registry with a shared
//! [`ToolContext`].

use crate::error::{ContentMcpError, ToolError};
use crate::graphql::{GraphqlExecutor, Repository};
use crate::metadata::{MetadataCache, MetadataLoader};
use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent, Tool};
use rmcp::Error as McpError;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Context shared by all tools during execution
#[derive(Clone)]
pub struct ToolContext {
    /// Repository access bound to the configured object store
    pub repository: Repository,
    /// Class metadata loader over the shared cache
    pub metadata: MetadataLoader,
}

impl ToolContext {
    /// Create a tool context with an empty metadata cache
    pub fn new(executor: Arc<dyn GraphqlExecutor>, object_store: impl Into<String>) -> Self {
        let repository = Repository::new(executor, object_store);
        let metadata = MetadataLoader::new(
            repository.clone(),
            Arc::new(RwLock::new(MetadataCache::new())),
        );
        Self {
            repository,
            metadata,
        }
    }

    /// The shared metadata cache
    pub fn cache(&self) -> &Arc<RwLock<MetadataCache>> {
        self.metadata.cache()
    }
}

/// Trait defining the interface for all MCP tools
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool's name
    fn name(&self) -> &'static str;

    /// Get the tool's description
    fn description(&self) -> &'static str;

    /// Get the tool's JSON schema for arguments
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments and context
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Registry for managing MCP tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registry with every tool of the server
    pub fn with_all_tools() -> Self {
        let mut registry = Self::new();
        register_class_tools(&mut registry);
        register_search_tools(&mut registry);
        register_document_tools(&mut registry);
        register_folder_tools(&mut registry);
        register_annotation_tools(&mut registry);
        register_hold_tools(&mut registry);
        registry
    }

    /// Register a tool in the registry
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Box::new(tool));
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// List all registered tool names, sorted
    pub fn list_tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get all registered tools as Tool objects for MCP list_tools response
    pub fn list_tools(&self) -> Vec<Tool> {
        self.list_tool_names()
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| {
                let schema_map = match tool.schema() {
                    serde_json::Value::Object(map) => map,
                    _ => serde_json::Map::new(),
                };

                Tool {
                    name: tool.name().into(),
                    description: Some(tool.description().into()),
                    input_schema: Arc::new(schema_map),
                    annotations: None,
                }
            })
            .collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Base implementation providing common utility methods for MCP tools
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed struct
    ///
    /// Malformed arguments are an MCP `invalid_params` error rather than a
    /// tool failure.
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<T, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {e}"), None))
    }

    fn text_result(text: String, is_error: bool) -> CallToolResult {
        CallToolResult {
            content: vec![Annotated::new(RawContent::Text(RawTextContent { text }), None)],
            is_error: Some(is_error),
        }
    }

    /// Create a success response carrying `value` as JSON text
    pub fn create_success_response<T: Serialize>(
        value: &T,
    ) -> std::result::Result<CallToolResult, McpError> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(format!("Failed to serialize result: {e}"), None))?;
        Ok(Self::text_result(text, false))
    }

    /// Create an error response carrying a [`ToolError`] payload
    pub fn create_error_response(error: &ToolError) -> CallToolResult {
        let text = serde_json::to_string_pretty(error).unwrap_or_else(|_| error.message.clone());
        Self::text_result(text, true)
    }

    /// Turn a tool outcome into a `CallToolResult`
    ///
    /// Failures become a `ToolError` payload with `is_error` set; they are
    /// never returned as protocol errors.
    pub fn respond_with<T: Serialize>(
        tool: &str,
        result: std::result::Result<T, ToolError>,
    ) -> std::result::Result<CallToolResult, McpError> {
        match result {
            Ok(value) => Self::create_success_response(&value),
            Err(error) => {
                tracing::error!("{} failed: {}", tool, error.message);
                Ok(Self::create_error_response(&error))
            }
        }
    }

    /// [`BaseToolImpl::respond_with`] using the default suggestions of each
    /// error kind
    pub fn respond<T: Serialize>(
        tool: &str,
        result: crate::error::Result<T>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Self::respond_with(tool, result.map_err(ToolError::from))
    }

    /// Reject a blank string argument
    pub fn require_non_empty(value: &str, field: &str) -> crate::error::Result<()> {
        if value.trim().is_empty() {
            return Err(ContentMcpError::validation(format!("{field} is required")));
        }
        Ok(())
    }
}

/// Register the class metadata tools
pub fn register_class_tools(registry: &mut ToolRegistry) {
    crate::mcp::tools::classes::register_class_tools(registry);
}

/// Register the search and lookup tools
pub fn register_search_tools(registry: &mut ToolRegistry) {
    crate::mcp::tools::search::register_search_tools(registry);
}

/// Register the document tools
pub fn register_document_tools(registry: &mut ToolRegistry) {
    crate::mcp::tools::documents::register_document_tools(registry);
}

/// Register the folder tools
pub fn register_folder_tools(registry: &mut ToolRegistry) {
    crate::mcp::tools::folders::register_folder_tools(registry);
}

/// Register the annotation tools
pub fn register_annotation_tools(registry: &mut ToolRegistry) {
    crate::mcp::tools::annotations::register_annotation_tools(registry);
}

/// Register the legal hold tools
pub fn register_hold_tools(registry: &mut ToolRegistry) {
    crate::mcp::tools::holds::register_hold_tools(registry);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock tool for testing
    struct MockTool {
        name: &'static str,
        description: &'static str,
    }

    #[async_trait::async_trait]
    impl McpTool for MockTool {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            self.description
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
            _arguments: serde_json::Map<String, serde_json::Value>,
            _context: &ToolContext,
        ) -> std::result::Result<CallToolResult, McpError> {
            BaseToolImpl::create_success_response(&format!("Mock tool {} executed", self.name))
        }
    }

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_tool_registry_creation() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_tool_registration_and_lookup() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "test_tool",
            description: "A test tool",
        });

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_tool("test_tool").unwrap().name(), "test_tool");
        assert!(registry.get_tool("nonexistent").is_none());
    }

    #[test]
    fn test_list_tools_sorted_with_schema() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "zeta",
            description: "Z",
        });
        registry.register(MockTool {
            name: "alpha",
            description: "A",
        });

        let tools = registry.list_tools();
        assert_eq!(tools[0].name, "alpha");
        assert_eq!(tools[1].name, "zeta");
        assert_eq!(tools[0].input_schema["type"], "object");
    }

    #[test]
    fn test_all_tools_registered() {
        let registry = ToolRegistry::with_all_tools();
        assert_eq!(registry.len(), 32);
        for name in [
            "create_document",
            "update_document_properties",
            "update_document_class",
            "checkin_document",
            "get_class_specific_properties_name",
            "update_folder",
        ] {
            assert!(registry.get_tool(name).is_some(), "{name} not registered");
        }
        for tool in registry.list_tools() {
            assert!(tool.description.is_some_and(|d| !d.trim().is_empty()));
        }
    }

    #[test]
    fn test_parse_arguments_invalid_params() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Args {
            identifier: String,
        }
        let err = BaseToolImpl::parse_arguments::<Args>(serde_json::Map::new()).unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_respond_error_payload() {
        let result: crate::error::Result<()> =
            Err(ContentMcpError::not_found("Class 'Nope' not found"));
        let response = BaseToolImpl::respond("demo", result).unwrap();

        assert_eq!(response.is_error, Some(true));
        let payload: serde_json::Value = serde_json::from_str(&text_of(&response)).unwrap();
        assert_eq!(payload["isError"], true);
        assert_eq!(payload["message"], "Class 'Nope' not found");
        assert!(!payload["suggestions"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_respond_success_payload() {
        let response = BaseToolImpl::respond("demo", Ok(vec!["Document"])).unwrap();
        assert_eq!(response.is_error, Some(false));
        let payload: serde_json::Value = serde_json::from_str(&text_of(&response)).unwrap();
        assert_eq!(payload, serde_json::json!(["Document"]));
    }
}
