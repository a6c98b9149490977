//! MCP server implementation exposing the repository tools

use crate::config::ServerConfig;
use crate::error::Result;
use crate::graphql::{GraphqlExecutor, HttpGraphqlClient};
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

use super::tool_registry::{ToolContext, ToolRegistry};

const SERVER_NAME: &str = "content-mcp";

const INSTRUCTIONS: &str = "Tools for a content repository. Resolve what the user \
describes before acting: use list_root_classes, determine_class and \
get_class_property_descriptions to find classes and properties, \
lookup_documents_by_name or lookup_documents_by_path to find documents, and \
repository_object_search for property-based searches. Document, folder, \
annotation and legal hold tools take the ids those lookups return.";

/// MCP server for the content repository
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<ToolRegistry>,
    /// Tool context containing shared state for tool execution
    pub tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a server over an existing tool context with every tool
    /// registered
    pub fn new(tool_context: ToolContext) -> Self {
        Self {
            tool_registry: Arc::new(ToolRegistry::with_all_tools()),
            tool_context: Arc::new(tool_context),
        }
    }

    /// Create a server talking to the repository described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let client: Arc<dyn GraphqlExecutor> = Arc::new(HttpGraphqlClient::new(config)?);
        tracing::info!(
            "Serving object store {} at {}",
            config.object_store,
            config.server_url
        );
        Ok(Self::new(ToolContext::new(client, config.object_store.clone())))
    }

    /// The registered tools
    pub fn tool_registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    /// Dispatch a tool call by name
    ///
    /// Unknown tools are rejected with `invalid_request`.
    pub async fn call_tool_by_name(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<CallToolResult, McpError> {
        match self.tool_registry.get_tool(name) {
            Some(tool) => {
                tracing::info!("Calling tool {}", name);
                tool.execute(arguments, &self.tool_context).await
            }
            None => Err(McpError::invalid_request(
                format!("Unknown tool: {name}"),
                None,
            )),
        }
    }

    fn capabilities() -> ServerCapabilities {
        ServerCapabilities {
            prompts: None,
            tools: Some(ToolsCapability {
                list_changed: Some(true),
            }),
            resources: None,
            logging: None,
            completions: None,
            experimental: None,
        }
    }

    fn implementation() -> Implementation {
        Implementation {
            name: SERVER_NAME.into(),
            version: crate::VERSION.into(),
        }
    }
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );

        Ok(InitializeResult {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            instructions: Some(INSTRUCTIONS.into()),
            server_info: Self::implementation(),
        })
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.call_tool_by_name(&request.name, request.arguments.unwrap_or_default())
            .await
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Self::implementation(),
            instructions: Some(INSTRUCTIONS.into()),
        }
    }
}
