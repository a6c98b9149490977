//! Model Context Protocol (MCP) server support
//!
//! The server exposes the repository tools over MCP. Each tool lives in its
//! own module under [`tools`] and is registered in the [`ToolRegistry`].

pub mod server;
pub mod tool_registry;
pub mod tools;
pub mod types;

pub use server::McpServer;
pub use tool_registry::{
    register_annotation_tools, register_class_tools, register_document_tools,
    register_folder_tools, register_hold_tools, register_search_tools, BaseToolImpl, McpTool,
    ToolContext, ToolRegistry,
};
