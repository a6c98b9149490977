//! # content-mcp
//!
//! MCP tools for a content repository reached over GraphQL.
//!
//! ## Features
//!
//! - **Class metadata**: list the classes under each root class, rank them
//!   against keywords and describe their properties
//! - **Search**: build `where` clauses from typed conditions and look
//!   documents up by name or by folder path
//! - **Documents and folders**: properties, versions, text extracts,
//!   reservations, filing and deletion
//! - **Legal holds**: create holds, place objects on them and release them
//! - **MCP Support**: every operation is an MCP tool served by [`McpServer`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use content_mcp::{McpServer, ServerConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let server = McpServer::from_config(&config)?;
//! println!("{} tools", server.tool_registry().len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Shared helpers
pub mod common;

/// Environment-driven configuration
pub mod config;

/// Error types
pub mod error;

/// GraphQL transport and query documents
pub mod graphql;

/// Keyword similarity and ranking
pub mod matching;

/// Model Context Protocol (MCP) server support
pub mod mcp;

/// Class metadata cache and loader
pub mod metadata;

/// Search clause building and document lookup
pub mod search;

pub use config::ServerConfig;
pub use error::{ContentMcpError, Result, ToolError};
pub use graphql::{GraphqlExecutor, HttpGraphqlClient, Repository};
pub use mcp::{McpServer, McpTool, ToolContext, ToolRegistry};
pub use metadata::{
    ClassDescriptor, ClassSummary, DataType, MetadataCache, MetadataLoader, PropertyDescriptor,
    RootClass,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClassDescriptor, ClassSummary, ContentMcpError, GraphqlExecutor, HttpGraphqlClient,
        McpServer, MetadataLoader, PropertyDescriptor, Repository, Result, RootClass,
        ServerConfig, ToolContext, ToolError,
    };

    pub use crate::search::{SearchOperator, SearchParameters, SearchProperty};
}

/// Test utilities module for testing support
#[doc(hidden)]
pub mod test_utils;
