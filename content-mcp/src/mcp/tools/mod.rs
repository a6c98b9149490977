//! MCP tools, one module per tool
//!
//! Tools are grouped by the repository area they work on. Each tool module
//! carries its `description.md`, shown to the agent in `list_tools`.

pub mod annotations;
pub mod classes;
pub mod documents;
pub mod folders;
pub mod holds;
pub mod search;
