//! Search and lookup tools
//!
//! - **get_searchable_property_descriptions**: properties usable in conditions
//! - **repository_object_search**: property-based search of one class
//! - **lookup_documents_by_name**: fuzzy document lookup by name keywords
//! - **lookup_documents_by_path**: fuzzy document lookup by folder path keywords

pub mod get_searchable_property_descriptions;
pub mod lookup_documents_by_name;
pub mod lookup_documents_by_path;
pub mod repository_object_search;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all search tools with the registry
pub fn register_search_tools(registry: &mut ToolRegistry) {
    registry.register(
        get_searchable_property_descriptions::GetSearchablePropertyDescriptionsTool::new(),
    );
    registry.register(repository_object_search::RepositoryObjectSearchTool::new());
    registry.register(lookup_documents_by_name::LookupDocumentsByNameTool::new());
    registry.register(lookup_documents_by_path::LookupDocumentsByPathTool::new());
}
