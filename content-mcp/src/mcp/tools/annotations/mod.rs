//! Annotation tools

pub mod get_document_annotations;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all annotation tools with the registry
pub fn register_annotation_tools(registry: &mut ToolRegistry) {
    registry.register(get_document_annotations::GetDocumentAnnotationsTool::new());
}
