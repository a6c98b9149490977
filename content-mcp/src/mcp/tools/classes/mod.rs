//! Class metadata tools
//!
//! These tools let the agent resolve what the user calls a "kind" of object
//! to a concrete repository class before searching or creating anything:
//!
//! - **list_root_classes**: the root classes every class descends from
//! - **list_all_classes**: the classes cached under one root
//! - **determine_class**: fuzzy-match keywords to the classes of a root
//! - **get_class_property_descriptions**: the properties of one class

pub mod determine_class;
pub mod get_class_property_descriptions;
pub mod list_all_classes;
pub mod list_root_classes;

use crate::error::{ContentMcpError, ToolError};
use crate::mcp::tool_registry::{ToolContext, ToolRegistry};
use crate::metadata::RootClass;

/// Register all class metadata tools with the registry
pub fn register_class_tools(registry: &mut ToolRegistry) {
    registry.register(list_root_classes::ListRootClassesTool::new());
    registry.register(list_all_classes::ListAllClassesTool::new());
    registry.register(determine_class::DetermineClassTool::new());
    registry.register(get_class_property_descriptions::GetClassPropertyDescriptionsTool::new());
}

/// Parse a root class argument against the cached root names
pub(crate) async fn resolve_root_class(
    root_class: &str,
    context: &ToolContext,
) -> std::result::Result<RootClass, ToolError> {
    let known_roots = context.cache().read().await.get_root_class_keys();
    root_class.trim().parse::<RootClass>().map_err(|_| {
        ToolError::from(ContentMcpError::validation(format!(
            "Invalid root class '{}'. Root class must be one of: {}",
            root_class,
            known_roots.join(", ")
        )))
        .with_suggestions(["Use list_root_classes tool first to get valid root class names"])
    })
}
