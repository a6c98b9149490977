//! Document tools
//!
//! Documents are addressed by id (`{GUID}`) or by path. The tools read
//! properties, versions and text extracts, create and update documents,
//! manage reservations, and delete versions or whole version series.

pub mod cancel_document_checkout;
pub mod checkin_document;
pub mod checkout_document;
pub mod create_document;
pub mod delete_document_version;
pub mod delete_version_series;
pub mod get_class_specific_properties_name;
pub mod get_document_properties;
pub mod get_document_text_extract;
pub mod get_document_versions;
pub mod update_document_class;
pub mod update_document_properties;

use crate::error::{ContentMcpError, Result};
use crate::mcp::tool_registry::{ToolContext, ToolRegistry};
use serde_json::{json, Map, Value};

pub(crate) const DEFAULT_DOCUMENT_CLASS: &str = "Document";

/// Register all document tools with the registry
pub fn register_document_tools(registry: &mut ToolRegistry) {
    registry.register(get_document_properties::GetDocumentPropertiesTool::new());
    registry.register(get_document_versions::GetDocumentVersionsTool::new());
    registry.register(get_document_text_extract::GetDocumentTextExtractTool::new());
    registry.register(
        get_class_specific_properties_name::GetClassSpecificPropertiesNameTool::new(),
    );
    registry.register(create_document::CreateDocumentTool::new());
    registry.register(update_document_properties::UpdateDocumentPropertiesTool::new());
    registry.register(update_document_class::UpdateDocumentClassTool::new());
    registry.register(checkout_document::CheckoutDocumentTool::new());
    registry.register(checkin_document::CheckinDocumentTool::new());
    registry.register(cancel_document_checkout::CancelDocumentCheckoutTool::new());
    registry.register(delete_document_version::DeleteDocumentVersionTool::new());
    registry.register(delete_version_series::DeleteVersionSeriesTool::new());
}

/// Run `query` for `identifier` and take the node under `field`
///
/// A null node means the repository has no such object.
pub(crate) async fn fetch_node(
    context: &ToolContext,
    query: &str,
    identifier: &str,
    field: &str,
) -> Result<Value> {
    fetch_node_with(context, query, identifier, field, Map::new()).await
}

/// [`fetch_node`] with further variables next to `identifier`
pub(crate) async fn fetch_node_with(
    context: &ToolContext,
    query: &str,
    identifier: &str,
    field: &str,
    mut variables: Map<String, Value>,
) -> Result<Value> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(ContentMcpError::validation("identifier is required"));
    }
    variables.insert("identifier".to_string(), json!(identifier));
    let mut data = context
        .repository
        .query(query, Value::Object(variables))
        .await?;
    match data.get_mut(field).map(Value::take) {
        Some(node) if !node.is_null() => Ok(node),
        _ => Err(ContentMcpError::not_found(format!(
            "Document not found with identifier: {identifier}"
        ))),
    }
}

/// Input schema shared by the tools taking `document_properties`
pub(crate) fn document_properties_schema() -> Value {
    json!({
        "type": "object",
        "description": "Properties to set on the document",
        "properties": {
            "name": {"type": "string", "description": "Document title"},
            "owner": {"type": "string"},
            "content": {"type": "string", "description": "Inline text content"},
            "mime_type": {"type": "string"},
            "properties": {
                "type": "array",
                "description": "Class properties to set",
                "items": {
                    "type": "object",
                    "properties": {
                        "identifier": {"type": "string", "description": "Property symbolic name"},
                        "value": {"description": "New value, null clears it"}
                    },
                    "required": ["identifier"]
                }
            }
        }
    })
}

/// Input schema shared by the tools taking `checkin_action`
pub(crate) fn checkin_action_schema() -> Value {
    json!({
        "type": "object",
        "description": "Check-in options",
        "properties": {
            "checkin_minor_version": {
                "type": "boolean",
                "description": "Check in a minor version (defaults to false)"
            },
            "auto_classify": {"type": "boolean"}
        }
    })
}

/// Id of the object a delete mutation returned under `field`
pub(crate) async fn delete_by_identifier(
    context: &ToolContext,
    mutation: &str,
    identifier: &str,
    field: &str,
) -> Result<String> {
    let node = fetch_node(context, mutation, identifier, field).await?;
    let id = node
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or(identifier.trim())
        .to_string();
    tracing::info!("Deleted {} via {}", id, field);
    Ok(id)
}
