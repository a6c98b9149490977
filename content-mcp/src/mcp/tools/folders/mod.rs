//! Folder tools
//!
//! Folders are addressed by id (`{GUID}`) or by path (`/Contracts/2024`).

pub mod create_folder;
pub mod delete_folder;
pub mod get_folder_documents;
pub mod unfile_document;
pub mod update_folder;

use crate::error::{ContentMcpError, Result};
use crate::graphql::queries;
use crate::mcp::tool_registry::{ToolContext, ToolRegistry};
use serde_json::{json, Value};

/// Register all folder tools with the registry
pub fn register_folder_tools(registry: &mut ToolRegistry) {
    registry.register(create_folder::CreateFolderTool::new());
    registry.register(update_folder::UpdateFolderTool::new());
    registry.register(delete_folder::DeleteFolderTool::new());
    registry.register(get_folder_documents::GetFolderDocumentsTool::new());
    registry.register(unfile_document::UnfileDocumentTool::new());
}

/// Whether `value` is an object id rather than a path
pub(crate) fn is_object_id(value: &str) -> bool {
    value.starts_with('{') && value.ends_with('}')
}

/// Run a folder query for `id_or_path` and take the node under `field`
pub(crate) async fn fetch_folder_node(
    context: &ToolContext,
    query: &str,
    id_or_path: &str,
    field: &str,
) -> Result<Value> {
    let identifier = id_or_path.trim();
    if identifier.is_empty() {
        return Err(ContentMcpError::validation("folder id or path is required"));
    }
    let mut data = context
        .repository
        .query(query, json!({ "identifier": identifier }))
        .await?;
    match data.get_mut(field).map(Value::take) {
        Some(node) if !node.is_null() => Ok(node),
        _ => Err(ContentMcpError::not_found(format!(
            "Folder not found: {identifier}"
        ))),
    }
}

/// Id of the folder at `id_or_path`, querying the repository for paths
pub(crate) async fn resolve_folder_id(context: &ToolContext, id_or_path: &str) -> Result<String> {
    let identifier = id_or_path.trim();
    if is_object_id(identifier) {
        return Ok(identifier.to_string());
    }
    let node = fetch_folder_node(context, queries::FOLDER_ID, identifier, "folder").await?;
    node.get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ContentMcpError::Internal(format!("folder {identifier} has no id")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_context, MockGraphqlExecutor};
    use std::sync::Arc;

    #[test]
    fn test_is_object_id() {
        assert!(is_object_id("{0F1E2D3C-0000-0000-0000-000000000000}"));
        assert!(!is_object_id("/Contracts/2024"));
        assert!(!is_object_id("{unterminated"));
    }

    #[tokio::test]
    async fn test_resolve_folder_id_passes_ids_through() {
        let mock = Arc::new(MockGraphqlExecutor::new());
        let context = create_test_context(mock.clone());

        let id = resolve_folder_id(&context, " {F1} ").await.unwrap();

        assert_eq!(id, "{F1}");
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_resolve_folder_id_queries_paths() {
        let mock = Arc::new(MockGraphqlExecutor::new().with_response(
            "folderId",
            json!({"data": {"folder": {"id": "{F2}"}}}),
        ));
        let context = create_test_context(mock);

        let id = resolve_folder_id(&context, "/Contracts").await.unwrap();

        assert_eq!(id, "{F2}");
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let mock = Arc::new(
            MockGraphqlExecutor::new()
                .with_response("folderId", json!({"data": {"folder": null}})),
        );
        let context = create_test_context(mock);

        let err = resolve_folder_id(&context, "/Missing").await.unwrap_err();

        assert!(matches!(err, ContentMcpError::NotFound(_)));
    }
}
