//! Legal hold tools
//!
//! A hold (`CmHold`) keeps objects from being deleted. Each held object is
//! linked to its hold by a `CmHoldRelationship`.

pub mod create_a_hold;
pub mod list_held_objects_for_a_hold;
pub mod list_holds_by_name;
pub mod put_an_object_on_hold;
pub mod release_an_object_from_hold;
pub mod remove_a_hold;

use crate::error::{ContentMcpError, Result};
use crate::graphql::{array_at, queries};
use crate::mcp::tool_registry::{ToolContext, ToolRegistry};
use crate::mcp::types::properties_map;
use serde_json::{json, Map, Value};

/// Class of hold objects
pub const HOLD_CLASS: &str = "CmHold";
/// Class linking a hold to a held object
pub const HOLD_RELATIONSHIP_CLASS: &str = "CmHoldRelationship";

/// Register all legal hold tools with the registry
pub fn register_hold_tools(registry: &mut ToolRegistry) {
    registry.register(create_a_hold::CreateAHoldTool::new());
    registry.register(list_holds_by_name::ListHoldsByNameTool::new());
    registry.register(put_an_object_on_hold::PutAnObjectOnHoldTool::new());
    registry.register(release_an_object_from_hold::ReleaseAnObjectFromHoldTool::new());
    registry.register(remove_a_hold::RemoveAHoldTool::new());
    registry.register(list_held_objects_for_a_hold::ListHeldObjectsForAHoldTool::new());
}

/// Where clause selecting the relationships of a hold, optionally narrowed
/// to one held object
pub(crate) fn relationship_where(hold_id: &str, held_id: Option<&str>) -> String {
    let mut clause = format!("[Hold] = Object({})", hold_id.trim());
    if let Some(held_id) = held_id {
        clause.push_str(&format!(" and [HeldObject] = Object({})", held_id.trim()));
    }
    clause
}

/// Properties of every hold relationship matching `where_statement`
pub(crate) async fn hold_relationships(
    context: &ToolContext,
    where_statement: &str,
) -> Result<Vec<Map<String, Value>>> {
    let data = context
        .repository
        .query(
            queries::HOLD_RELATIONSHIPS,
            json!({ "where_statement": where_statement }),
        )
        .await?;
    Ok(array_at(&data, "/repositoryObjects/independentObjects")
        .iter()
        .map(|object| object.get("properties").map(properties_map).unwrap_or_default())
        .collect())
}

/// Delete the `class_name` object with `identifier` through `changeObject`
pub(crate) async fn delete_object(
    context: &ToolContext,
    class_name: &str,
    identifier: &str,
) -> Result<Value> {
    let mut data = context
        .repository
        .query(
            queries::DELETE_OBJECT,
            json!({ "class_name": class_name, "identifier": identifier }),
        )
        .await?;
    match data.get_mut("changeObject").map(Value::take) {
        Some(node) if !node.is_null() => {
            tracing::info!("Deleted {} {}", class_name, identifier);
            Ok(node)
        }
        _ => Err(ContentMcpError::backend(format!(
            "Deleting {class_name} {identifier} returned no object"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_context, MockGraphqlExecutor};
    use std::sync::Arc;

    #[test]
    fn test_relationship_where() {
        assert_eq!(relationship_where("{H1}", None), "[Hold] = Object({H1})");
        assert_eq!(
            relationship_where(" {H1} ", Some("{D1}")),
            "[Hold] = Object({H1}) and [HeldObject] = Object({D1})"
        );
    }

    #[tokio::test]
    async fn test_hold_relationships_flattens_properties() {
        let mock = Arc::new(MockGraphqlExecutor::new().with_response(
            "getHoldRelationships",
            json!({"data": {"repositoryObjects": {"independentObjects": [{
                "className": "CmHoldRelationship",
                "properties": [
                    {"id": "Id", "value": "{R1}"},
                    {"id": "Hold", "value": {"identifier": "{H1}"}},
                    {"id": "HeldObject", "value": {"identifier": "{D1}"}}
                ]
            }]}}}),
        ));
        let context = create_test_context(mock);

        let relationships = hold_relationships(&context, "[Hold] = Object({H1})")
            .await
            .unwrap();

        assert_eq!(relationships.len(), 1);
        assert_eq!(relationships[0]["Id"], "{R1}");
        assert_eq!(relationships[0]["HeldObject"]["identifier"], "{D1}");
    }

    #[tokio::test]
    async fn test_delete_object_sends_class() {
        let mock = Arc::new(MockGraphqlExecutor::new().with_response(
            "deleteObject",
            json!({"data": {"changeObject": {
                "className": "CmHold",
                "objectReference": {"identifier": "{H1}"}
            }}}),
        ));
        let context = create_test_context(mock.clone());

        delete_object(&context, HOLD_CLASS, "{H1}").await.unwrap();

        let variables = mock.last_variables("deleteObject").unwrap();
        assert_eq!(variables["class_name"], "CmHold");
        assert_eq!(variables["identifier"], "{H1}");
    }
}
