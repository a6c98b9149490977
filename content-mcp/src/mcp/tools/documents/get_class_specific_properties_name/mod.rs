//! Class-specific property name tool

use super::fetch_node;
use crate::error::{ContentMcpError, Result};
use crate::graphql::queries;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::IdentifierRequest;
use crate::metadata::{Cardinality, DataType, PropertyDescriptor};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::Value;

/// Properties the repository maintains for indexing, never set by users
const EXCLUDED_PROPERTY_NAMES: &[&str] = &["GenaiDateIndexed", "GenaiWatsonxSummary"];

/// Tool listing the user-settable properties of a document's class
#[derive(Default)]
pub struct GetClassSpecificPropertiesNameTool;

impl GetClassSpecificPropertiesNameTool {
    /// Creates a new instance of the GetClassSpecificPropertiesNameTool
    pub fn new() -> Self {
        Self
    }
}

fn is_user_property(property: &PropertyDescriptor) -> bool {
    !matches!(property.data_type, DataType::Object | DataType::Binary)
        && property.cardinality != Cardinality::Enum
        && !EXCLUDED_PROPERTY_NAMES.contains(&property.symbolic_name.as_str())
        && !property.is_system_owned
        && !property.is_hidden
}

async fn class_property_names(context: &ToolContext, identifier: &str) -> Result<Vec<String>> {
    let document = fetch_node(context, queries::DOCUMENT_CLASS_NAME, identifier, "document").await?;
    let class_name = document
        .get("className")
        .and_then(Value::as_str)
        .ok_or_else(|| ContentMcpError::Internal("document without className".to_string()))?;
    tracing::debug!("Document {} has class {}", identifier, class_name);

    let class = context.metadata.class_metadata(class_name).await?;
    Ok(class
        .property_descriptions
        .iter()
        .filter(|property| is_user_property(property))
        .map(|property| property.display_name.clone())
        .collect())
}

#[async_trait]
impl McpTool for GetClassSpecificPropertiesNameTool {
    fn name(&self) -> &'static str {
        "get_class_specific_properties_name"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "identifier": {
                    "type": "string",
                    "description": "Document id or path"
                }
            },
            "required": ["identifier"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: IdentifierRequest = BaseToolImpl::parse_arguments(arguments)?;
        let result = class_property_names(context, &request.identifier).await;
        BaseToolImpl::respond(self.name(), result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{arguments, create_test_context, result_json, MockGraphqlExecutor};
    use serde_json::json;
    use std::sync::Arc;

    fn property(symbolic_name: &str, data_type: &str, cardinality: &str) -> Value {
        json!({
            "symbolicName": symbolic_name,
            "displayName": format!("{symbolic_name} Label"),
            "dataType": data_type,
            "cardinality": cardinality,
            "isSearchable": true
        })
    }

    fn contract_class() -> Value {
        let mut system = property("DateCreated", "DATE", "SINGLE");
        system["isSystemOwned"] = json!(true);
        let mut hidden = property("Secret", "STRING", "SINGLE");
        hidden["isHidden"] = json!(true);
        json!({"data": {"classDescription": {
            "symbolicName": "Contract",
            "displayName": "Contract",
            "descriptiveText": "",
            "propertyDescriptions": [
                property("DocumentTitle", "STRING", "SINGLE"),
                system,
                hidden,
                property("Counterparty", "OBJECT", "SINGLE"),
                property("Thumbnail", "BINARY", "SINGLE"),
                property("Approvers", "STRING", "ENUM"),
                property("GenaiDateIndexed", "DATE", "SINGLE"),
                property("ExpiryDate", "DATE", "SINGLE"),
                property("Parties", "STRING", "LIST")
            ],
            "superClassDescription": {"symbolicName": "Document", "superClassDescription": null}
        }}})
    }

    fn document_bucket() -> Value {
        json!({"data": {
            "classDescription": {"symbolicName": "Document", "displayName": "Document"},
            "subClassDescriptions": {"classDescriptions": [
                {"symbolicName": "Contract", "displayName": "Contract"}
            ]}
        }})
    }

    #[test]
    fn test_get_class_specific_properties_name_tool_schema() {
        let tool = GetClassSpecificPropertiesNameTool::new();
        assert_eq!(tool.name(), "get_class_specific_properties_name");
        assert!(!tool.description().is_empty());
        assert_eq!(tool.schema()["required"], json!(["identifier"]));
    }

    #[tokio::test]
    async fn test_lists_user_settable_properties() {
        let mock = Arc::new(
            MockGraphqlExecutor::new()
                .with_response(
                    "getDocumentClassName",
                    json!({"data": {"document": {"className": "Contract"}}}),
                )
                .with_response("getClassMetadataWithSuperclasses", contract_class())
                .with_response("getClassAndSubclasses", document_bucket()),
        );
        let context = create_test_context(mock.clone());

        let result = GetClassSpecificPropertiesNameTool::new()
            .execute(arguments(json!({"identifier": "/Contracts/Lease"})), &context)
            .await
            .unwrap();

        assert_eq!(
            result_json(&result),
            json!(["DocumentTitle Label", "ExpiryDate Label", "Parties Label"])
        );
        assert_eq!(
            mock.last_variables("getClassMetadataWithSuperclasses").unwrap()["class_symbolic_name"],
            "Contract"
        );
    }

    #[tokio::test]
    async fn test_missing_document_is_tool_error() {
        let mock = Arc::new(
            MockGraphqlExecutor::new()
                .with_response("getDocumentClassName", json!({"data": {"document": null}})),
        );
        let context = create_test_context(mock.clone());

        let result = GetClassSpecificPropertiesNameTool::new()
            .execute(arguments(json!({"identifier": "{D404}"})), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(mock.call_count("getClassMetadataWithSuperclasses"), 0);
    }
}
