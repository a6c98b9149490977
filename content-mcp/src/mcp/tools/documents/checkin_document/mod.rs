//! Document check-in tool

use super::{checkin_action_schema, document_properties_schema, fetch_node_with};
use crate::error::Result;
use crate::graphql::queries;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{CheckinDocumentRequest, ReservationView};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::Map;

/// Tool checking in a reservation as a new version
#[derive(Default)]
pub struct CheckinDocumentTool;

impl CheckinDocumentTool {
    /// Creates a new instance of the CheckinDocumentTool
    pub fn new() -> Self {
        Self
    }
}

async fn checkin(context: &ToolContext, request: &CheckinDocumentRequest) -> Result<ReservationView> {
    let mut variables = Map::new();
    if let Some(properties) = &request.document_properties {
        variables.insert("document_properties".to_string(), properties.to_input()?);
    }
    let action = request.checkin_action.clone().unwrap_or_default();
    variables.insert("checkin_action".to_string(), action.to_input());

    tracing::info!(
        "Checking in {} as a {} version",
        request.identifier,
        if action.checkin_minor_version { "minor" } else { "major" }
    );
    let node = fetch_node_with(
        context,
        &queries::checkin_document(),
        &request.identifier,
        "checkinDocument",
        variables,
    )
    .await?;
    ReservationView::from_node(&node)
}

#[async_trait]
impl McpTool for CheckinDocumentTool {
    fn name(&self) -> &'static str {
        "checkin_document"
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
                    "description": "Reservation id or document id"
                },
                "checkin_action": checkin_action_schema(),
                "document_properties": document_properties_schema()
            },
            "required": ["identifier"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CheckinDocumentRequest = BaseToolImpl::parse_arguments(arguments)?;
        let result = checkin(context, &request).await;
        BaseToolImpl::respond(self.name(), result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{arguments, create_test_context, result_json, MockGraphqlExecutor};
    use serde_json::json;
    use std::sync::Arc;

    fn checked_in() -> serde_json::Value {
        json!({"data": {"checkinDocument": {
            "id": "{R1}",
            "className": "Document",
            "reservation": null,
            "currentVersion": {"contentElements": [
                {"retrievalName": "lease.txt", "downloadUrl": "/content/9"}
            ]},
            "properties": [{"id": "MajorVersionNumber", "value": 2}]
        }}})
    }

    #[test]
    fn test_checkin_document_tool_schema() {
        let tool = CheckinDocumentTool::new();
        assert_eq!(tool.name(), "checkin_document");
        assert!(!tool.description().is_empty());
        assert_eq!(tool.schema()["required"], json!(["identifier"]));
    }

    #[tokio::test]
    async fn test_checks_in_major_version_by_default() {
        let mock = Arc::new(MockGraphqlExecutor::new().with_response("checkinDocument", checked_in()));
        let context = create_test_context(mock.clone());

        let result = CheckinDocumentTool::new()
            .execute(arguments(json!({"identifier": "{R1}"})), &context)
            .await
            .unwrap();

        let view = result_json(&result);
        assert_eq!(view["id"], "{R1}");
        assert_eq!(view["reservation"], serde_json::Value::Null);
        assert_eq!(view["content_elements"][0]["downloadUrl"], "/content/9");
        assert_eq!(view["properties"]["MajorVersionNumber"], 2);

        let variables = mock.last_variables("checkinDocument").unwrap();
        assert_eq!(variables["checkin_action"], json!({"checkinMinorVersion": false}));
        assert!(variables.get("document_properties").is_none());
    }

    #[tokio::test]
    async fn test_minor_version_with_properties() {
        let mock = Arc::new(MockGraphqlExecutor::new().with_response("checkinDocument", checked_in()));
        let context = create_test_context(mock.clone());

        CheckinDocumentTool::new()
            .execute(
                arguments(json!({
                    "identifier": "{R1}",
                    "checkin_action": {"checkin_minor_version": true},
                    "document_properties": {"content": "revised text", "mime_type": "text/plain"}
                })),
                &context,
            )
            .await
            .unwrap();

        let variables = mock.last_variables("checkinDocument").unwrap();
        assert_eq!(variables["checkin_action"]["checkinMinorVersion"], true);
        assert_eq!(variables["document_properties"]["content"], "revised text");
        assert_eq!(variables["document_properties"]["mimeType"], "text/plain");
    }

    #[tokio::test]
    async fn test_not_reserved_is_tool_error() {
        let mock = Arc::new(MockGraphqlExecutor::new().with_response(
            "checkinDocument",
            json!({"errors": [{"message": "The document is not checked out"}]}),
        ));
        let context = create_test_context(mock);

        let result = CheckinDocumentTool::new()
            .execute(arguments(json!({"identifier": "{D1}"})), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
    }
}
