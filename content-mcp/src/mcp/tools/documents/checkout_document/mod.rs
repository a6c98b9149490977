//! Document checkout tool

use super::fetch_node;
use crate::graphql::queries;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{IdentifierRequest, ReservationView};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool reserving a document for editing
#[derive(Default)]
pub struct CheckoutDocumentTool;

impl CheckoutDocumentTool {
    /// Creates a new instance of the CheckoutDocumentTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CheckoutDocumentTool {
    fn name(&self) -> &'static str {
        "checkout_document"
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
        tracing::info!("Checking out document {}", request.identifier);
        let result = fetch_node(
            context,
            &queries::checkout_document(),
            &request.identifier,
            "checkoutDocument",
        )
        .await
        .and_then(|node| ReservationView::from_node(&node));
        BaseToolImpl::respond(self.name(), result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{arguments, create_test_context, result_json, MockGraphqlExecutor};
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_checkout_document_tool_schema() {
        let tool = CheckoutDocumentTool::new();
        assert_eq!(tool.name(), "checkout_document");
        assert!(!tool.description().is_empty());
        assert_eq!(tool.schema()["required"], json!(["identifier"]));
    }

    #[tokio::test]
    async fn test_returns_reservation() {
        let mock = Arc::new(MockGraphqlExecutor::new().with_response(
            "checkoutDocument",
            json!({"data": {"checkoutDocument": {
                "id": "{D1}",
                "className": "Document",
                "reservation": {"isReserved": true, "id": "{R1}"},
                "currentVersion": {"contentElements": [
                    {"retrievalName": "report.pdf", "downloadUrl": "/content/1"}
                ]},
                "properties": [{"id": "IsReserved", "value": true}]
            }}}),
        ));
        let context = create_test_context(mock.clone());

        let result = CheckoutDocumentTool::new()
            .execute(arguments(json!({"identifier": "{D1}"})), &context)
            .await
            .unwrap();

        let view = result_json(&result);
        assert_eq!(view["id"], "{D1}");
        assert_eq!(view["reservation"]["id"], "{R1}");
        assert_eq!(view["content_elements"][0]["retrievalName"], "report.pdf");
        assert_eq!(view["properties"]["IsReserved"], true);
        assert_eq!(mock.call_count("checkoutDocument"), 1);
    }

    #[tokio::test]
    async fn test_already_reserved_is_tool_error() {
        let mock = Arc::new(MockGraphqlExecutor::new().with_response(
            "checkoutDocument",
            json!({"errors": [{"message": "The document is already checked out"}]}),
        ));
        let context = create_test_context(mock);

        let result = CheckoutDocumentTool::new()
            .execute(arguments(json!({"identifier": "{D1}"})), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
    }
}
