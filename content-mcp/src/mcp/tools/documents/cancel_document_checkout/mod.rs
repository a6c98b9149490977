//! Checkout cancellation tool

use super::fetch_node;
use crate::graphql::queries;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{IdentifierRequest, ReservationView};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool releasing a document reservation without checking in
#[derive(Default)]
pub struct CancelDocumentCheckoutTool;

impl CancelDocumentCheckoutTool {
    /// Creates a new instance of the CancelDocumentCheckoutTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CancelDocumentCheckoutTool {
    fn name(&self) -> &'static str {
        "cancel_document_checkout"
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
                    "description": "Id or path of the reserved document"
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
        tracing::info!("Cancelling checkout of {}", request.identifier);
        let result = fetch_node(
            context,
            &queries::cancel_document_checkout(),
            &request.identifier,
            "cancelDocumentCheckout",
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
    fn test_cancel_document_checkout_tool_schema() {
        let tool = CancelDocumentCheckoutTool::new();
        assert_eq!(tool.name(), "cancel_document_checkout");
        assert!(!tool.description().is_empty());
        assert_eq!(tool.schema()["required"], json!(["identifier"]));
    }

    #[tokio::test]
    async fn test_cancel_clears_reservation() {
        let mock = Arc::new(MockGraphqlExecutor::new().with_response(
            "cancelDocumentCheckout",
            json!({"data": {"cancelDocumentCheckout": {
                "id": "{D1}",
                "className": "Document",
                "reservation": null,
                "currentVersion": {"contentElements": []},
                "properties": []
            }}}),
        ));
        let context = create_test_context(mock);

        let result = CancelDocumentCheckoutTool::new()
            .execute(arguments(json!({"identifier": "{D1}"})), &context)
            .await
            .unwrap();

        let view = result_json(&result);
        assert_eq!(view["id"], "{D1}");
        assert!(view["reservation"].is_null());
        assert_eq!(view["content_elements"], json!([]));
    }
}
