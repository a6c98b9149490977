//! Text extract retrieval tool
//!
//! Text extracts are stored as annotations of class
//! `TxeTextExtractAnnotation` attached to a content element. Their content
//! elements are downloaded and joined with a blank line.

use super::fetch_node;
use crate::error::Result;
use crate::graphql::{array_at, queries};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::IdentifierRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::Value;

/// Annotation class holding text extracts
pub const TEXT_EXTRACT_ANNOTATION_CLASS: &str = "TxeTextExtractAnnotation";

/// Download URLs of the text extract annotations of a document node
pub fn text_extract_urls(document: &Value) -> Vec<String> {
    array_at(document, "/annotations/annotations")
        .iter()
        .filter(|annotation| {
            annotation.get("className").and_then(Value::as_str)
                == Some(TEXT_EXTRACT_ANNOTATION_CLASS)
                && annotation
                    .get("annotatedContentElement")
                    .is_some_and(|element| !element.is_null())
        })
        .flat_map(|annotation| array_at(annotation, "/contentElements"))
        .filter_map(|element| {
            element
                .get("downloadUrl")
                .and_then(Value::as_str)
                .filter(|url| !url.is_empty())
                .map(str::to_string)
        })
        .collect()
}

/// Tool returning the extracted text of a document
#[derive(Default)]
pub struct GetDocumentTextExtractTool;

impl GetDocumentTextExtractTool {
    /// Creates a new instance of the GetDocumentTextExtractTool
    pub fn new() -> Self {
        Self
    }

    async fn extract(&self, identifier: &str, context: &ToolContext) -> Result<String> {
        let document =
            fetch_node(context, queries::DOCUMENT_TEXT_EXTRACT, identifier, "document").await?;
        let urls = text_extract_urls(&document);
        tracing::debug!("Document {} has {} text extract elements", identifier, urls.len());

        let mut texts = Vec::with_capacity(urls.len());
        for url in &urls {
            let text = context.repository.download_text(url).await?;
            if !text.trim().is_empty() {
                texts.push(text);
            }
        }
        Ok(texts.join("\n\n"))
    }
}

#[async_trait]
impl McpTool for GetDocumentTextExtractTool {
    fn name(&self) -> &'static str {
        "get_document_text_extract"
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
        BaseToolImpl::respond(self.name(), self.extract(&request.identifier, context).await)
    }
}
