//! Version series listing tool

use super::fetch_node;
use crate::error::Result;
use crate::graphql::{array_at, queries};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{DocumentVersion, IdentifierRequest};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde::Serialize;
use serde_json::Value;

/// A version with its printable `major.minor` label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionEntry {
    /// The version
    #[serde(flatten)]
    pub version: DocumentVersion,
    /// `major.minor`
    pub label: String,
}

/// Tool listing every version in a document's version series
#[derive(Default)]
pub struct GetDocumentVersionsTool;

impl GetDocumentVersionsTool {
    /// Creates a new instance of the GetDocumentVersionsTool
    pub fn new() -> Self {
        Self
    }

    async fn versions(&self, identifier: &str, context: &ToolContext) -> Result<Vec<VersionEntry>> {
        let document = fetch_node(context, queries::DOCUMENT_VERSIONS, identifier, "document").await?;
        let versions: Vec<DocumentVersion> = serde_json::from_value(Value::Array(array_at(
            &document,
            "/versionSeries/versions/versionables",
        )))?;
        Ok(versions
            .into_iter()
            .map(|version| VersionEntry {
                label: version.label(),
                version,
            })
            .collect())
    }
}

#[async_trait]
impl McpTool for GetDocumentVersionsTool {
    fn name(&self) -> &'static str {
        "get_document_versions"
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
                    "description": "Document id or path of any version in the series"
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
        BaseToolImpl::respond(self.name(), self.versions(&request.identifier, context).await)
    }
}
