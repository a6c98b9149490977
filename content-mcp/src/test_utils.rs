//! Test doubles shared by unit and integration tests
//!
//! [`MockGraphqlExecutor`] replays canned response envelopes keyed by the
//! GraphQL operation name and records every call, so tests can drive the
//! loader and the tools without a repository:
//!
//! ```
//! use content_mcp::test_utils::MockGraphqlExecutor;
//! use serde_json::json;
//!
//! let mock = MockGraphqlExecutor::new()
//!     .with_response("getClassMetadata", json!({"data": {"classDescription": null}}));
//! assert_eq!(mock.call_count("getClassMetadata"), 0);
//! ```

use crate::error::{ContentMcpError, Result};
use crate::graphql::{operation_name, GraphqlExecutor};
use crate::mcp::tool_registry::ToolContext;
use async_trait::async_trait;
use rmcp::model::{CallToolResult, RawContent};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Object store name used by [`create_test_context`]
pub const TEST_OBJECT_STORE: &str = "TestOS";

struct Rule {
    operation: String,
    variable: Option<(String, Value)>,
    response: Value,
}

/// One recorded executor call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Operation name, `anonymous` when the document has none
    pub operation: String,
    /// Variables sent with the call
    pub variables: Value,
}

/// In-memory [`GraphqlExecutor`] returning canned envelopes
///
/// The first rule matching the operation name (and, when given, one
/// variable value) answers the call. Unmatched calls fail with a transport
/// error naming the operation.
#[derive(Default)]
pub struct MockGraphqlExecutor {
    rules: Vec<Rule>,
    downloads: HashMap<String, String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockGraphqlExecutor {
    /// Executor with no canned responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every call of `operation` with `envelope`
    pub fn with_response(mut self, operation: &str, envelope: Value) -> Self {
        self.rules.push(Rule {
            operation: operation.to_string(),
            variable: None,
            response: envelope,
        });
        self
    }

    /// Answer calls of `operation` whose variable `name` equals `value`
    pub fn with_response_for(
        mut self,
        operation: &str,
        name: &str,
        value: impl Into<Value>,
        envelope: Value,
    ) -> Self {
        self.rules.push(Rule {
            operation: operation.to_string(),
            variable: Some((name.to_string(), value.into())),
            response: envelope,
        });
        self
    }

    /// Answer `download_text(url)` with `text`
    pub fn with_download(mut self, url: &str, text: &str) -> Self {
        self.downloads.insert(url.to_string(), text.to_string());
        self
    }

    /// All recorded calls in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Number of recorded calls of `operation`
    pub fn call_count(&self, operation: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.operation == operation)
            .count()
    }

    /// Variables of the most recent call of `operation`
    pub fn last_variables(&self, operation: &str) -> Option<Value> {
        self.calls()
            .into_iter()
            .rev()
            .find(|c| c.operation == operation)
            .map(|c| c.variables)
    }
}

#[async_trait]
impl GraphqlExecutor for MockGraphqlExecutor {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value> {
        let operation = operation_name(query).unwrap_or("anonymous").to_string();
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                operation: operation.clone(),
                variables: variables.clone(),
            });
        }

        self.rules
            .iter()
            .find(|rule| {
                rule.operation == operation
                    && rule
                        .variable
                        .as_ref()
                        .map_or(true, |(name, value)| variables.get(name) == Some(value))
            })
            .map(|rule| rule.response.clone())
            .ok_or_else(|| {
                ContentMcpError::Transport(format!("no canned response for operation {operation}"))
            })
    }

    async fn download_text(&self, url: &str) -> Result<String> {
        self.downloads
            .get(url)
            .cloned()
            .ok_or_else(|| ContentMcpError::Transport(format!("no canned download for {url}")))
    }
}

/// Tool context wired to `executor` with an empty metadata cache
pub fn create_test_context(executor: Arc<MockGraphqlExecutor>) -> ToolContext {
    ToolContext::new(executor, TEST_OBJECT_STORE)
}

/// Tool arguments from a JSON object literal
pub fn arguments(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    }
}

/// Parse the JSON text of a tool result
pub fn result_json(result: &CallToolResult) -> Value {
    result
        .content
        .iter()
        .find_map(|content| match &content.raw {
            RawContent::Text(text) => serde_json::from_str(&text.text).ok(),
            _ => None,
        })
        .unwrap_or(Value::Null)
}

/// Canned metadata for the `Document` root: the root class, one subclass
/// `Invoice`, and `Document`'s properties with `DocumentTitle` as its name
/// property
pub fn with_document_classes(mock: MockGraphqlExecutor) -> MockGraphqlExecutor {
    mock.with_response_for(
        "getClassAndSubclasses",
        "root_class_name",
        "Document",
        serde_json::json!({"data": {
            "classDescription": {
                "symbolicName": "Document",
                "displayName": "Document",
                "descriptiveText": "Base document class"
            },
            "subClassDescriptions": {"classDescriptions": [{
                "symbolicName": "Invoice",
                "displayName": "Invoice",
                "descriptiveText": "Supplier invoices"
            }]}
        }}),
    )
    .with_response_for(
        "getClassMetadataWithSuperclasses",
        "class_symbolic_name",
        "Document",
        serde_json::json!({"data": {"classDescription": {
            "symbolicName": "Document",
            "displayName": "Document",
            "descriptiveText": "Base document class",
            "namePropertyIndex": 0,
            "propertyDescriptions": [
                {
                    "symbolicName": "DocumentTitle", "displayName": "Document Title",
                    "dataType": "STRING", "cardinality": "SINGLE", "isSearchable": true
                },
                {
                    "symbolicName": "ContentSize", "displayName": "Content Size",
                    "dataType": "FLOAT", "cardinality": "SINGLE", "isSearchable": true
                },
                {
                    "symbolicName": "Keywords", "displayName": "Keywords",
                    "dataType": "STRING", "cardinality": "LIST", "isSearchable": false
                }
            ],
            "superClassDescription": null
        }}}),
    )
}
