//! GraphQL access to the content repository
//!
//! Tools never talk HTTP directly. They hand a query document and its
//! variables to a [`GraphqlExecutor`], which returns the raw response
//! envelope. [`GraphqlResponse`] splits that envelope into data or a
//! [`ContentMcpError::Backend`] carrying the GraphQL error messages.

use crate::error::{ContentMcpError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// reqwest-backed executor
pub mod client;
/// Query and mutation documents
pub mod queries;
/// Executor bound to an object store
pub mod repository;

pub use client::HttpGraphqlClient;
pub use repository::Repository;

/// Executes GraphQL documents against the repository
#[async_trait]
pub trait GraphqlExecutor: Send + Sync {
    /// Run `query` with `variables` and return the response envelope
    ///
    /// GraphQL-level failures come back inside the envelope as `errors`;
    /// only transport failures are returned as `Err`.
    async fn execute(&self, query: &str, variables: Value) -> Result<Value>;

    /// Fetch a content download URL as text
    async fn download_text(&self, url: &str) -> Result<String>;
}

/// One entry of a GraphQL `errors` array
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    /// Error message
    pub message: String,
    /// Path of the failing field, when reported
    #[serde(default)]
    pub path: Option<Value>,
}

/// A response envelope split into its parts
#[derive(Debug, Clone)]
pub struct GraphqlResponse {
    /// The `data` member, `Null` when absent
    pub data: Value,
    /// The `errors` member, empty when absent
    pub errors: Vec<GraphqlError>,
}

impl GraphqlResponse {
    /// Split a raw envelope
    ///
    /// Besides the standard `errors` array this accepts the
    /// `{"error": true, "message": ...}` shape some gateways answer with.
    pub fn from_envelope(envelope: Value) -> Self {
        let mut envelope = envelope;
        let mut errors: Vec<GraphqlError> = envelope
            .get_mut("errors")
            .map(Value::take)
            .and_then(|e| serde_json::from_value(e).ok())
            .unwrap_or_default();

        if envelope.get("error").and_then(Value::as_bool) == Some(true) {
            let message = envelope
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error")
                .to_string();
            errors.push(GraphqlError { message, path: None });
        }

        let data = envelope.get_mut("data").map(Value::take).unwrap_or(Value::Null);
        Self { data, errors }
    }

    /// Whether the repository reported any error
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// All error messages joined with `; `
    pub fn error_message(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// The data, or a backend error if the repository reported errors
    pub fn into_data(self) -> Result<Value> {
        if self.has_errors() {
            return Err(ContentMcpError::Backend(self.error_message()));
        }
        if self.data.is_null() {
            return Err(ContentMcpError::Backend(
                "response contained no data".to_string(),
            ));
        }
        Ok(self.data)
    }
}

/// Operation name of a query document (`query getFoo(...)` -> `getFoo`)
pub fn operation_name(query: &str) -> Option<&str> {
    let trimmed = query.trim_start();
    let rest = ["query", "mutation"]
        .iter()
        .find_map(|keyword| trimmed.strip_prefix(*keyword))?;
    let rest = rest.trim_start();
    let end = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    (end > 0).then(|| &rest[..end])
}

/// Follow a JSON pointer and clone the array found there, empty when absent
pub fn array_at(data: &Value, pointer: &str) -> Vec<Value> {
    data.pointer(pointer)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_with_data() {
        let response = GraphqlResponse::from_envelope(json!({"data": {"a": 1}}));
        assert!(!response.has_errors());
        assert_eq!(response.into_data().unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_envelope_with_errors() {
        let response = GraphqlResponse::from_envelope(json!({
            "data": null,
            "errors": [{"message": "bad class"}, {"message": "bad field", "path": ["x"]}]
        }));
        assert_eq!(response.error_message(), "bad class; bad field");
        let err = response.into_data().unwrap_err();
        assert!(matches!(err, ContentMcpError::Backend(ref m) if m == "bad class; bad field"));
    }

    #[test]
    fn test_envelope_with_error_flag() {
        let response =
            GraphqlResponse::from_envelope(json!({"error": true, "message": "connection refused"}));
        assert_eq!(response.error_message(), "connection refused");
    }

    #[test]
    fn test_envelope_without_data() {
        let err = GraphqlResponse::from_envelope(json!({})).into_data().unwrap_err();
        assert!(err.to_string().contains("no data"));
    }

    #[test]
    fn test_operation_name() {
        assert_eq!(
            operation_name("\n  query getClassMetadata($a: String!) { x }"),
            Some("getClassMetadata")
        );
        assert_eq!(operation_name("mutation createHold($a: String!) {}"), Some("createHold"));
        assert_eq!(operation_name("mutation ($a: String!) {}"), None);
        assert_eq!(operation_name("{ x }"), None);
    }

    #[test]
    fn test_array_at() {
        let data = json!({"documents": {"documents": [{"id": "1"}]}});
        assert_eq!(array_at(&data, "/documents/documents").len(), 1);
        assert!(array_at(&data, "/folders/folders").is_empty());
    }
}
