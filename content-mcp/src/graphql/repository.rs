//! Object-store scoped access to the executor

use super::{GraphqlExecutor, GraphqlResponse};
use crate::error::Result;
use serde_json::Value;
use std::sync::Arc;

/// A [`GraphqlExecutor`] bound to one object store
///
/// Every query gets the store as its `object_store_name` variable and comes
/// back as plain `data`; GraphQL errors become
/// [`crate::error::ContentMcpError::Backend`].
#[derive(Clone)]
pub struct Repository {
    executor: Arc<dyn GraphqlExecutor>,
    object_store: String,
}

impl Repository {
    /// Bind `executor` to `object_store`
    pub fn new(executor: Arc<dyn GraphqlExecutor>, object_store: impl Into<String>) -> Self {
        Self {
            executor,
            object_store: object_store.into(),
        }
    }

    /// Object store identifier
    pub fn object_store(&self) -> &str {
        &self.object_store
    }

    /// Run `document` and return its `data`
    ///
    /// `variables` must be a JSON object; `object_store_name` is added to it.
    pub async fn query(&self, document: &str, variables: Value) -> Result<Value> {
        let mut variables = variables;
        if let Some(map) = variables.as_object_mut() {
            map.insert(
                "object_store_name".to_string(),
                Value::String(self.object_store.clone()),
            );
        }
        let envelope = self.executor.execute(document, variables).await?;
        GraphqlResponse::from_envelope(envelope).into_data()
    }

    /// Fetch a content download URL as text
    pub async fn download_text(&self, url: &str) -> Result<String> {
        self.executor.download_text(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentMcpError;
    use crate::test_utils::MockGraphqlExecutor;
    use serde_json::json;

    #[tokio::test]
    async fn test_query_injects_object_store() {
        let mock = Arc::new(
            MockGraphqlExecutor::new().with_response("getThing", json!({"data": {"thing": 1}})),
        );
        let repository = Repository::new(mock.clone(), "OS1");

        let data = repository
            .query("query getThing($id: String!) { thing }", json!({"id": "x"}))
            .await
            .unwrap();

        assert_eq!(data["thing"], 1);
        let vars = mock.last_variables("getThing").unwrap();
        assert_eq!(vars["object_store_name"], "OS1");
        assert_eq!(vars["id"], "x");
    }

    #[tokio::test]
    async fn test_query_surfaces_graphql_errors() {
        let mock = Arc::new(MockGraphqlExecutor::new().with_response(
            "getThing",
            json!({"data": null, "errors": [{"message": "E_OBJECT_NOT_FOUND"}]}),
        ));
        let repository = Repository::new(mock, "OS1");

        let err = repository
            .query("query getThing { thing }", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ContentMcpError::Backend(ref m) if m == "E_OBJECT_NOT_FOUND"));
    }
}
