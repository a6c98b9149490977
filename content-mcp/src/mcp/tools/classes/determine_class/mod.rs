//! Keyword-to-class matching tool

use super::resolve_root_class;
use crate::error::{ContentMcpError, Result, ToolError};
use crate::matching::{rank, score_class, ScoredMatch, MAX_CLASS_MATCHES};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::DetermineClassRequest;
use crate::metadata::{ClassSummary, RootClass};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde::Serialize;

/// One candidate class with its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassMatch {
    /// The matched class
    pub class_description_data: ClassSummary,
    /// Normalized match score
    pub score: f64,
}

/// Tool picking the classes of a root that best match keywords
#[derive(Default)]
pub struct DetermineClassTool;

impl DetermineClassTool {
    /// Creates a new instance of the DetermineClassTool
    pub fn new() -> Self {
        Self
    }

    async fn determine(
        &self,
        root: RootClass,
        keywords: &[String],
        context: &ToolContext,
    ) -> std::result::Result<Vec<ClassMatch>, ToolError> {
        let candidates = self.score_bucket(root, keywords, context).await?;
        let ranked = rank(candidates, MAX_CLASS_MATCHES);
        if ranked.is_empty() {
            return Err(ToolError::from(ContentMcpError::not_found(format!(
                "No class matching keywords {keywords:?} found in root class '{root}'"
            )))
            .with_suggestions([
                "Try using different keywords",
                "Check if the keywords are spelled correctly",
                "Ask the user for the specific class they want to use",
            ]));
        }

        for candidate in &ranked {
            tracing::debug!(
                "Class {} scored {:.2}",
                candidate.item.symbolic_name,
                candidate.score
            );
        }
        Ok(ranked
            .into_iter()
            .map(|candidate| ClassMatch {
                class_description_data: candidate.item,
                score: candidate.score,
            })
            .collect())
    }

    async fn score_bucket(
        &self,
        root: RootClass,
        keywords: &[String],
        context: &ToolContext,
    ) -> Result<Vec<ScoredMatch<ClassSummary>>> {
        context.metadata.populate_root_bucket(root).await?;

        let cache = context.cache().read().await;
        Ok(cache
            .get_all_keys_for_root(root.as_str())
            .iter()
            .filter_map(|name| cache.get_class_data(root.as_str(), name))
            .map(|class| ScoredMatch::new(class.summary(), score_class(class, keywords)))
            .collect())
    }
}

#[async_trait]
impl McpTool for DetermineClassTool {
    fn name(&self) -> &'static str {
        "determine_class"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "root_class": {
                    "type": "string",
                    "description": "Root class name as returned by list_root_classes"
                },
                "keywords": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Words describing the wanted class"
                }
            },
            "required": ["root_class", "keywords"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: DetermineClassRequest = BaseToolImpl::parse_arguments(arguments)?;
        let root = match resolve_root_class(&request.root_class, context).await {
            Ok(root) => root,
            Err(error) => return BaseToolImpl::respond_with::<()>(self.name(), Err(error)),
        };

        let keywords: Vec<String> = request
            .keywords
            .iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() {
            return BaseToolImpl::respond::<()>(
                self.name(),
                Err(ContentMcpError::validation("At least one keyword is required")),
            );
        }

        let result = self.determine(root, &keywords, context).await;
        BaseToolImpl::respond_with(self.name(), result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        arguments, create_test_context, result_json, with_document_classes, MockGraphqlExecutor,
    };
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_determine_class_tool_schema() {
        let tool = DetermineClassTool::new();
        assert_eq!(tool.name(), "determine_class");
        assert!(!tool.description().is_empty());
        let schema = tool.schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["root_class", "keywords"]));
    }

    #[tokio::test]
    async fn test_best_match_first() {
        let mock = Arc::new(with_document_classes(MockGraphqlExecutor::new()));
        let context = create_test_context(mock);

        let result = DetermineClassTool::new()
            .execute(
                arguments(json!({"root_class": "Document", "keywords": ["invoice"]})),
                &context,
            )
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        let matches = result_json(&result);
        assert_eq!(matches[0]["class_description_data"]["symbolic_name"], "Invoice");
        assert!(matches[0]["score"].as_f64().unwrap() > 0.0);
        assert!(matches.as_array().unwrap().len() <= MAX_CLASS_MATCHES);
    }

    #[tokio::test]
    async fn test_tied_scores_keep_repository_order() {
        let mock = Arc::new(MockGraphqlExecutor::new().with_response(
            "getClassAndSubclasses",
            json!({"data": {
                "classDescription": {
                    "symbolicName": "Document",
                    "displayName": "Document",
                    "descriptiveText": ""
                },
                "subClassDescriptions": {"classDescriptions": [
                    {"symbolicName": "InvoiceZ", "displayName": "Invoice", "descriptiveText": ""},
                    {"symbolicName": "InvoiceA", "displayName": "Invoice", "descriptiveText": ""}
                ]}
            }}),
        ));
        let context = create_test_context(mock);

        let result = DetermineClassTool::new()
            .execute(
                arguments(json!({"root_class": "Document", "keywords": ["invoice"]})),
                &context,
            )
            .await
            .unwrap();

        let matches = result_json(&result);
        assert_eq!(matches[0]["score"], matches[1]["score"]);
        assert_eq!(matches[0]["class_description_data"]["symbolic_name"], "InvoiceZ");
        assert_eq!(matches[1]["class_description_data"]["symbolic_name"], "InvoiceA");
    }

    #[tokio::test]
    async fn test_no_match_is_not_found() {
        let mock = Arc::new(with_document_classes(MockGraphqlExecutor::new()));
        let context = create_test_context(mock);

        let result = DetermineClassTool::new()
            .execute(
                arguments(json!({"root_class": "Document", "keywords": ["xyzzy"]})),
                &context,
            )
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        let payload = result_json(&result);
        assert_eq!(
            payload["message"],
            "No class matching keywords [\"xyzzy\"] found in root class 'Document'"
        );
        assert_eq!(payload["suggestions"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_empty_keywords_rejected() {
        let mock = Arc::new(MockGraphqlExecutor::new());
        let context = create_test_context(mock.clone());

        let result = DetermineClassTool::new()
            .execute(
                arguments(json!({"root_class": "Folder", "keywords": ["  "]})),
                &context,
            )
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_keywords_is_invalid_params() {
        let context = create_test_context(Arc::new(MockGraphqlExecutor::new()));
        let err = DetermineClassTool::new()
            .execute(arguments(json!({"root_class": "Folder"})), &context)
            .await
            .unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }
}
