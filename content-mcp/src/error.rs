//! Unified error handling for the content-mcp library
//!
//! Everything below the tool boundary returns [`Result`]. At the tool boundary
//! the error is turned into a [`ToolError`] payload that carries a readable
//! message plus remediation suggestions for the calling agent.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The main error type for the content-mcp library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentMcpError {
    /// A class, document, folder or hold could not be found
    #[error("{0}")]
    NotFound(String),

    /// The repository answered with GraphQL errors
    #[error("Repository error: {0}")]
    Backend(String),

    /// Caller supplied arguments that cannot be acted on
    #[error("{0}")]
    Validation(String),

    /// Walking the superclass chain did not reach a known root class
    #[error("Root class discovery failed for '{class_name}': {reason}")]
    Discovery {
        /// Class the walk started from
        class_name: String,
        /// What stopped the walk
        reason: String,
    },

    /// HTTP transport failed after all retries
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Broken internal invariant
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for content-mcp operations
pub type Result<T> = std::result::Result<T, ContentMcpError>;

impl ContentMcpError {
    /// Shorthand for a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Shorthand for a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Shorthand for a backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Default remediation hints for this kind of failure
    pub fn suggestions(&self) -> Vec<String> {
        let hints: &[&str] = match self {
            Self::NotFound(_) => &[
                "Verify the name or identifier is correct",
                "Use list_root_classes or list_all_classes to see available classes",
            ],
            Self::Backend(_) => &[
                "Check that all property and class names are valid",
                "Check your connection to the repository",
            ],
            Self::Validation(_) => &["Check the tool arguments against the tool's input schema"],
            Self::Discovery { .. } => &[
                "Verify the class name is correct",
                "Use determine_class to find a class within a known root class",
            ],
            Self::Transport(_) => &[
                "Check your connection to the repository",
                "Verify SERVER_URL and the SSL settings",
            ],
            Self::Config(_) => &["Run `content-mcp doctor` to check the environment"],
            Self::Json(_) | Self::Internal(_) => &["Check the server logs for details"],
        };
        hints.iter().map(|s| s.to_string()).collect()
    }
}

/// Structured failure payload returned to the agent by every tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolError {
    /// Always `true`; lets agents tell failures from results without a schema
    pub is_error: bool,
    /// Human-readable description of the failure
    pub message: String,
    /// Remediation hints
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl ToolError {
    /// Create a tool error with no suggestions
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            is_error: true,
            message: message.into(),
            suggestions: Vec::new(),
        }
    }

    /// Replace the suggestions
    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }
}

impl From<ContentMcpError> for ToolError {
    fn from(error: ContentMcpError) -> Self {
        let suggestions = error.suggestions();
        ToolError::new(error.to_string()).with_suggestions(suggestions)
    }
}

impl From<&ContentMcpError> for ToolError {
    fn from(error: &ContentMcpError) -> Self {
        ToolError::new(error.to_string()).with_suggestions(error.suggestions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_serializes_with_is_error_flag() {
        let err = ToolError::new("boom").with_suggestions(["try again"]);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["isError"], true);
        assert_eq!(json["message"], "boom");
        assert_eq!(json["suggestions"][0], "try again");
    }

    #[test]
    fn test_conversion_picks_suggestions_per_variant() {
        let err = ContentMcpError::not_found("Class 'Foo' not found");
        let tool_error = ToolError::from(err);
        assert_eq!(tool_error.message, "Class 'Foo' not found");
        assert!(tool_error
            .suggestions
            .iter()
            .any(|s| s.contains("list_all_classes")));

        let transport = ToolError::from(ContentMcpError::Transport("timeout".into()));
        assert!(transport.message.starts_with("Transport error"));
        assert!(transport
            .suggestions
            .iter()
            .any(|s| s.contains("connection")));
    }

    #[test]
    fn test_discovery_error_display() {
        let err = ContentMcpError::Discovery {
            class_name: "Invoice".into(),
            reason: "superclass chain ended".into(),
        };
        assert_eq!(
            err.to_string(),
            "Root class discovery failed for 'Invoice': superclass chain ended"
        );
    }
}
