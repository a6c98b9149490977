//! Error handling for the content-mcp CLI
//!
//! Errors keep their source chain and carry the exit code the process
//! should end with.

use crate::exit_codes::{EXIT_ERROR, EXIT_WARNING};
use content_mcp::ContentMcpError;
use std::error::Error;
use std::fmt;

/// CLI-specific result type that preserves error information
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type that includes both error information and suggested exit code
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: i32,
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl CliError {
    /// Create a new CLI error with a message and exit code
    pub fn new(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
            source: None,
        }
    }

    /// Create a CLI error from another error with a specific exit code
    pub fn from_error<E: Error + Send + Sync + 'static>(error: E, exit_code: i32) -> Self {
        Self {
            message: error.to_string(),
            exit_code,
            source: Some(Box::new(error)),
        }
    }

    /// Get the full error chain as a formatted string
    pub fn full_chain(&self) -> String {
        let mut result = self.message.clone();

        // The top-level source produced `message`, so start one level down.
        let mut current_source = self.source.as_ref().and_then(|e| e.source());
        while let Some(err) = current_source {
            result.push_str(&format!("\n  Caused by: {err}"));
            current_source = err.source();
        }

        result
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

impl From<ContentMcpError> for CliError {
    fn from(error: ContentMcpError) -> Self {
        let exit_code = match error {
            ContentMcpError::Config(_) => EXIT_ERROR,
            _ => EXIT_WARNING,
        };
        Self::from_error(error, exit_code)
    }
}

/// Convert a CliResult to an exit code, printing the full error chain if needed
pub fn handle_cli_result<T>(result: CliResult<T>) -> i32 {
    match result {
        Ok(_) => crate::exit_codes::EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("{}", e.full_chain());
            eprintln!("Error: {}", e.full_chain());
            e.exit_code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_exit_with_error_code() {
        let err = CliError::from(ContentMcpError::Config("SERVER_URL is required".into()));
        assert_eq!(err.exit_code, EXIT_ERROR);
        assert_eq!(err.to_string(), "Configuration error: SERVER_URL is required");
    }

    #[test]
    fn test_other_errors_exit_with_warning_code() {
        let err = CliError::from(ContentMcpError::Transport("connection refused".into()));
        assert_eq!(err.exit_code, EXIT_WARNING);
    }

    #[test]
    fn test_handle_cli_result() {
        assert_eq!(handle_cli_result::<()>(Ok(())), 0);
        assert_eq!(handle_cli_result::<()>(Err(CliError::new("boom", 2))), 2);
    }
}
