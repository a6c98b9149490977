//! content-mcp CLI Library
//!
//! Command-line definitions, logging setup, diagnostics and exit codes for
//! the `content-mcp` binary.

/// Command-line interface definitions and argument parsing
pub mod cli;
/// Shell completion generation
pub mod completions;
/// Configuration and connectivity diagnostics
pub mod doctor;
/// CLI error type carrying an exit code
pub mod error;
/// Exit codes used by the CLI application
pub mod exit_codes;
/// Logging setup for serve mode and interactive commands
pub mod logging;
