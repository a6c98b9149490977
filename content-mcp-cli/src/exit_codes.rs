//! Exit code constants for CLI commands
//!
//! - 0: Success
//! - 1: Warnings, or the server could not start
//! - 2: Errors found by `doctor`

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Warnings found, or a command failed to run
pub const EXIT_WARNING: i32 = 1;

/// Errors found
pub const EXIT_ERROR: i32 = 2;
