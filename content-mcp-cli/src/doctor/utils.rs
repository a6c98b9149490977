//! Utility functions for the doctor module

use std::fs;
use std::path::Path;

/// Log levels accepted in `LOG_LEVEL`
pub const LOG_LEVELS: [&str; 8] = [
    "TRACE", "DEBUG", "INFO", "WARN", "WARNING", "ERROR", "CRITICAL", "OFF",
];

/// Whether `value` names a known log level
pub fn is_valid_log_level(value: &str) -> bool {
    LOG_LEVELS.contains(&value.trim().to_ascii_uppercase().as_str())
}

/// Mask all but the first character of a secret
pub fn mask_secret(value: &str) -> String {
    match value.chars().next() {
        Some(first) => format!("{first}{}", "*".repeat(value.chars().count().saturating_sub(1))),
        None => String::new(),
    }
}

/// Create `dir` if needed and verify a file can be written in it
pub fn check_directory_writable(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let probe = dir.join(".doctor-write-test");
    fs::write(&probe, b"ok")?;
    fs::remove_file(&probe)
}

/// Get the command registering the server with an MCP client
pub fn get_mcp_add_command() -> String {
    r#"Add content-mcp to Claude Code using this command:

claude mcp add --scope user content-mcp content-mcp serve

Set SERVER_URL, USERNAME, PASSWORD and OBJECT_STORE in the server's
environment (for example with `--env KEY=value`)."#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_log_level() {
        assert!(is_valid_log_level("info"));
        assert!(is_valid_log_level(" WARNING "));
        assert!(!is_valid_log_level("chatty"));
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("hunter2"), "h******");
        assert_eq!(mask_secret(""), "");
    }

    #[test]
    fn test_check_directory_writable() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("logs");
        check_directory_writable(&nested).unwrap();
        assert!(nested.is_dir());
        assert!(!nested.join(".doctor-write-test").exists());
    }
}
