//! Environment variable loading utilities
//!
//! Common patterns for loading environment variables with type conversion,
//! fallback defaults and required-value checks.

use crate::error::{ContentMcpError, Result};
use std::env;
use std::str::FromStr;

/// Load an environment variable with a string default
pub fn load_env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Load an environment variable with type conversion and default
///
/// Unparseable values fall back to the default.
pub fn load_env_parsed<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Load an environment variable as an `Option<T>`
pub fn load_env_optional<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Load a variable that must be present and non-empty
pub fn load_env_required(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ContentMcpError::Config(format!(
            "{key} environment variable is required"
        ))),
    }
}

/// Load a boolean flag
///
/// Accepts `true/false`, `1/0`, `yes/no` and `on/off` in any case; anything
/// else, including an unset variable, yields the default.
pub fn load_env_flag(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|v| parse_flag(&v))
        .unwrap_or(default)
}

/// Parse a boolean flag value, `None` when it is not a recognised spelling
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_env_string() {
        let key = "CONTENT_MCP_TEST_STRING_VAR";
        let default = "default_value";

        env::remove_var(key);
        assert_eq!(load_env_string(key, default), default);

        env::set_var(key, "test_value");
        assert_eq!(load_env_string(key, default), "test_value");

        env::remove_var(key);
    }

    #[test]
    #[serial]
    fn test_load_env_parsed() {
        let key = "CONTENT_MCP_TEST_PARSED_VAR";

        env::remove_var(key);
        assert_eq!(load_env_parsed(key, 3u32), 3);

        env::set_var(key, " 7 ");
        assert_eq!(load_env_parsed(key, 3u32), 7);

        env::set_var(key, "not_a_number");
        assert_eq!(load_env_parsed(key, 2.5f64), 2.5);

        env::remove_var(key);
    }

    #[test]
    #[serial]
    fn test_load_env_optional() {
        let key = "CONTENT_MCP_TEST_OPTIONAL_VAR";

        env::remove_var(key);
        assert_eq!(load_env_optional::<u64>(key), None);

        env::set_var(key, "42");
        assert_eq!(load_env_optional::<u64>(key), Some(42));

        env::remove_var(key);
    }

    #[test]
    #[serial]
    fn test_load_env_required() {
        let key = "CONTENT_MCP_TEST_REQUIRED_VAR";

        env::remove_var(key);
        let err = load_env_required(key).unwrap_err();
        assert!(matches!(err, ContentMcpError::Config(_)));
        assert!(err.to_string().contains(key));

        env::set_var(key, "   ");
        assert!(load_env_required(key).is_err());

        env::set_var(key, "value");
        assert_eq!(load_env_required(key).unwrap(), "value");

        env::remove_var(key);
    }

    #[test]
    #[serial]
    fn test_load_env_flag() {
        let key = "CONTENT_MCP_TEST_FLAG_VAR";

        env::remove_var(key);
        assert!(load_env_flag(key, true));

        for (raw, expected) in [("FALSE", false), ("0", false), ("no", false), ("Yes", true)] {
            env::set_var(key, raw);
            assert_eq!(load_env_flag(key, !expected), expected, "value {raw}");
        }

        env::set_var(key, "maybe");
        assert!(!load_env_flag(key, false));

        env::remove_var(key);
    }
}
