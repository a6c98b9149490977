//! Check implementations for the doctor module

use super::types::*;
use super::utils::*;
use anyhow::Result;
use content_mcp::common::parse_flag;
use content_mcp::config::{
    LOG_LEVEL_VAR, MAX_RETRIES_VAR, PASSWORD_VAR, REQUEST_TIMEOUT_VAR, REQUIRED_VARS,
    RETRY_DELAY_VAR, SSL_ENABLED_VAR,
};
use content_mcp::{McpServer, RootClass, ServerConfig, ToolContext};
use std::env;

/// Check names constants to avoid typos and improve maintainability
pub mod check_names {
    pub const IN_PATH: &str = "content-mcp in PATH";
    pub const LOG_DIRECTORY: &str = "Log directory";
    pub const CONFIGURATION: &str = "Server configuration";
    pub const CONNECTIVITY: &str = "Repository connectivity";
}

fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Check that every required variable is set
pub fn check_required_variables(checks: &mut Vec<Check>) -> Result<()> {
    for key in REQUIRED_VARS {
        let check = match env_value(key) {
            Some(value) => {
                let shown = if key == PASSWORD_VAR {
                    mask_secret(&value)
                } else {
                    value
                };
                Check::new(key, CheckCategory::Environment, CheckStatus::Ok).with_message(shown)
            }
            None => Check::new(key, CheckCategory::Environment, CheckStatus::Error)
                .with_message("not set")
                .with_fix(format!("export {key}=...")),
        };
        checks.push(check.build());
    }
    Ok(())
}

fn positive_seconds(key: &str, value: &str) -> CheckBuilder {
    match value.trim().parse::<f64>() {
        Ok(secs) if secs.is_finite() && secs > 0.0 => {
            Check::new(key, CheckCategory::Environment, CheckStatus::Ok)
                .with_message(format!("{secs} seconds"))
        }
        _ => Check::new(key, CheckCategory::Environment, CheckStatus::Error)
            .with_message(format!("'{value}' is not a positive number of seconds"))
            .with_fix(format!("Set {key} to a positive number, e.g. 30")),
    }
}

/// Check that optional settings, when set, parse to valid values
///
/// Unset settings are reported with their default.
pub fn check_optional_settings(checks: &mut Vec<Check>) -> Result<()> {
    let defaults = [
        (SSL_ENABLED_VAR, "true"),
        (REQUEST_TIMEOUT_VAR, "30"),
        (MAX_RETRIES_VAR, "3"),
        (RETRY_DELAY_VAR, "1"),
        (LOG_LEVEL_VAR, "INFO"),
    ];
    for (key, default) in defaults {
        let Some(value) = env_value(key) else {
            checks.push(
                Check::new(key, CheckCategory::Environment, CheckStatus::Ok)
                    .with_message(format!("not set, using default {default}"))
                    .build(),
            );
            continue;
        };

        let check = if key == SSL_ENABLED_VAR {
            match parse_flag(&value) {
                Some(true) => Check::new(key, CheckCategory::Environment, CheckStatus::Ok)
                    .with_message("certificates are verified"),
                Some(false) => Check::new(key, CheckCategory::Environment, CheckStatus::Warning)
                    .with_message("certificate verification is disabled")
                    .with_fix("Only disable SSL verification for test repositories"),
                None => Check::new(key, CheckCategory::Environment, CheckStatus::Error)
                    .with_message(format!("'{value}' is not a boolean"))
                    .with_fix("Use true/false, 1/0 or yes/no"),
            }
        } else if key == MAX_RETRIES_VAR {
            match value.trim().parse::<u32>() {
                Ok(retries) => Check::new(key, CheckCategory::Environment, CheckStatus::Ok)
                    .with_message(format!("{retries} retries")),
                Err(_) => Check::new(key, CheckCategory::Environment, CheckStatus::Error)
                    .with_message(format!("'{value}' is not a non-negative integer"))
                    .with_fix(format!("Set {key} to a whole number, e.g. 3")),
            }
        } else if key == LOG_LEVEL_VAR {
            if is_valid_log_level(&value) {
                Check::new(key, CheckCategory::Environment, CheckStatus::Ok)
                    .with_message(value.trim().to_ascii_uppercase())
            } else {
                Check::new(key, CheckCategory::Environment, CheckStatus::Warning)
                    .with_message(format!("unknown level '{value}', INFO is used"))
                    .with_fix(format!("Use one of {}", LOG_LEVELS.join(", ")))
            }
        } else {
            positive_seconds(key, &value)
        };
        checks.push(check.build());
    }
    Ok(())
}

/// Check that the binary can be found on PATH
pub fn check_in_path(checks: &mut Vec<Check>) -> Result<()> {
    let path_var = env::var("PATH").unwrap_or_default();
    let found = env::split_paths(&path_var)
        .map(|dir| dir.join("content-mcp"))
        .find(|candidate| candidate.exists());

    let check = match found {
        Some(path) => Check::new(check_names::IN_PATH, CheckCategory::Environment, CheckStatus::Ok)
            .with_message(format!("Found at: {}", path.display())),
        None => Check::new(
            check_names::IN_PATH,
            CheckCategory::Environment,
            CheckStatus::Warning,
        )
        .with_message("content-mcp not found in PATH")
        .with_fix(get_mcp_add_command()),
    };
    checks.push(check.build());
    Ok(())
}

/// Check that the server log directory is writable
pub fn check_log_directory(checks: &mut Vec<Check>) -> Result<()> {
    let dir = crate::logging::log_directory();
    let check = match check_directory_writable(&dir) {
        Ok(()) => Check::new(
            check_names::LOG_DIRECTORY,
            CheckCategory::Environment,
            CheckStatus::Ok,
        )
        .with_message(dir.display().to_string()),
        Err(e) => Check::new(
            check_names::LOG_DIRECTORY,
            CheckCategory::Environment,
            CheckStatus::Warning,
        )
        .with_message(format!("{} is not writable: {e}", dir.display()))
        .with_fix("Serve mode will log to stderr instead; fix the directory permissions"),
    };
    checks.push(check.build());
    Ok(())
}

/// Build a server from the environment and load the `Document` classes
///
/// Skipped with a warning when the configuration is incomplete, since the
/// missing variables are already reported as errors.
pub async fn check_repository(checks: &mut Vec<Check>) -> Result<()> {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            checks.push(
                Check::new(
                    check_names::CONNECTIVITY,
                    CheckCategory::Repository,
                    CheckStatus::Warning,
                )
                .with_message(format!("skipped: {e}"))
                .build(),
            );
            return Ok(());
        }
    };

    match McpServer::from_config(&config) {
        Ok(server) => {
            checks.push(
                Check::new(
                    check_names::CONFIGURATION,
                    CheckCategory::Repository,
                    CheckStatus::Ok,
                )
                .with_message(format!(
                    "{} (object store {})",
                    config.server_url, config.object_store
                ))
                .build(),
            );
            check_connectivity(checks, &server.tool_context).await
        }
        Err(e) => {
            checks.push(
                Check::new(
                    check_names::CONFIGURATION,
                    CheckCategory::Repository,
                    CheckStatus::Error,
                )
                .with_message(e.to_string())
                .with_fix(e.suggestions().join("; "))
                .build(),
            );
            Ok(())
        }
    }
}

/// Populate the `Document` bucket through `context` and report the outcome
pub async fn check_connectivity(checks: &mut Vec<Check>, context: &ToolContext) -> Result<()> {
    let check = match context.metadata.populate_root_bucket(RootClass::Document).await {
        Ok(()) => {
            let count = context
                .cache()
                .read()
                .await
                .get_all_keys_for_root(RootClass::Document.as_str())
                .len();
            Check::new(
                check_names::CONNECTIVITY,
                CheckCategory::Repository,
                CheckStatus::Ok,
            )
            .with_message(format!(
                "loaded {count} Document classes from {}",
                context.repository.object_store()
            ))
        }
        Err(e) => Check::new(
            check_names::CONNECTIVITY,
            CheckCategory::Repository,
            CheckStatus::Error,
        )
        .with_message(e.to_string())
        .with_fix(e.suggestions().join("; ")),
    };
    checks.push(check.build());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_mcp::test_utils::{create_test_context, with_document_classes, MockGraphqlExecutor};
    use serial_test::serial;
    use std::sync::Arc;

    const ALL_VARS: [&str; 9] = [
        "SERVER_URL",
        "USERNAME",
        "PASSWORD",
        "OBJECT_STORE",
        SSL_ENABLED_VAR,
        REQUEST_TIMEOUT_VAR,
        MAX_RETRIES_VAR,
        RETRY_DELAY_VAR,
        LOG_LEVEL_VAR,
    ];

    fn clear_env() {
        for key in ALL_VARS {
            env::remove_var(key);
        }
    }

    fn find<'a>(checks: &'a [Check], name: &str) -> &'a Check {
        checks
            .iter()
            .find(|c| c.name == name)
            .unwrap_or_else(|| panic!("no check named {name}"))
    }

    #[test]
    #[serial]
    fn test_missing_required_variables_are_errors() {
        clear_env();
        env::set_var("SERVER_URL", "https://repo.example.com/graphql");
        env::set_var("PASSWORD", "secret");

        let mut checks = Vec::new();
        check_required_variables(&mut checks).unwrap();

        assert_eq!(checks.len(), 4);
        assert_eq!(find(&checks, "SERVER_URL").status, CheckStatus::Ok);
        assert_eq!(find(&checks, "PASSWORD").message, "s*****");
        assert_eq!(find(&checks, "USERNAME").status, CheckStatus::Error);
        assert_eq!(find(&checks, "OBJECT_STORE").status, CheckStatus::Error);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_optional_settings_are_validated() {
        clear_env();
        env::set_var(SSL_ENABLED_VAR, "no");
        env::set_var(REQUEST_TIMEOUT_VAR, "-5");
        env::set_var(MAX_RETRIES_VAR, "three");
        env::set_var(LOG_LEVEL_VAR, "debug");

        let mut checks = Vec::new();
        check_optional_settings(&mut checks).unwrap();

        assert_eq!(find(&checks, SSL_ENABLED_VAR).status, CheckStatus::Warning);
        assert_eq!(find(&checks, REQUEST_TIMEOUT_VAR).status, CheckStatus::Error);
        assert_eq!(find(&checks, MAX_RETRIES_VAR).status, CheckStatus::Error);
        assert_eq!(find(&checks, RETRY_DELAY_VAR).status, CheckStatus::Ok);
        assert_eq!(find(&checks, LOG_LEVEL_VAR).message, "DEBUG");
        clear_env();
    }

    #[tokio::test]
    #[serial]
    async fn test_repository_check_skipped_without_config() {
        clear_env();
        let mut checks = Vec::new();
        check_repository(&mut checks).await.unwrap();

        let check = find(&checks, check_names::CONNECTIVITY);
        assert_eq!(check.status, CheckStatus::Warning);
        assert!(check.message.starts_with("skipped"));
    }

    #[tokio::test]
    async fn test_connectivity_loads_document_classes() {
        let mock = Arc::new(with_document_classes(MockGraphqlExecutor::new()));
        let context = create_test_context(mock);

        let mut checks = Vec::new();
        check_connectivity(&mut checks, &context).await.unwrap();

        let check = find(&checks, check_names::CONNECTIVITY);
        assert_eq!(check.status, CheckStatus::Ok);
        assert_eq!(check.message, "loaded 2 Document classes from TestOS");
    }

    #[tokio::test]
    async fn test_connectivity_failure_is_error() {
        let context = create_test_context(Arc::new(MockGraphqlExecutor::new()));

        let mut checks = Vec::new();
        check_connectivity(&mut checks, &context).await.unwrap();

        let check = find(&checks, check_names::CONNECTIVITY);
        assert_eq!(check.status, CheckStatus::Error);
        assert!(check.fix.is_some());
    }
}
