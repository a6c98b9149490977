//! Environment-driven server configuration

use crate::common::env_loader::{
    load_env_flag, load_env_parsed, load_env_required, load_env_string,
};
use crate::error::{ContentMcpError, Result};
use std::fmt;
use std::time::Duration;

/// Environment variable holding the GraphQL endpoint URL
pub const SERVER_URL_VAR: &str = "SERVER_URL";
/// Environment variable holding the repository user name
pub const USERNAME_VAR: &str = "USERNAME";
/// Environment variable holding the repository password
pub const PASSWORD_VAR: &str = "PASSWORD";
/// Environment variable holding the object store identifier
pub const OBJECT_STORE_VAR: &str = "OBJECT_STORE";
/// Environment variable toggling certificate verification
pub const SSL_ENABLED_VAR: &str = "SSL_ENABLED";
/// Environment variable holding the request timeout in seconds
pub const REQUEST_TIMEOUT_VAR: &str = "REQUEST_TIMEOUT";
/// Environment variable holding the retry count
pub const MAX_RETRIES_VAR: &str = "MAX_RETRIES";
/// Environment variable holding the initial retry delay in seconds
pub const RETRY_DELAY_VAR: &str = "RETRY_DELAY";
/// Environment variable holding the log level
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Variables that must be set for the server to start
pub const REQUIRED_VARS: [&str; 4] = [SERVER_URL_VAR, USERNAME_VAR, PASSWORD_VAR, OBJECT_STORE_VAR];

const DEFAULT_REQUEST_TIMEOUT_SECS: f64 = 30.0;
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_RETRY_DELAY_SECS: f64 = 1.0;
const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Connection and runtime settings for the server
#[derive(Clone)]
pub struct ServerConfig {
    /// GraphQL endpoint
    pub server_url: String,
    /// Basic-auth user
    pub username: String,
    /// Basic-auth password
    pub password: String,
    /// Object store every query runs against
    pub object_store: String,
    /// Verify server certificates
    pub ssl_enabled: bool,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each further retry
    pub retry_delay: Duration,
    /// Log level name (`INFO`, `DEBUG`, ...)
    pub log_level: String,
}

impl ServerConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        let server_url = load_env_required(SERVER_URL_VAR)?;
        let username = load_env_required(USERNAME_VAR)?;
        let password = load_env_required(PASSWORD_VAR)?;
        let object_store = load_env_required(OBJECT_STORE_VAR)?;

        let request_timeout = seconds(
            REQUEST_TIMEOUT_VAR,
            load_env_parsed(REQUEST_TIMEOUT_VAR, DEFAULT_REQUEST_TIMEOUT_SECS),
        )?;
        let retry_delay = seconds(
            RETRY_DELAY_VAR,
            load_env_parsed(RETRY_DELAY_VAR, DEFAULT_RETRY_DELAY_SECS),
        )?;

        Ok(Self {
            server_url,
            username,
            password,
            object_store,
            ssl_enabled: load_env_flag(SSL_ENABLED_VAR, true),
            request_timeout,
            max_retries: load_env_parsed(MAX_RETRIES_VAR, DEFAULT_MAX_RETRIES),
            retry_delay,
            log_level: load_env_string(LOG_LEVEL_VAR, DEFAULT_LOG_LEVEL).to_uppercase(),
        })
    }

    /// Names of required variables that are unset or empty
    pub fn missing_variables() -> Vec<&'static str> {
        REQUIRED_VARS
            .iter()
            .copied()
            .filter(|key| load_env_required(key).is_err())
            .collect()
    }
}

fn seconds(key: &str, value: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(value)
        .map_err(|_| ContentMcpError::Config(format!("{key} must be a non-negative number of seconds")))
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("server_url", &self.server_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("object_store", &self.object_store)
            .field("ssl_enabled", &self.ssl_enabled)
            .field("request_timeout", &self.request_timeout)
            .field("max_retries", &self.max_retries)
            .field("retry_delay", &self.retry_delay)
            .field("log_level", &self.log_level)
            .finish()
    }
}
