//! HTTP executor for the repository's GraphQL endpoint

use super::{GraphqlExecutor, GraphqlResponse};
use crate::config::ServerConfig;
use crate::error::{ContentMcpError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, COOKIE};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const XSRF_HEADER: &str = "ecm-cs-xsrf-token";
const XSRF_COOKIE: &str = "ECM-CS-XSRF-Token";

/// Executes GraphQL documents over HTTP with basic auth and retries
///
/// Transport failures and non-success statuses are retried `max_retries`
/// times with exponential backoff starting at `retry_delay`.
#[derive(Debug, Clone)]
pub struct HttpGraphqlClient {
    client: Client,
    server_url: String,
    username: String,
    password: String,
    xsrf_token: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl HttpGraphqlClient {
    /// Build a client from the server configuration
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .danger_accept_invalid_certs(!config.ssl_enabled)
            .build()
            .map_err(|e| ContentMcpError::Config(format!("Failed to build HTTP client: {e}")))?;

        if !config.ssl_enabled {
            tracing::warn!("SSL verification is disabled for {}", config.server_url);
        }

        Ok(Self {
            client,
            server_url: config.server_url.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            xsrf_token: xsrf_token(),
            max_retries: config.max_retries,
            retry_delay: config.retry_delay,
        })
    }

    fn xsrf_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let token = HeaderValue::from_str(&self.xsrf_token)
            .map_err(|e| ContentMcpError::Internal(format!("invalid XSRF token: {e}")))?;
        let cookie = HeaderValue::from_str(&format!("{XSRF_COOKIE}={}", self.xsrf_token))
            .map_err(|e| ContentMcpError::Internal(format!("invalid XSRF cookie: {e}")))?;
        headers.insert(XSRF_HEADER, token);
        headers.insert(COOKIE, cookie);
        Ok(headers)
    }

    /// Resolve a content download URL against the server
    ///
    /// Absolute URLs are used as they are; paths are appended to the server
    /// URL with its trailing `/graphql` removed.
    pub fn resolve_download_url(&self, download_url: &str) -> String {
        if url::Url::parse(download_url).is_ok() {
            return download_url.to_string();
        }
        let base = self.server_url.trim_end_matches('/');
        let base = base.strip_suffix("/graphql").unwrap_or(base);
        format!("{base}{download_url}")
    }

    fn backoff(&self, attempt: u32) -> Duration {
        self.retry_delay
            .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
    }

    /// Send a request built by `build`, retrying transport failures and
    /// non-success statuses
    async fn send_with_retry<F>(&self, what: &str, build: F) -> Result<reqwest::Response>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        let mut attempt = 0u32;
        loop {
            let failure = match build().send().await {
                Ok(response) if response.status().is_success() => return Ok(response),
                Ok(response) => {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();
                    format!("{what} failed with status code {status}: {body}")
                }
                Err(e) => format!("{what} failed: {e}"),
            };

            attempt += 1;
            if attempt > self.max_retries {
                tracing::error!("{} after {} retries", failure, self.max_retries);
                return Err(ContentMcpError::Transport(format!(
                    "{failure} (after {} retries)",
                    self.max_retries
                )));
            }

            let delay = self.backoff(attempt);
            tracing::warn!(
                "{}; retrying in {:?} (attempt {}/{})",
                failure,
                delay,
                attempt,
                self.max_retries
            );
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl GraphqlExecutor for HttpGraphqlClient {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value> {
        let body = json!({ "query": query, "variables": variables });
        let headers = self.xsrf_headers()?;
        let operation = super::operation_name(query).unwrap_or("anonymous");
        tracing::debug!("Executing GraphQL operation {}", operation);

        let response = self
            .send_with_retry("GraphQL request", || {
                self.client
                    .post(&self.server_url)
                    .basic_auth(&self.username, Some(&self.password))
                    .headers(headers.clone())
                    .header(CONTENT_TYPE, "application/json")
                    .json(&body)
            })
            .await?;

        let envelope: Value = response
            .json()
            .await
            .map_err(|e| ContentMcpError::Transport(format!("Invalid GraphQL response: {e}")))?;

        let parsed = GraphqlResponse::from_envelope(envelope.clone());
        if parsed.has_errors() {
            tracing::warn!(
                "GraphQL operation {} returned errors: {}",
                operation,
                parsed.error_message()
            );
        }
        Ok(envelope)
    }

    async fn download_text(&self, url: &str) -> Result<String> {
        let url = self.resolve_download_url(url);
        let headers = self.xsrf_headers()?;
        tracing::debug!("Downloading text content from {}", url);

        let response = self
            .send_with_retry("Content download", || {
                self.client
                    .get(&url)
                    .basic_auth(&self.username, Some(&self.password))
                    .headers(headers.clone())
            })
            .await?;

        response
            .text()
            .await
            .map_err(|e| ContentMcpError::Transport(format!("Failed to read content: {e}")))
    }
}

/// Per-client token echoed in both header and cookie
fn xsrf_token() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{:032x}", nanos ^ ((std::process::id() as u128) << 64))
}
