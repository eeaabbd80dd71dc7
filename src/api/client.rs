//! HTTP client for the assistant backend.
//!
//! Implements the `ApiBackend` trait over reqwest against a configurable
//! base URL. Non-2xx responses surface their body text verbatim so the UI
//! can display exactly what the backend said.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::api::types::{AskRequest, AskResponse, RunSqlRequest, SqlResult};
use crate::error::{AskqlError, Result};

/// The two backend operations the client depends on.
///
/// Abstracted as a trait so tests and `--mock` mode can substitute a
/// canned implementation.
#[async_trait]
pub trait ApiBackend: Send + Sync {
    /// Sends a question to `/ask`.
    async fn ask(&self, question: &str) -> Result<AskResponse>;

    /// Executes SQL via `/run_sql`.
    async fn run_sql(&self, sql: &str) -> Result<SqlResult>;
}

/// Backend client configuration.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the assistant backend.
    pub base_url: String,
    /// Optional request timeout. None matches the source behavior of
    /// waiting indefinitely on a hung backend.
    pub timeout_secs: Option<u64>,
}

impl BackendConfig {
    /// Creates a config for the given base URL with no timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: None,
        }
    }

    /// Sets a request timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}

/// reqwest-based backend client.
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Creates a new backend client from the given configuration.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| AskqlError::config(format!("Invalid backend URL: {e}")))?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AskqlError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Appends an endpoint path to the base URL, keeping any path component
    /// the base already carries (e.g. `http://host/api` + `/ask`).
    fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// POSTs a JSON body to the given path and parses the JSON response.
    ///
    /// A non-2xx status yields an error carrying the response body text (or
    /// a generic message when the body is empty/unreadable).
    async fn post_json<B, T>(&self, path: &str, body: &B, what: &str) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(path);

        debug!("POST {}", url);
        let response = self
            .client
            .post(url.as_str())
            .json(body)
            .send()
            .await
            .map_err(|e| AskqlError::api(format!("{what} request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AskqlError::api(format!("Failed to read {what} response: {e}")))?;

        if !status.is_success() {
            let message = if text.trim().is_empty() {
                format!("{what} failed ({status})")
            } else {
                text
            };
            return Err(AskqlError::api(message));
        }

        serde_json::from_str(&text)
            .map_err(|e| AskqlError::api(format!("Failed to parse {what} response: {e}")))
    }
}

#[async_trait]
impl ApiBackend for HttpBackend {
    async fn ask(&self, question: &str) -> Result<AskResponse> {
        let request = AskRequest {
            question: question.to_string(),
        };
        self.post_json("/ask", &request, "ask").await
    }

    async fn run_sql(&self, sql: &str) -> Result<SqlResult> {
        let request = RunSqlRequest {
            sql: sql.to_string(),
        };
        self.post_json("/run_sql", &request, "run_sql")
            .await
            .map_err(|e| AskqlError::sql(e.to_string()))
    }
}
