//! Mock backend for tests and offline demo mode.
//!
//! Mirrors the real backend's contract with canned responses and call
//! counters, so orchestration behavior (including "no network call" cases)
//! can be asserted without a server.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::api::client::ApiBackend;
use crate::api::types::{AskResponse, SqlResult};
use crate::error::{AskqlError, Result};

/// Canned responses for the two endpoints.
pub struct MockBackend {
    ask_response: Mutex<Result<AskResponse>>,
    sql_response: Mutex<Result<SqlResult>>,
    ask_calls: AtomicUsize,
    sql_calls: AtomicUsize,
}

impl MockBackend {
    /// Creates a mock that returns empty responses.
    pub fn new() -> Self {
        Self {
            ask_response: Mutex::new(Ok(AskResponse::default())),
            sql_response: Mutex::new(Ok(serde_json::from_value(json!({
                "columns": [],
                "rows": []
            }))
            .expect("valid result set"))),
            ask_calls: AtomicUsize::new(0),
            sql_calls: AtomicUsize::new(0),
        }
    }

    /// Creates a mock with demo data for `--mock` mode: a canned answer,
    /// SQL, line-chart config, and a matching result set.
    pub fn demo() -> Self {
        let mock = Self::new();
        mock.set_ask_json(json!({
            "answer": "Monthly revenue grew steadily, with the West region leading.",
            "sql": "SELECT month, region, revenue FROM monthly_revenue ORDER BY month",
            "plot_config": {
                "type": "line",
                "title": "Revenue by month",
                "axis": {
                    "x": {"value": "month", "name": "Month"},
                    "y": {"value": "revenue", "name": "Revenue"},
                    "series": {"value": "region"}
                }
            }
        }));
        mock.set_sql_json(json!({
            "columns": ["month", "region", "revenue"],
            "rows": [
                ["2025-01", "West", 1200], ["2025-01", "East", 900],
                ["2025-02", "West", 1350], ["2025-02", "East", 980],
                ["2025-03", "West", 1500], ["2025-03", "East", 1010]
            ]
        }));
        mock
    }

    /// Sets the `/ask` response from a JSON value.
    pub fn set_ask_json(&self, value: serde_json::Value) {
        let response = serde_json::from_value(value).expect("valid ask response");
        *self.ask_response.lock().unwrap() = Ok(response);
    }

    /// Makes `/ask` fail with the given body text.
    pub fn set_ask_error(&self, body: impl Into<String>) {
        *self.ask_response.lock().unwrap() = Err(AskqlError::api(body.into()));
    }

    /// Sets the `/run_sql` response from a JSON value.
    pub fn set_sql_json(&self, value: serde_json::Value) {
        let response = serde_json::from_value(value).expect("valid sql result");
        *self.sql_response.lock().unwrap() = Ok(response);
    }

    /// Makes `/run_sql` fail with the given body text.
    pub fn set_sql_error(&self, body: impl Into<String>) {
        *self.sql_response.lock().unwrap() = Err(AskqlError::sql(body.into()));
    }

    /// Number of `/ask` calls made.
    pub fn ask_calls(&self) -> usize {
        self.ask_calls.load(Ordering::SeqCst)
    }

    /// Number of `/run_sql` calls made.
    pub fn sql_calls(&self) -> usize {
        self.sql_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn clone_result<T: Clone>(result: &Result<T>) -> Result<T> {
    match result {
        Ok(v) => Ok(v.clone()),
        Err(AskqlError::Api(m)) => Err(AskqlError::api(m.clone())),
        Err(AskqlError::Sql(m)) => Err(AskqlError::sql(m.clone())),
        Err(e) => Err(AskqlError::internal(e.to_string())),
    }
}

#[async_trait]
impl ApiBackend for MockBackend {
    async fn ask(&self, _question: &str) -> Result<AskResponse> {
        self.ask_calls.fetch_add(1, Ordering::SeqCst);
        clone_result(&self.ask_response.lock().unwrap())
    }

    async fn run_sql(&self, _sql: &str) -> Result<SqlResult> {
        self.sql_calls.fetch_add(1, Ordering::SeqCst);
        clone_result(&self.sql_response.lock().unwrap())
    }
}
