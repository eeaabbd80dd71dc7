//! Session integration tests.
//!
//! Runs full question turns through the orchestrator against the mock
//! backend.

use std::sync::Arc;

use askql::api::MockBackend;
use askql::orchestrator::{answer_display, Orchestrator, SubmitResult, NO_ANSWER_FALLBACK};
use askql::plot::RenderDirective;
use serde_json::json;

fn expect_outcome(result: SubmitResult) -> askql::orchestrator::TurnOutcome {
    match result {
        SubmitResult::Completed(outcome) => outcome,
        other => panic!("Expected completed turn, got {other:?}"),
    }
}

#[tokio::test]
async fn test_blank_question_makes_no_network_call() {
    let mock = Arc::new(MockBackend::new());
    let mut orchestrator = Orchestrator::new(mock.clone());

    let result = orchestrator.submit("   ").await;

    match result {
        SubmitResult::Rejected(msg) => {
            assert!(msg.error);
            assert_eq!(msg.text, "Enter a question to continue.");
        }
        other => panic!("Expected rejection, got {other:?}"),
    }
    assert_eq!(mock.ask_calls(), 0);
    assert_eq!(mock.sql_calls(), 0);
}

#[tokio::test]
async fn test_ask_failure_shows_body_and_recovers() {
    let mock = Arc::new(MockBackend::new());
    mock.set_ask_error("503 Service Unavailable");
    let mut orchestrator = Orchestrator::new(mock.clone());

    let outcome = expect_outcome(orchestrator.submit("anything?").await);

    // The backend's error body is surfaced verbatim in the status.
    let status = outcome.query_status.unwrap();
    assert!(status.error);
    assert_eq!(status.text, "Error: 503 Service Unavailable");

    // The answer slot falls back to the placeholder and the plot area
    // stays cleared.
    assert_eq!(answer_display(&outcome.answer), NO_ANSWER_FALLBACK);
    assert!(outcome.directive.is_none());

    // The orchestrator accepts the next question.
    assert!(!orchestrator.is_busy());
    mock.set_ask_json(json!({"answer": "ok", "sql": ""}));
    let outcome = expect_outcome(orchestrator.submit("again?").await);
    assert_eq!(outcome.answer, "ok");
    assert!(outcome.query_status.is_none());
}

#[tokio::test]
async fn test_full_turn_to_table() {
    let mock = Arc::new(MockBackend::new());
    mock.set_ask_json(json!({
        "answer": "Three products sold the most.",
        "sql": "SELECT product, units FROM sales ORDER BY units DESC LIMIT 3",
        "plot_config": {"type": "table"}
    }));
    mock.set_sql_json(json!({
        "columns": ["product", "units"],
        "rows": [["widget", 42], ["gadget", 17], ["doohickey", 3]]
    }));
    let mut orchestrator = Orchestrator::new(mock.clone());

    let outcome = expect_outcome(orchestrator.submit("top sellers?").await);

    assert_eq!(outcome.answer, "Three products sold the most.");
    assert!(outcome.sql.starts_with("SELECT product"));
    assert_eq!(mock.ask_calls(), 1);
    assert_eq!(mock.sql_calls(), 1);

    match outcome.directive {
        Some(RenderDirective::Table(table)) => {
            assert_eq!(table.headers, vec!["product", "units"]);
            assert_eq!(table.rows.len(), 3);
        }
        other => panic!("Expected table directive, got {other:?}"),
    }
}

#[tokio::test]
async fn test_demo_turn_to_chart() {
    let mock = Arc::new(MockBackend::demo());
    let mut orchestrator = Orchestrator::new(mock);

    let outcome = expect_outcome(orchestrator.submit("revenue by month?").await);

    match outcome.directive {
        Some(RenderDirective::Chart(chart)) => {
            assert_eq!(chart.layout.title, "Revenue by month");
            assert_eq!(chart.traces.len(), 2);
        }
        other => panic!("Expected chart directive, got {other:?}"),
    }
}

#[tokio::test]
async fn test_sql_error_degrades_to_plot_status() {
    let mock = Arc::new(MockBackend::new());
    mock.set_ask_json(json!({
        "answer": "Here.",
        "sql": "SELECT nope",
        "plot_config": {
            "type": "line",
            "axis": {"x": {"value": "a"}, "y": {"value": "b"}}
        }
    }));
    mock.set_sql_error("column \"nope\" does not exist");
    let mut orchestrator = Orchestrator::new(mock.clone());

    let outcome = expect_outcome(orchestrator.submit("q").await);

    // The answer and SQL still display; only the plot area degrades.
    assert_eq!(outcome.answer, "Here.");
    assert_eq!(outcome.sql, "SELECT nope");
    match outcome.directive {
        Some(RenderDirective::Status(msg)) => {
            assert!(msg.error);
            assert_eq!(msg.text, "No SQL data available for chart.");
        }
        other => panic!("Expected status directive, got {other:?}"),
    }
}
