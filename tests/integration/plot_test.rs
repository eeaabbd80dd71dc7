//! Plot-rendering integration tests.
//!
//! Drives `render_plot` with wire-format JSON the way the backend sends
//! it, and checks which visual encoding comes out.

use askql::api::types::{PlotConfig, SqlResult};
use askql::plot::{render_plot, RenderDirective, Trace};
use pretty_assertions::assert_eq;
use serde_json::json;

fn config(value: serde_json::Value) -> PlotConfig {
    serde_json::from_value(value).unwrap()
}

fn result(value: serde_json::Value) -> SqlResult {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_first_result_set_is_primary() {
    let cfg = config(json!({"type": "table"}));
    let res = result(json!({
        "result_sets": [
            {"columns": ["a"], "rows": [[1], [2]]},
            {"columns": ["ignored"], "rows": [[9]]}
        ]
    }));

    match render_plot(Some(&cfg), Some(&res)) {
        RenderDirective::Table(table) => {
            assert_eq!(table.headers, vec!["a"]);
            assert_eq!(table.rows.len(), 2);
        }
        other => panic!("Expected table directive, got {other:?}"),
    }
}

#[test]
fn test_rows_zip_positionally_with_columns() {
    let cfg = config(json!({"type": "table"}));
    let res = result(json!({
        "columns": ["name", "total"],
        "rows": [["alice", 10], ["bob", null]]
    }));

    match render_plot(Some(&cfg), Some(&res)) {
        RenderDirective::Table(table) => {
            assert_eq!(table.rows[0], vec!["alice", "10"]);
            // Null renders as an empty cell.
            assert_eq!(table.rows[1], vec!["bob", ""]);
        }
        other => panic!("Expected table directive, got {other:?}"),
    }
}

#[test]
fn test_column_directive_selects_and_orders() {
    let cfg = config(json!({
        "type": "table",
        "columns": [
            {"value": "total", "name": "Total"},
            {"value": "name"}
        ]
    }));
    let res = result(json!({
        "columns": ["name", "total"],
        "rows": [["alice", 10]]
    }));

    match render_plot(Some(&cfg), Some(&res)) {
        RenderDirective::Table(table) => {
            assert_eq!(table.headers, vec!["Total", "name"]);
            assert_eq!(table.rows[0], vec!["10", "alice"]);
        }
        other => panic!("Expected table directive, got {other:?}"),
    }
}

#[test]
fn test_bar_swaps_axis_roles() {
    let res = result(json!({
        "columns": ["region", "revenue"],
        "rows": [["West", 100], ["East", 80]]
    }));
    let axis = json!({"x": {"value": "region"}, "y": {"value": "revenue"}});

    let bar_cfg = config(json!({"type": "bar", "axis": axis.clone()}));
    match render_plot(Some(&bar_cfg), Some(&res)) {
        RenderDirective::Chart(chart) => match &chart.traces[0] {
            Trace::HorizontalBar {
                labels, lengths, ..
            } => {
                // Categories become labels, values become bar lengths.
                assert_eq!(labels, &vec![json!("West"), json!("East")]);
                assert_eq!(lengths, &vec![json!(100), json!(80)]);
            }
            other => panic!("Expected bar trace, got {other:?}"),
        },
        other => panic!("Expected chart directive, got {other:?}"),
    }

    let line_cfg = config(json!({"type": "line", "axis": axis}));
    match render_plot(Some(&line_cfg), Some(&res)) {
        RenderDirective::Chart(chart) => match &chart.traces[0] {
            Trace::Line { xs, ys, .. } => {
                assert_eq!(xs, &vec![json!("West"), json!("East")]);
                assert_eq!(ys, &vec![json!(100), json!(80)]);
            }
            other => panic!("Expected line trace, got {other:?}"),
        },
        other => panic!("Expected chart directive, got {other:?}"),
    }
}

#[test]
fn test_series_grouping_first_seen_order() {
    let cfg = config(json!({
        "type": "line",
        "axis": {
            "x": {"value": "month"},
            "y": {"value": "revenue"},
            "series": {"value": "region"}
        }
    }));
    let res = result(json!({
        "columns": ["month", "region", "revenue"],
        "rows": [
            ["jan", "South", 5],
            ["jan", "North", 7],
            ["feb", "South", 6],
            ["feb", "North", 8]
        ]
    }));

    match render_plot(Some(&cfg), Some(&res)) {
        RenderDirective::Chart(chart) => {
            assert_eq!(chart.traces.len(), 2);
            assert_eq!(chart.traces[0].name(), "South");
            assert_eq!(chart.traces[1].name(), "North");
            match &chart.traces[0] {
                Trace::Line { xs, ys, .. } => {
                    assert_eq!(xs, &vec![json!("jan"), json!("feb")]);
                    assert_eq!(ys, &vec![json!(5), json!(6)]);
                }
                other => panic!("Expected line trace, got {other:?}"),
            }
        }
        other => panic!("Expected chart directive, got {other:?}"),
    }
}

#[test]
fn test_pie_labels_from_series_values_from_y() {
    let cfg = config(json!({
        "type": "pie",
        "title": "Share",
        "axis": {"y": {"value": "count"}, "series": {"value": "kind"}}
    }));
    let res = result(json!({
        "columns": ["kind", "count"],
        "rows": [["a", 3], ["b", 1]]
    }));

    match render_plot(Some(&cfg), Some(&res)) {
        RenderDirective::Chart(chart) => {
            assert_eq!(chart.layout.title, "Share");
            match &chart.traces[0] {
                Trace::Pie { labels, values } => {
                    assert_eq!(labels, &vec!["a".to_string(), "b".to_string()]);
                    assert_eq!(values, &vec![json!(3), json!(1)]);
                }
                other => panic!("Expected pie trace, got {other:?}"),
            }
        }
        other => panic!("Expected chart directive, got {other:?}"),
    }
}

#[test]
fn test_none_type_reports_reason_as_info() {
    let cfg = config(json!({
        "type": "none",
        "reason": "The answer is a single number."
    }));
    let res = result(json!({"columns": ["n"], "rows": [[42]]}));

    match render_plot(Some(&cfg), Some(&res)) {
        RenderDirective::Status(msg) => {
            assert_eq!(msg.text, "The answer is a single number.");
            assert!(!msg.error);
        }
        other => panic!("Expected status directive, got {other:?}"),
    }
}
