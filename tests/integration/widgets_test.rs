//! Widget integration tests.
//!
//! Renders directives produced by the full pipeline into a ratatui buffer
//! and checks what lands on screen.

use std::sync::Arc;

use askql::api::MockBackend;
use askql::orchestrator::Orchestrator;
use askql::plot::RenderDirective;
use askql::tui::app::{App, ResizeHandle};
use askql::tui::widgets::{chart::ChartPanel, data_table::DataTable};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use serde_json::json;

fn buffer_text(buf: &Buffer) -> String {
    let mut text = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[tokio::test]
async fn test_table_turn_renders_headers_and_cells() {
    let mock = Arc::new(MockBackend::new());
    mock.set_ask_json(json!({
        "answer": "Two regions.",
        "sql": "SELECT region, total FROM t",
        "plot_config": {"type": "table"}
    }));
    mock.set_sql_json(json!({
        "columns": ["region", "total"],
        "rows": [["West", 10], ["East", 20]]
    }));
    let mut orchestrator = Orchestrator::new(mock);

    let mut app = App::new(80, 24);
    app.apply_submit(orchestrator.submit("totals?").await);

    let table = match &app.directive {
        Some(RenderDirective::Table(table)) => table,
        other => panic!("Expected table directive, got {other:?}"),
    };

    let mut buf = Buffer::empty(Rect::new(0, 0, 40, 8));
    DataTable::new(table, app.result_scroll).render(buf.area, &mut buf);

    let text = buffer_text(&buf);
    assert!(text.contains("region"));
    assert!(text.contains("West"));
    assert!(text.contains("2 rows"));
}

#[tokio::test]
async fn test_demo_chart_renders_legend_and_title() {
    let mock = Arc::new(MockBackend::demo());
    let mut orchestrator = Orchestrator::new(mock);

    let mut app = App::new(80, 24);
    app.apply_submit(orchestrator.submit("revenue?").await);

    let chart = match &app.directive {
        Some(RenderDirective::Chart(chart)) => chart,
        other => panic!("Expected chart directive, got {other:?}"),
    };

    let mut buf = Buffer::empty(Rect::new(0, 0, 80, 20));
    ChartPanel::new(chart, app.resize, 0).render(buf.area, &mut buf);

    let text = buffer_text(&buf);
    assert!(text.contains("Revenue by month"));
    assert!(text.contains("West"));
    assert!(text.contains("East"));
}

#[tokio::test]
async fn test_bar_chart_renders_bars() {
    let mock = Arc::new(MockBackend::new());
    mock.set_ask_json(json!({
        "answer": "a",
        "sql": "SELECT 1",
        "plot_config": {
            "type": "bar",
            "axis": {"x": {"value": "region"}, "y": {"value": "total"}}
        }
    }));
    mock.set_sql_json(json!({
        "columns": ["region", "total"],
        "rows": [["West", 10], ["East", 5]]
    }));
    let mut orchestrator = Orchestrator::new(mock);

    let mut app = App::new(80, 24);
    app.apply_submit(orchestrator.submit("q").await);

    let chart = match &app.directive {
        Some(RenderDirective::Chart(chart)) => chart,
        other => panic!("Expected chart directive, got {other:?}"),
    };

    let panel = ChartPanel::new(chart, ResizeHandle::acquire(80, 24), 0);
    let lines = panel.render_to_lines(60);
    assert_eq!(lines.len(), 2);

    let text: String = lines
        .iter()
        .flat_map(|l| l.spans.iter())
        .map(|s| s.content.to_string())
        .collect();
    assert!(text.contains("West"));
    assert!(text.contains('█'));
}

#[tokio::test]
async fn test_resize_replaces_handle_used_for_charts() {
    let mock = Arc::new(MockBackend::demo());
    let mut orchestrator = Orchestrator::new(mock);

    let mut app = App::new(80, 24);
    app.apply_submit(orchestrator.submit("revenue?").await);

    app.acquire_resize(120, 40);
    assert_eq!(app.resize, ResizeHandle::acquire(120, 40));
}
