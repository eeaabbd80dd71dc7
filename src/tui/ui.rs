//! UI rendering for the TUI.
//!
//! Defines the layout and renders all UI components.

use super::app::{App, Focus};
use super::highlight::highlight_sql;
use super::widgets::{chart, data_table, header, input};
use crate::orchestrator::answer_display;
use crate::plot::RenderDirective;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Renders the entire UI.
pub fn render(frame: &mut Frame, app: &App, backend_info: &str) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Question input
            Constraint::Length(1), // Status line
            Constraint::Length(7), // Answer
            Constraint::Length(7), // SQL
            Constraint::Min(5),    // Result (table/chart)
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_header(frame, main_layout[0], backend_info);
    render_question(frame, main_layout[1], app);
    render_status(frame, main_layout[2], app);
    render_answer(frame, main_layout[3], app);
    render_sql(frame, main_layout[4], app);
    render_result(frame, main_layout[5], app);
    render_hints(frame, main_layout[6]);
}

/// Renders the header bar.
fn render_header(frame: &mut Frame, area: Rect, backend_info: &str) {
    frame.render_widget(header::Header::new(backend_info), area);
}

/// Renders the question input and positions the cursor.
fn render_question(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Question;
    let cursor_col = app.input.text[..app.input.cursor].chars().count();
    let widget = input::QuestionInput::new(&app.input.text, cursor_col, focused, app.loading);
    frame.render_widget(widget, area);

    if focused && !app.loading {
        // Account for border (1) and prompt "> " (2)
        let inner_width = area.width.saturating_sub(4) as usize;
        let offset = input::calculate_scroll_offset(cursor_col, inner_width);
        let cursor_x = area.x + 1 + 2 + (cursor_col - offset) as u16;
        let cursor_y = area.y + 1;
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Renders the query-status line.
fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let Some(status) = &app.query_status else {
        return;
    };

    let style = if status.error {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", status.text), style)),
        area,
    );
}

/// Renders the answer panel.
fn render_answer(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Answer;
    let block = panel_block(" Answer ", focused);

    let paragraph = if app.has_turn {
        Paragraph::new(answer_display(&app.answer).to_string())
            .wrap(Wrap { trim: false })
            .scroll((app.answer_scroll as u16, 0))
    } else {
        Paragraph::new(Span::styled(
            "Ask a question about your data.",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(paragraph.block(block), area);
}

/// Renders the generated SQL with syntax highlighting.
fn render_sql(frame: &mut Frame, area: Rect, app: &App) {
    let block = panel_block(" SQL (Ctrl+Y copies) ", false);

    let paragraph = if app.sql.is_empty() {
        Paragraph::new(Span::styled(
            "(no query)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(highlight_sql(&app.sql)).wrap(Wrap { trim: false })
    };
    frame.render_widget(paragraph.block(block), area);
}

/// Renders the result panel: plot status, table, or chart.
fn render_result(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Result;
    let block = panel_block(" Result ", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.directive {
        None => {
            let placeholder = if app.has_turn {
                ""
            } else {
                "Results appear here."
            };
            frame.render_widget(
                Paragraph::new(Span::styled(
                    placeholder,
                    Style::default().fg(Color::DarkGray),
                )),
                inner,
            );
        }
        Some(RenderDirective::Status(status)) => {
            let style = if status.error {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            frame.render_widget(
                Paragraph::new(Span::styled(status.text.clone(), style)).wrap(Wrap { trim: false }),
                inner,
            );
        }
        Some(RenderDirective::Table(table)) => {
            frame.render_widget(data_table::DataTable::new(table, app.result_scroll), inner);
        }
        Some(RenderDirective::Chart(view)) => {
            frame.render_widget(
                chart::ChartPanel::new(view, app.resize, app.result_scroll),
                inner,
            );
        }
    }
}

/// Renders the key-hint footer.
fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" ask  "),
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(" focus  "),
        Span::styled("↑/↓", Style::default().fg(Color::Cyan)),
        Span::raw(" scroll  "),
        Span::styled("Ctrl+Y", Style::default().fg(Color::Cyan)),
        Span::raw(" copy SQL  "),
        Span::styled("Ctrl+Q", Style::default().fg(Color::Cyan)),
        Span::raw(" quit"),
    ]);
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Builds a bordered panel block with a focus-aware border color.
fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}
