//! Result table widget.
//!
//! Renders a resolved table view with column headers, auto-sized columns,
//! and box-drawing borders.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::plot::TableView;

/// Maximum width for any column.
const MAX_COLUMN_WIDTH: usize = 40;

/// Minimum width for any column.
const MIN_COLUMN_WIDTH: usize = 4;

/// Widget for rendering a table view.
pub struct DataTable<'a> {
    table: &'a TableView,
    /// Rows scrolled off the top.
    scroll: usize,
}

impl<'a> DataTable<'a> {
    /// Creates a new data table widget.
    pub fn new(table: &'a TableView, scroll: usize) -> Self {
        Self { table, scroll }
    }

    /// Calculates the optimal width for each column.
    fn calculate_column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .table
            .headers
            .iter()
            .map(|h| h.len().max(MIN_COLUMN_WIDTH))
            .collect();

        for row in &self.table.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.len());
                }
            }
        }

        widths.iter().map(|&w| w.min(MAX_COLUMN_WIDTH)).collect()
    }

    /// Truncates a string to fit within the given width, adding ellipsis if needed.
    fn truncate(s: &str, max_width: usize) -> String {
        if s.chars().count() <= max_width {
            s.to_string()
        } else if max_width <= 3 {
            s.chars().take(max_width).collect()
        } else {
            let head: String = s.chars().take(max_width - 3).collect();
            format!("{}...", head)
        }
    }

    /// Renders the table to lines for embedding in the result panel.
    pub fn render_to_lines(&self, available_width: usize) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        if self.table.headers.is_empty() {
            lines.push(Line::from(Span::styled(
                "(empty result)",
                Style::default().fg(Color::DarkGray),
            )));
            return lines;
        }

        let widths = self.calculate_column_widths();

        // Scale down when the full table would not fit.
        let total_width: usize = widths.iter().sum::<usize>() + widths.len() * 3 + 1;
        let scale_factor = if total_width > available_width && available_width > 0 {
            available_width as f64 / total_width as f64
        } else {
            1.0
        };
        let adjusted_widths: Vec<usize> = widths
            .iter()
            .map(|&w| ((w as f64 * scale_factor) as usize).max(MIN_COLUMN_WIDTH))
            .collect();

        lines.push(self.render_border(&adjusted_widths, '┌', '┬', '┐'));
        lines.push(self.render_header_row(&adjusted_widths));
        lines.push(self.render_border(&adjusted_widths, '├', '┼', '┤'));

        for row in self.table.rows.iter().skip(self.scroll) {
            lines.push(self.render_data_row(row, &adjusted_widths));
        }

        lines.push(self.render_border(&adjusted_widths, '└', '┴', '┘'));

        let footer = format!(
            "{} row{}",
            self.table.rows.len(),
            if self.table.rows.len() == 1 { "" } else { "s" },
        );
        lines.push(Line::from(Span::styled(
            footer,
            Style::default().fg(Color::DarkGray),
        )));

        lines
    }

    /// Renders a horizontal border line.
    fn render_border(&self, widths: &[usize], left: char, mid: char, right: char) -> Line<'a> {
        let mut border = String::new();
        border.push(left);

        for (i, &width) in widths.iter().enumerate() {
            border.push_str(&"─".repeat(width + 2));
            if i < widths.len() - 1 {
                border.push(mid);
            }
        }

        border.push(right);

        Line::from(Span::styled(border, Style::default().fg(Color::DarkGray)))
    }

    /// Renders the header row with column labels.
    fn render_header_row(&self, widths: &[usize]) -> Line<'a> {
        let mut spans = Vec::new();
        spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));

        for (i, header) in self.table.headers.iter().enumerate() {
            let width = widths.get(i).copied().unwrap_or(MIN_COLUMN_WIDTH);
            let name = Self::truncate(header, width);
            let padded = format!(" {:width$} ", name, width = width);

            spans.push(Span::styled(
                padded,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }

        Line::from(spans)
    }

    /// Renders a data row.
    fn render_data_row(&self, row: &[String], widths: &[usize]) -> Line<'a> {
        let mut spans = Vec::new();
        spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));

        for (i, &width) in widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let truncated = Self::truncate(cell, width);
            let padded = format!(" {:width$} ", truncated, width = width);

            let style = if cell.is_empty() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };

            spans.push(Span::styled(padded, style));
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }

        Line::from(spans)
    }
}

impl Widget for DataTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.render_to_lines(area.width as usize);

        for (i, line) in lines.iter().enumerate() {
            if i >= area.height as usize {
                break;
            }
            let y = area.y + i as u16;
            buf.set_line(area.x, y, line, area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> TableView {
        TableView {
            headers: vec!["id".to_string(), "name".to_string()],
            rows: vec![
                vec!["1".to_string(), "Alice".to_string()],
                vec!["2".to_string(), String::new()],
            ],
        }
    }

    #[test]
    fn test_calculate_column_widths() {
        let table = sample_table();
        let widget = DataTable::new(&table, 0);
        let widths = widget.calculate_column_widths();

        assert_eq!(widths, vec![4, 5]); // "id" padded to min, "Alice"
    }

    #[test]
    fn test_truncate() {
        assert_eq!(DataTable::truncate("hello", 10), "hello");
        assert_eq!(DataTable::truncate("hello world", 8), "hello...");
        assert_eq!(DataTable::truncate("hello", 3), "hel");
    }

    #[test]
    fn test_render_to_lines_shape() {
        let table = sample_table();
        let widget = DataTable::new(&table, 0);
        let lines = widget.render_to_lines(80);

        // Top border, header, separator, 2 rows, bottom border, footer.
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_scroll_skips_rows() {
        let table = sample_table();
        let widget = DataTable::new(&table, 1);
        let lines = widget.render_to_lines(80);

        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_empty_table() {
        let table = TableView {
            headers: vec![],
            rows: vec![],
        };
        let lines = DataTable::new(&table, 0).render_to_lines(80);
        assert_eq!(lines.len(), 1);
    }
}
