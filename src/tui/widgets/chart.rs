//! Chart widget.
//!
//! Draws line traces with ratatui's braille chart, and horizontal bars and
//! pies as text lines (one bar per row, scaled to the panel width). Values
//! that cannot be read as numbers draw as zero-length bars; the rendering
//! decision guarantees at least one numeric value before a chart is shown.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};
use serde_json::Value;

use crate::data::{display_value, value_as_f64};
use crate::plot::{ChartView, Trace};
use crate::tui::app::ResizeHandle;

/// Trace colors, cycled in order.
const TRACE_COLORS: &[Color] = &[
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Red,
    Color::Blue,
];

fn trace_color(index: usize) -> Color {
    TRACE_COLORS[index % TRACE_COLORS.len()]
}

/// Chart panel widget.
pub struct ChartPanel<'a> {
    chart: &'a ChartView,
    handle: ResizeHandle,
    /// Lines scrolled off the top (bar/pie modes only).
    scroll: usize,
}

/// Prepared data for the braille line chart.
struct LineChartData {
    /// One (name, points) pair per trace.
    series: Vec<(String, Vec<(f64, f64)>)>,
    /// X tick labels: category names, or formatted min/mid/max.
    x_labels: Vec<String>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

impl<'a> ChartPanel<'a> {
    /// Creates a new chart panel widget.
    pub fn new(chart: &'a ChartView, handle: ResizeHandle, scroll: usize) -> Self {
        Self {
            chart,
            handle,
            scroll,
        }
    }

    fn is_line_chart(&self) -> bool {
        self.chart
            .traces
            .iter()
            .all(|t| matches!(t, Trace::Line { .. }))
            && !self.chart.traces.is_empty()
    }

    /// Maps x values to numeric positions.
    ///
    /// When every x across every trace parses as a number, positions are
    /// the values themselves; otherwise distinct display values become
    /// categories in first-seen order and positions are category indices.
    fn build_line_data(&self) -> LineChartData {
        let all_xs: Vec<&Value> = self
            .chart
            .traces
            .iter()
            .filter_map(|t| match t {
                Trace::Line { xs, .. } => Some(xs.iter()),
                _ => None,
            })
            .flatten()
            .collect();
        let numeric_x =
            !all_xs.is_empty() && all_xs.iter().all(|&v| value_as_f64(Some(v)).is_some());

        let mut categories: Vec<String> = Vec::new();
        if !numeric_x {
            for &x in &all_xs {
                let label = display_value(Some(x));
                if !categories.contains(&label) {
                    categories.push(label);
                }
            }
        }

        let position = |x: &Value| -> Option<f64> {
            if numeric_x {
                value_as_f64(Some(x))
            } else {
                let label = display_value(Some(x));
                categories.iter().position(|c| *c == label).map(|i| i as f64)
            }
        };

        let mut series = Vec::new();
        for trace in &self.chart.traces {
            if let Trace::Line { name, xs, ys } = trace {
                let points: Vec<(f64, f64)> = xs
                    .iter()
                    .zip(ys.iter())
                    .filter_map(|(x, y)| Some((position(x)?, value_as_f64(Some(y))?)))
                    .collect();
                series.push((name.clone(), points));
            }
        }

        let (x_bounds, y_bounds) = bounds(&series);
        let x_labels = if numeric_x {
            vec![
                format_tick(x_bounds[0]),
                format_tick((x_bounds[0] + x_bounds[1]) / 2.0),
                format_tick(x_bounds[1]),
            ]
        } else {
            tick_categories(&categories, self.handle.width)
        };

        LineChartData {
            series,
            x_labels,
            x_bounds,
            y_bounds,
        }
    }

    fn render_line_chart(&self, area: Rect, buf: &mut Buffer) {
        let data = self.build_line_data();

        let datasets: Vec<Dataset> = data
            .series
            .iter()
            .enumerate()
            .map(|(i, (name, points))| {
                Dataset::default()
                    .name(name.clone())
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(trace_color(i)))
                    .data(points)
            })
            .collect();

        let y_labels = vec![
            format_tick(data.y_bounds[0]),
            format_tick((data.y_bounds[0] + data.y_bounds[1]) / 2.0),
            format_tick(data.y_bounds[1]),
        ];

        let mut block = Block::default().borders(Borders::ALL);
        if !self.chart.layout.title.is_empty() {
            block = block.title(Span::styled(
                format!(" {} ", self.chart.layout.title),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }

        Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds(data.x_bounds)
                    .labels(data.x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds(data.y_bounds)
                    .labels(y_labels),
            )
            .render(area, buf);
    }

    /// Renders bar/pie traces to text lines.
    pub fn render_to_lines(&self, available_width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if !self.chart.layout.title.is_empty() {
            lines.push(Line::from(Span::styled(
                self.chart.layout.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::default());
        }

        for (i, trace) in self.chart.traces.iter().enumerate() {
            match trace {
                Trace::HorizontalBar {
                    name,
                    labels,
                    lengths,
                } => {
                    if self.chart.traces.len() > 1 && !name.is_empty() {
                        lines.push(Line::from(Span::styled(
                            name.clone(),
                            Style::default()
                                .fg(trace_color(i))
                                .add_modifier(Modifier::BOLD),
                        )));
                    }
                    bar_lines(labels, lengths, trace_color(i), available_width, &mut lines);
                    if i + 1 < self.chart.traces.len() {
                        lines.push(Line::default());
                    }
                }
                Trace::Pie { labels, values } => {
                    pie_lines(labels, values, available_width, &mut lines);
                }
                Trace::Line { .. } => {}
            }
        }

        lines
    }
}

/// Computes padded x/y bounds over every series point.
fn bounds(series: &[(String, Vec<(f64, f64)>)]) -> ([f64; 2], [f64; 2]) {
    let points = series.iter().flat_map(|(_, pts)| pts.iter());
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if x_min > x_max {
        return ([0.0, 1.0], [0.0, 1.0]);
    }

    let pad = |min: f64, max: f64| -> [f64; 2] {
        if min == max {
            [min - 1.0, max + 1.0]
        } else {
            let margin = (max - min) * 0.05;
            [min - margin, max + margin]
        }
    };
    ([x_min, x_max], pad(y_min, y_max))
}

/// Picks which category names to show as x ticks for the available width.
fn tick_categories(categories: &[String], width: u16) -> Vec<String> {
    match categories.len() {
        0 => vec![],
        1 => vec![categories[0].clone()],
        2 => vec![categories[0].clone(), categories[1].clone()],
        n if width < 50 => vec![categories[0].clone(), categories[n - 1].clone()],
        n => vec![
            categories[0].clone(),
            categories[n / 2].clone(),
            categories[n - 1].clone(),
        ],
    }
}

fn format_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

fn bar_lines(
    labels: &[Value],
    lengths: &[Value],
    color: Color,
    available_width: usize,
    lines: &mut Vec<Line<'static>>,
) {
    let texts: Vec<String> = labels.iter().map(|l| display_value(Some(l))).collect();
    let label_width = texts.iter().map(|t| t.chars().count()).max().unwrap_or(0);
    let max_len = lengths
        .iter()
        .filter_map(|v| value_as_f64(Some(v)))
        .fold(0.0_f64, f64::max);

    // label, bar, space, value text
    let bar_budget = available_width
        .saturating_sub(label_width + 12)
        .clamp(4, 60);

    for (label, length) in texts.iter().zip(lengths.iter()) {
        let numeric = value_as_f64(Some(length)).unwrap_or(0.0);
        let cells = if max_len > 0.0 {
            ((numeric / max_len) * bar_budget as f64).round().max(0.0) as usize
        } else {
            0
        };

        lines.push(Line::from(vec![
            Span::raw(format!("{:>label_width$} ", label, label_width = label_width)),
            Span::styled("█".repeat(cells), Style::default().fg(color)),
            Span::styled(
                format!(" {}", display_value(Some(length))),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
}

fn pie_lines(
    labels: &[String],
    values: &[Value],
    available_width: usize,
    lines: &mut Vec<Line<'static>>,
) {
    let numeric: Vec<f64> = values
        .iter()
        .map(|v| value_as_f64(Some(v)).unwrap_or(0.0))
        .collect();
    let total: f64 = numeric.iter().sum();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let bar_budget = available_width
        .saturating_sub(label_width + 12)
        .clamp(4, 40);

    for (i, (label, value)) in labels.iter().zip(numeric.iter()).enumerate() {
        let share = if total > 0.0 { value / total } else { 0.0 };
        let cells = (share * bar_budget as f64).round() as usize;

        lines.push(Line::from(vec![
            Span::raw(format!("{:>label_width$} ", label, label_width = label_width)),
            Span::styled("█".repeat(cells), Style::default().fg(trace_color(i))),
            Span::styled(
                format!(" {:.1}%", share * 100.0),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
}

impl Widget for ChartPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.is_line_chart() {
            self.render_line_chart(area, buf);
            return;
        }

        let lines = self.render_to_lines(area.width as usize);
        for (i, line) in lines.iter().skip(self.scroll).enumerate() {
            if i >= area.height as usize {
                break;
            }
            buf.set_line(area.x, area.y + i as u16, line, area.width);
        }
    }
}
