//! The plot-rendering decision sequence.
//!
//! Takes the server's chart intent plus the SQL result and decides what to
//! show: a status line, a table, or chart traces with a layout. Pure; the
//! TUI applies the returned directive, clearing whatever was shown before.

use crate::api::types::{PlotConfig, PlotType, SqlResult};
use crate::data::{primary_result, rows_to_records, value_as_f64};
use crate::plot::chart::{grouped_traces, pie_trace, ChartView, Layout, Trace, XyKind};
use crate::plot::table::{build_table, TableView};
use crate::status::StatusMessage;

/// What the result panel should show after a turn.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderDirective {
    /// Show a plot-status message and nothing else.
    Status(StatusMessage),
    /// Show a table.
    Table(TableView),
    /// Show a chart.
    Chart(ChartView),
}

/// Decides the visual encoding for a plot config and result set.
///
/// First matching rule wins; every failure path degrades to a status
/// message, never an error.
pub fn render_plot(
    config: Option<&PlotConfig>,
    sql_result: Option<&SqlResult>,
) -> RenderDirective {
    let status = |msg: StatusMessage| RenderDirective::Status(msg);

    let Some(config) = config else {
        return status(StatusMessage::info("No plot config available."));
    };
    let Some(kind) = config.kind else {
        return status(StatusMessage::info("No plot config available."));
    };

    let reason = |default: &str| {
        config
            .reason
            .clone()
            .unwrap_or_else(|| default.to_string())
    };
    match kind {
        PlotType::None => return status(StatusMessage::info(reason("No chart suggested."))),
        PlotType::Error => {
            return status(StatusMessage::error(reason("Chart config error.")));
        }
        PlotType::Unknown => {
            return status(StatusMessage::error("Unsupported plot type."));
        }
        _ => {}
    }

    let Some(primary) = primary_result(sql_result).filter(|rs| !rs.columns.is_empty()) else {
        return status(StatusMessage::error("No SQL data available for chart."));
    };

    let records = rows_to_records(&primary.columns, &primary.rows);
    if records.is_empty() {
        return status(StatusMessage::info("Query returned no rows."));
    }

    if kind == PlotType::Table {
        let table = build_table(&primary.columns, &records, config.columns.as_deref());
        return RenderDirective::Table(table);
    }

    let axis = config.axis.clone().unwrap_or_default();
    let y = match axis.y {
        Some(y) => y,
        None => {
            return status(StatusMessage::error("Plot config is missing axis fields."));
        }
    };
    let series_field = axis.series.as_ref().map(|s| s.value.as_str());

    let traces = match kind {
        PlotType::Pie => {
            let Some(series) = series_field else {
                return status(StatusMessage::error(
                    "Plot config is missing the pie series field.",
                ));
            };
            vec![pie_trace(&records, series, &y.value)]
        }
        PlotType::Bar | PlotType::Line => {
            let Some(x) = axis.x.as_ref() else {
                return status(StatusMessage::error("Plot config is missing axis fields."));
            };
            let xy_kind = if kind == PlotType::Bar {
                XyKind::Bar
            } else {
                XyKind::Line
            };
            grouped_traces(&records, xy_kind, &x.value, &y, series_field)
        }
        _ => unreachable!("non-chart types handled above"),
    };

    // A value axis with no numeric data at all cannot be drawn.
    if !traces.iter().any(has_numeric_values) {
        return status(StatusMessage::error("No numeric data available for chart."));
    }

    RenderDirective::Chart(ChartView {
        traces,
        layout: Layout {
            title: config.title.clone().unwrap_or_default(),
        },
    })
}

fn has_numeric_values(trace: &Trace) -> bool {
    let values = match trace {
        Trace::Line { ys, .. } => ys,
        Trace::HorizontalBar { lengths, .. } => lengths,
        Trace::Pie { values, .. } => values,
    };
    values.iter().any(|v| value_as_f64(Some(v)).is_some())
}
