//! Chart trace types and construction.
//!
//! A trace is one chart series: a single line, one bar group, or the whole
//! pie. Traces keep raw JSON scalars so grouping and role-swapping stay
//! independent of how the widget later coerces values for drawing.

use serde_json::Value;

use crate::api::types::FieldRef;
use crate::data::{display_value, Record};

/// One chart series.
#[derive(Debug, Clone, PartialEq)]
pub enum Trace {
    /// Connected line with markers, points in original row order.
    Line {
        name: String,
        xs: Vec<Value>,
        ys: Vec<Value>,
    },
    /// Horizontal bars: the x/y roles are swapped relative to the line
    /// encoding. `lengths` come from the y binding, bar `labels` from x.
    HorizontalBar {
        name: String,
        labels: Vec<Value>,
        lengths: Vec<Value>,
    },
    /// Single pie: slice labels from the series binding, values from y.
    /// Drawn with label + percent visible.
    Pie {
        labels: Vec<String>,
        values: Vec<Value>,
    },
}

impl Trace {
    /// Returns the trace name shown in the legend (empty for pie).
    pub fn name(&self) -> &str {
        match self {
            Self::Line { name, .. } | Self::HorizontalBar { name, .. } => name,
            Self::Pie { .. } => "",
        }
    }
}

/// Chart-level presentation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    /// Chart title; empty when the config carries none.
    pub title: String,
}

/// Traces plus layout, ready for the chart widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub traces: Vec<Trace>,
    pub layout: Layout,
}

/// The two shapes grouped traces can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XyKind {
    Line,
    Bar,
}

/// Builds the single pie trace: labels from the series field, values from y.
pub fn pie_trace(records: &[Record], series_field: &str, y_field: &str) -> Trace {
    Trace::Pie {
        labels: records
            .iter()
            .map(|r| display_value(r.get(series_field)))
            .collect(),
        values: records
            .iter()
            .map(|r| r.get(y_field).cloned().unwrap_or(Value::Null))
            .collect(),
    }
}

/// Builds grouped bar/line traces.
///
/// Records are partitioned by distinct values of the series field in
/// first-seen order, or form a single unnamed group without one. Each group
/// becomes one trace carrying its records' x/y values; ungrouped traces are
/// named after the y binding's label.
pub fn grouped_traces(
    records: &[Record],
    kind: XyKind,
    x_field: &str,
    y: &FieldRef,
    series_field: Option<&str>,
) -> Vec<Trace> {
    let groups: Vec<(String, Vec<&Record>)> = match series_field {
        Some(field) => {
            let mut ordered: Vec<(String, Vec<&Record>)> = Vec::new();
            for record in records {
                let key = display_value(record.get(field));
                match ordered.iter_mut().find(|(k, _)| *k == key) {
                    Some((_, members)) => members.push(record),
                    None => ordered.push((key, vec![record])),
                }
            }
            ordered
        }
        None => vec![(y.label().to_string(), records.iter().collect())],
    };

    groups
        .into_iter()
        .map(|(name, members)| {
            let field_values = |field: &str| -> Vec<Value> {
                members
                    .iter()
                    .map(|r| r.get(field).cloned().unwrap_or(Value::Null))
                    .collect()
            };
            let xs = field_values(x_field);
            let ys = field_values(&y.value);
            match kind {
                XyKind::Line => Trace::Line { name, xs, ys },
                // Horizontal: bar length is the y value, bar position the x value.
                XyKind::Bar => Trace::HorizontalBar {
                    name,
                    labels: xs,
                    lengths: ys,
                },
            }
        })
        .collect()
}
