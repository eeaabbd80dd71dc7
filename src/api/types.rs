//! Wire types for the assistant backend.
//!
//! Shapes exchanged with the `/ask` and `/run_sql` endpoints. Everything is
//! validated at the deserialization boundary; the rest of the client never
//! probes raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /ask`.
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest {
    /// The user's natural-language question.
    pub question: String,
}

/// Response body from `POST /ask`.
///
/// Every field is optional on the wire; absent fields default to
/// empty/`None` so a partial response still produces a usable turn.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AskResponse {
    /// Natural-language answer text.
    #[serde(default)]
    pub answer: String,

    /// Declarative description of the chart to draw, if any.
    #[serde(default)]
    pub plot_config: Option<PlotConfig>,

    /// The SQL the assistant generated for this question.
    #[serde(default)]
    pub sql: String,
}

/// Request body for `POST /run_sql`.
#[derive(Debug, Clone, Serialize)]
pub struct RunSqlRequest {
    /// SQL to execute against the backend's database.
    pub sql: String,
}

/// The kind of visual the backend suggests for a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotType {
    /// No chart is appropriate; `reason` explains why.
    None,
    /// The backend could not produce a chart config; `reason` carries the error.
    Error,
    /// Plain tabular display.
    Table,
    /// Horizontal bar chart.
    Bar,
    /// Connected line chart.
    Line,
    /// Pie chart.
    Pie,
    /// Any type this client does not recognize.
    Unknown,
}

// Hand-rolled so an unrecognized type string becomes `Unknown` instead of
// failing the whole /ask response parse.
impl<'de> Deserialize<'de> for PlotType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "none" => Self::None,
            "error" => Self::Error,
            "table" => Self::Table,
            "bar" => Self::Bar,
            "line" => Self::Line,
            "pie" => Self::Pie,
            _ => Self::Unknown,
        })
    }
}

/// Server-supplied description of what to draw and which fields feed it.
///
/// Held unchanged for the lifetime of one question, then replaced wholesale.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlotConfig {
    /// Chart kind. Absent is treated the same as having no config at all.
    #[serde(rename = "type", default)]
    pub kind: Option<PlotType>,

    /// Explanation for `none`/`error` types.
    #[serde(default)]
    pub reason: Option<String>,

    /// Chart title.
    #[serde(default)]
    pub title: Option<String>,

    /// Axis-to-column bindings.
    #[serde(default)]
    pub axis: Option<AxisBindings>,

    /// Column selection/labeling directive for `table` type.
    #[serde(default)]
    pub columns: Option<Vec<ColumnSpec>>,
}

/// Optional x/y/series bindings for chart types.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AxisBindings {
    #[serde(default)]
    pub x: Option<FieldRef>,
    #[serde(default)]
    pub y: Option<FieldRef>,
    #[serde(default)]
    pub series: Option<FieldRef>,
}

/// A reference to a result-set column, with an optional display label.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FieldRef {
    /// Column key in the result set.
    pub value: String,
    /// Display label; falls back to the column key.
    #[serde(default)]
    pub name: Option<String>,
}

impl FieldRef {
    /// Returns the display label, falling back to the column key.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.value)
    }
}

/// One entry of a table column directive.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ColumnSpec {
    /// Column key in the result set.
    pub value: String,
    /// Header label; falls back to the column key.
    #[serde(default)]
    pub name: Option<String>,
}

impl ColumnSpec {
    /// Returns the header label, falling back to the column key.
    pub fn header(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.value)
    }
}

/// Response body from `POST /run_sql`.
///
/// The backend returns either a wrapper holding several result sets or a
/// single bare result set; `crate::data::primary_result` picks the one used
/// for rendering.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SqlResult {
    /// Multiple result sets; the first is the primary one.
    Many {
        result_sets: Vec<ResultSet>,
    },
    /// A single bare result set.
    Single(ResultSet),
}

/// One tabular result: ordered column names plus rows of JSON scalars.
///
/// Fields default to empty so a malformed response still deserializes and
/// degrades to a "no data" status instead of failing the turn.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
}
