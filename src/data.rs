//! Result normalization.
//!
//! Converts the backend's row/column tabular shape into field-keyed records
//! and picks the primary result set out of a response that may carry several.

use std::collections::HashMap;

use serde_json::Value;

use crate::api::types::{ResultSet, SqlResult};

/// A single row keyed by column name.
pub type Record = HashMap<String, Value>;

/// Returns the result set used for rendering.
///
/// The first element of a non-empty `result_sets` wins; a bare result set is
/// returned as-is; absent input (or an empty `result_sets`) yields `None`.
/// No shape validation beyond presence.
pub fn primary_result(sql_result: Option<&SqlResult>) -> Option<&ResultSet> {
    match sql_result? {
        SqlResult::Many { result_sets } => result_sets.first(),
        SqlResult::Single(rs) => Some(rs),
    }
}

/// Zips each row against `columns` by position into a record.
///
/// Lengths are not validated: rows shorter than `columns` produce records
/// with missing fields, extra cells are dropped.
pub fn rows_to_records(columns: &[String], rows: &[Vec<Value>]) -> Vec<Record> {
    rows.iter()
        .map(|row| {
            columns
                .iter()
                .zip(row.iter())
                .map(|(col, value)| (col.clone(), value.clone()))
                .collect()
        })
        .collect()
}

/// Coerces a JSON scalar to display text.
///
/// Null and missing values become the empty string; strings are shown
/// without quotes; anything else uses its JSON rendering.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Attempts to read a JSON scalar as a number, accepting numeric strings.
pub fn value_as_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}
