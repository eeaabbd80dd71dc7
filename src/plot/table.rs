//! Table view construction.
//!
//! Turns a result set (as records) plus an optional column directive into a
//! plain header/rows view the table widget can draw.

use crate::api::types::ColumnSpec;
use crate::data::{display_value, Record};

/// A fully resolved table: header labels and text cells, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Header labels, in display order.
    pub headers: Vec<String>,
    /// One row of text cells per record.
    pub rows: Vec<Vec<String>>,
}

/// Builds a table view from records.
///
/// A non-empty `column_config` selects which columns are visible (its
/// `value`s, in order) and what the headers read (its `name`s, falling back
/// to the keys); otherwise all of `columns` show under their own names.
/// Missing fields render as empty cells.
pub fn build_table(
    columns: &[String],
    records: &[Record],
    column_config: Option<&[ColumnSpec]>,
) -> TableView {
    let directive = column_config.filter(|cols| !cols.is_empty());

    let (visible, headers): (Vec<String>, Vec<String>) = match directive {
        Some(cols) => cols
            .iter()
            .map(|c| (c.value.clone(), c.header().to_string()))
            .unzip(),
        None => (columns.to_vec(), columns.to_vec()),
    };

    let rows = records
        .iter()
        .map(|record| {
            visible
                .iter()
                .map(|col| display_value(record.get(col)))
                .collect()
        })
        .collect();

    TableView { headers, rows }
}
