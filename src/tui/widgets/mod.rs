//! Custom widgets for the TUI.

pub mod chart;
pub mod data_table;
pub mod header;
pub mod input;
