//! Integration tests for askql.

pub mod plot_test;
pub mod session_test;
pub mod widgets_test;
