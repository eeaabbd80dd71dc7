//! Plot rendering: the decision sequence and the views it produces.

pub mod chart;
pub mod render;
pub mod table;

pub use chart::{ChartView, Layout, Trace, XyKind};
pub use render::{render_plot, RenderDirective};
pub use table::{build_table, TableView};
