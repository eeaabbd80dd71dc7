//! Backend API: wire types, HTTP client, and mock implementation.

pub mod client;
pub mod mock;
pub mod types;

pub use client::{ApiBackend, BackendConfig, HttpBackend};
pub use mock::MockBackend;
pub use types::{
    AskRequest, AskResponse, AxisBindings, ColumnSpec, FieldRef, PlotConfig, PlotType, ResultSet,
    RunSqlRequest, SqlResult,
};
