//! askql - a terminal client for a natural-language SQL assistant.
//!
//! This library exposes the core modules for use in integration tests.

pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod plot;
pub mod status;
pub mod tui;
