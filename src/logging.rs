//! Logging initialization.
//!
//! The TUI owns the terminal, so logs go to a file. Location:
//! `~/.local/state/askql/askql.log` on Linux (XDG state directory), or the
//! platform-appropriate directory elsewhere.

use std::fs::{self, File};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Initializes file logging for TUI mode.
///
/// Failure to set up the log file disables logging instead of writing to
/// the terminal the TUI is drawing on.
pub fn init_file_logging() {
    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Warning: Could not create log directory: {e}");
            return;
        }
    }

    // Truncate on each run to avoid unbounded growth
    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file: {e}");
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();
}

/// Returns the path for the log file.
pub fn get_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        return state_dir.join("askql").join("askql.log");
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("askql").join("askql.log");
    }

    std::env::temp_dir().join("askql.log")
}
