//! askql - a terminal client for a natural-language SQL assistant.

use std::sync::Arc;

use askql::api::{ApiBackend, HttpBackend, MockBackend};
use askql::cli::Cli;
use askql::config::Config;
use askql::error::Result;
use askql::orchestrator::Orchestrator;
use askql::{logging, tui};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // The TUI owns the terminal, so logs go to a file
    logging::init_file_logging();

    if let Err(e) = run().await {
        // Make sure the message lands on a restored terminal
        eprintln!("Error: {e}");
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    let backend_config = cli.resolve_backend(&config);

    let (backend, backend_info): (Arc<dyn ApiBackend>, String) = if cli.mock {
        info!("Using built-in demo backend");
        (Arc::new(MockBackend::demo()), "demo".to_string())
    } else {
        info!("Backend: {}", backend_config.base_url);
        (
            Arc::new(HttpBackend::new(&backend_config)?),
            backend_config.base_url.clone(),
        )
    };

    let orchestrator = Orchestrator::new(backend);
    tui::run(orchestrator, &backend_info).await
}
