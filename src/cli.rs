//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::api::BackendConfig;
use crate::config::{Config, DEFAULT_BACKEND_URL};

/// Ask questions about your data and chart the answers.
#[derive(Parser, Debug)]
#[command(name = "askql")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL (e.g., http://localhost:8000)
    #[arg(value_name = "BACKEND_URL", env = "ASKQL_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(short = 't', long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run against a built-in demo backend (no server needed)
    #[arg(long)]
    pub mock: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Resolves the backend configuration.
    ///
    /// Precedence: CLI argument (which also covers the environment
    /// variable), then config file, then the local-development default.
    pub fn resolve_backend(&self, config: &Config) -> BackendConfig {
        let url = self
            .backend_url
            .clone()
            .or_else(|| config.backend.url.clone())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let mut backend = BackendConfig::new(url);
        backend.timeout_secs = self.timeout.or(config.backend.timeout_secs);
        backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    #[test]
    fn test_parse_backend_url() {
        let cli = parse_args(&["askql", "http://backend:9000"]);
        assert_eq!(cli.backend_url, Some("http://backend:9000".to_string()));
    }

    #[test]
    fn test_parse_config_path() {
        let cli = parse_args(&["askql", "--config", "/path/to/config.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.toml")));
    }

    #[test]
    fn test_parse_mock_flag() {
        let cli = parse_args(&["askql", "--mock"]);
        assert!(cli.mock);
    }

    #[test]
    fn test_resolve_backend_default() {
        let cli = parse_args(&["askql"]);
        let backend = cli.resolve_backend(&Config::default());

        assert_eq!(backend.base_url, DEFAULT_BACKEND_URL);
        assert!(backend.timeout_secs.is_none());
    }

    #[test]
    fn test_resolve_backend_cli_wins_over_config() {
        let cli = parse_args(&["askql", "http://cli:1", "--timeout", "5"]);
        let config: Config = toml::from_str(
            "[backend]\nurl = \"http://file:2\"\ntimeout_secs = 60",
        )
        .unwrap();

        let backend = cli.resolve_backend(&config);
        assert_eq!(backend.base_url, "http://cli:1");
        assert_eq!(backend.timeout_secs, Some(5));
    }

    #[test]
    fn test_resolve_backend_falls_back_to_config() {
        let cli = parse_args(&["askql"]);
        let config: Config =
            toml::from_str("[backend]\nurl = \"http://file:2\"\ntimeout_secs = 60").unwrap();

        let backend = cli.resolve_backend(&config);
        assert_eq!(backend.base_url, "http://file:2");
        assert_eq!(backend.timeout_secs, Some(60));
    }
}
