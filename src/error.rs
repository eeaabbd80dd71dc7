//! Error types for askql.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for askql operations.
#[derive(Error, Debug)]
pub enum AskqlError {
    /// Errors from the /ask endpoint (transport failures, non-2xx bodies).
    #[error("{0}")]
    Api(String),

    /// Errors from the /run_sql endpoint.
    #[error("{0}")]
    Sql(String),

    /// Configuration errors (invalid config file, bad backend URL, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal application errors (terminal setup, unexpected states).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AskqlError {
    /// Creates an /ask endpoint error with the given message.
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    /// Creates a /run_sql endpoint error with the given message.
    pub fn sql(msg: impl Into<String>) -> Self {
        Self::Sql(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Api(_) => "Ask Error",
            Self::Sql(_) => "SQL Error",
            Self::Config(_) => "Configuration Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using AskqlError.
pub type Result<T> = std::result::Result<T, AskqlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_api() {
        // Endpoint errors carry the response body verbatim, no prefix.
        let err = AskqlError::api("question must not be empty");
        assert_eq!(err.to_string(), "question must not be empty");
        assert_eq!(err.category(), "Ask Error");
    }

    #[test]
    fn test_error_display_sql() {
        let err = AskqlError::sql("relation \"orders\" does not exist");
        assert_eq!(err.to_string(), "relation \"orders\" does not exist");
        assert_eq!(err.category(), "SQL Error");
    }

    #[test]
    fn test_error_display_config() {
        let err = AskqlError::config("invalid backend URL");
        assert_eq!(err.to_string(), "Configuration error: invalid backend URL");
        assert_eq!(err.category(), "Configuration Error");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AskqlError>();
    }
}
