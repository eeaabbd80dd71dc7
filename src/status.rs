//! Status messages for the two UI status channels.
//!
//! The client reports progress and failures through two independent slots:
//! the query status (input validation, /ask flow) and the plot status
//! (SQL execution, chart rendering). Both carry the same payload.

/// A transient, human-readable status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// The text to display.
    pub text: String,
    /// Whether the message should be styled as an error.
    pub error: bool,
}

impl StatusMessage {
    /// Creates an informational status message.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: false,
        }
    }

    /// Creates an error status message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_is_not_error() {
        let msg = StatusMessage::info("SQL copied.");
        assert_eq!(msg.text, "SQL copied.");
        assert!(!msg.error);
    }

    #[test]
    fn test_error_flag() {
        let msg = StatusMessage::error("Enter a question to continue.");
        assert!(msg.error);
    }
}
