//! Clipboard support for the TUI.
//!
//! Uses the native clipboard where available, falling back to the OSC 52
//! escape sequence which works in most modern terminals (including over
//! SSH, where no display server is reachable).

use std::io::Write;
use std::sync::Mutex;

use arboard::Clipboard;

/// Native clipboard instance; `None` when arboard could not initialize.
static CLIPBOARD: Mutex<Option<Clipboard>> = Mutex::new(None);

/// Clipboard operation errors.
#[derive(Debug, Clone)]
pub enum ClipboardError {
    /// Failed to acquire lock.
    Lock,
    /// Failed to copy to clipboard.
    Copy(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lock => write!(f, "Failed to acquire clipboard lock"),
            Self::Copy(e) => write!(f, "Failed to copy to clipboard: {}", e),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Initializes the native clipboard. Should be called once at startup;
/// failure is non-fatal and routes copies through OSC 52.
pub fn init() -> Result<(), ClipboardError> {
    let clipboard = Clipboard::new().map_err(|e| ClipboardError::Copy(e.to_string()))?;
    let mut guard = CLIPBOARD.lock().map_err(|_| ClipboardError::Lock)?;
    *guard = Some(clipboard);
    Ok(())
}

/// Copies text to the clipboard.
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let mut guard = CLIPBOARD.lock().map_err(|_| ClipboardError::Lock)?;
    match guard.as_mut() {
        Some(clipboard) => clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Copy(e.to_string())),
        None => copy_osc52(text),
    }
}

/// Copies text using the OSC 52 escape sequence, written to the terminal.
fn copy_osc52(text: &str) -> Result<(), ClipboardError> {
    use base64::{engine::general_purpose::STANDARD, Engine};

    let encoded = STANDARD.encode(text);
    // OSC 52 format: ESC ] 52 ; c ; <base64-data> ESC \
    let sequence = format!("\x1b]52;c;{}\x1b\\", encoded);

    std::io::stdout()
        .write_all(sequence.as_bytes())
        .map_err(|e| ClipboardError::Copy(format!("Failed to write OSC 52: {}", e)))?;
    std::io::stdout()
        .flush()
        .map_err(|e| ClipboardError::Copy(format!("Failed to flush OSC 52: {}", e)))?;

    Ok(())
}
