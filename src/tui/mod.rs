//! Terminal user interface for askql.
//!
//! Provides the main application loop using ratatui and crossterm.

pub mod app;
mod clipboard;
mod events;
mod highlight;
mod ui;
pub mod widgets;

pub use app::App;
pub use events::{Event, EventHandler};

use crate::error::{AskqlError, Result};
use crate::orchestrator::Orchestrator;
use crate::status::StatusMessage;
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::warn;

/// The main TUI application runner.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_handler: EventHandler,
}

impl Tui {
    /// Creates a new TUI instance, initializing the terminal.
    pub fn new() -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let event_handler = EventHandler::new();

        // Initialize clipboard (non-fatal if it fails)
        if let Err(e) = clipboard::init() {
            warn!("Failed to initialize clipboard: {}", e);
        }

        Ok(Self {
            terminal,
            event_handler,
        })
    }

    /// Sets up the terminal for TUI rendering.
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()
            .map_err(|e| AskqlError::internal(format!("Failed to enable raw mode: {e}")))?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| AskqlError::internal(format!("Failed to enter alternate screen: {e}")))?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)
            .map_err(|e| AskqlError::internal(format!("Failed to create terminal: {e}")))?;

        Ok(terminal)
    }

    /// Restores the terminal to its original state.
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()
            .map_err(|e| AskqlError::internal(format!("Failed to disable raw mode: {e}")))?;

        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| AskqlError::internal(format!("Failed to leave alternate screen: {e}")))?;

        self.terminal
            .show_cursor()
            .map_err(|e| AskqlError::internal(format!("Failed to show cursor: {e}")))?;

        Ok(())
    }

    /// Runs the main TUI event loop.
    pub async fn run(&mut self, orchestrator: &mut Orchestrator, backend_info: &str) -> Result<()> {
        // Restore the terminal before the default hook prints the panic.
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        let size = self
            .terminal
            .size()
            .map_err(|e| AskqlError::internal(format!("Failed to read terminal size: {e}")))?;
        let mut app = App::new(size.width, size.height);

        let result = self.run_event_loop(&mut app, orchestrator, backend_info).await;

        let _ = panic::take_hook();

        result
    }

    /// The main event loop, separated for cleaner error handling.
    async fn run_event_loop(
        &mut self,
        app: &mut App,
        orchestrator: &mut Orchestrator,
        backend_info: &str,
    ) -> Result<()> {
        while app.running {
            app.clear_expired_status();

            self.draw(app, backend_info)?;

            match self.event_handler.next()? {
                Event::Key(key)
                    if key.code == KeyCode::Enter
                        && app.focus == app::Focus::Question
                        && !app.loading =>
                {
                    app.loading = true;
                    let question = app.input.text.clone();
                    // A blank question gets rejected without a network call;
                    // keep the previous turn visible behind the error status.
                    if !question.trim().is_empty() {
                        app.clear_turn();
                    }
                    // Redraw once so the busy label and the cleared panels
                    // show while the question is in flight.
                    self.draw(app, backend_info)?;

                    let result = orchestrator.submit(&question).await;
                    app.apply_submit(result);
                    app.loading = false;
                }
                Event::Key(key)
                    if key.code == KeyCode::Char('y')
                        && key.modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    self.copy_sql(app);
                }
                event => app.handle_event(event),
            }
        }

        Ok(())
    }

    fn draw(&mut self, app: &App, backend_info: &str) -> Result<()> {
        self.terminal
            .draw(|frame| ui::render(frame, app, backend_info))
            .map_err(|e| AskqlError::internal(format!("Failed to draw: {e}")))?;
        Ok(())
    }

    /// Copies the generated SQL to the clipboard. Does nothing when there
    /// is no SQL to copy.
    fn copy_sql(&mut self, app: &mut App) {
        if app.sql.is_empty() {
            return;
        }

        match clipboard::copy(&app.sql) {
            Ok(()) => app.set_transient_status(StatusMessage::info("SQL copied.")),
            Err(e) => warn!("Failed to copy SQL to clipboard: {}", e),
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

/// Runs the TUI application.
pub async fn run(mut orchestrator: Orchestrator, backend_info: &str) -> Result<()> {
    let mut tui = Tui::new()?;
    tui.run(&mut orchestrator, backend_info).await
}
