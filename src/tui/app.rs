//! Application state for the TUI.

use std::time::{Duration, Instant};

use crate::orchestrator::SubmitResult;
use crate::plot::RenderDirective;
use crate::status::StatusMessage;

/// How long the copy confirmation stays visible.
const TRANSIENT_STATUS_TTL: Duration = Duration::from_secs(2);

/// Which panel has focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// The question input field.
    #[default]
    Question,
    /// The answer panel.
    Answer,
    /// The result panel (table/chart).
    Result,
}

impl Focus {
    /// Cycles to the next panel.
    pub fn next(self) -> Self {
        match self {
            Self::Question => Self::Answer,
            Self::Answer => Self::Result,
            Self::Result => Self::Question,
        }
    }
}

/// Input state for text editing.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current input text.
    pub text: String,
    /// Cursor position (character index).
    pub cursor: usize,
}

impl InputState {
    /// Creates a new empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Deletes the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
            self.text.remove(self.cursor);
        }
    }

    /// Deletes the character at the cursor (delete key).
    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    /// Moves the cursor left.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
        }
    }

    /// Moves the cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor += next;
        }
    }

    /// Moves the cursor to the start of the input.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end of the input.
    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Clears the input.
    pub fn clear(&mut self) {
        self.cursor = 0;
        self.text.clear();
    }
}

/// The terminal dimensions charts scale against.
///
/// Acquiring a handle replaces the previous one; the current handle is the
/// only size anyone draws against, so stale dimensions cannot linger after
/// a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeHandle {
    pub width: u16,
    pub height: u16,
}

impl ResizeHandle {
    /// Acquires a handle for the given dimensions.
    pub fn acquire(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Main application state.
pub struct App {
    /// Whether the application is still running.
    pub running: bool,
    /// Current focus panel.
    pub focus: Focus,
    /// Question input state.
    pub input: InputState,
    /// Whether a submission is in flight (relabels the input panel).
    pub loading: bool,
    /// Whether at least one question has completed a full turn.
    pub has_turn: bool,
    /// Query-status slot (input validation and ask failures).
    pub query_status: Option<StatusMessage>,
    /// When set, the query status self-clears at this instant.
    transient_until: Option<Instant>,
    /// Answer text from the last turn; empty shows the placeholder.
    pub answer: String,
    /// Generated SQL from the last turn.
    pub sql: String,
    /// What the result panel shows.
    pub directive: Option<RenderDirective>,
    /// Current terminal size handle.
    pub resize: ResizeHandle,
    /// Answer panel scroll offset.
    pub answer_scroll: usize,
    /// Result panel scroll offset.
    pub result_scroll: usize,
}

impl App {
    /// Creates a new App instance for the given terminal size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            running: true,
            focus: Focus::default(),
            input: InputState::new(),
            loading: false,
            has_turn: false,
            query_status: None,
            transient_until: None,
            answer: String::new(),
            sql: String::new(),
            directive: None,
            resize: ResizeHandle::acquire(width, height),
            answer_scroll: 0,
            result_scroll: 0,
        }
    }

    /// Clears everything shown for the previous question. Called when a
    /// submission starts, so nothing stale renders while it is in flight.
    pub fn clear_turn(&mut self) {
        self.has_turn = false;
        self.query_status = None;
        self.transient_until = None;
        self.answer.clear();
        self.sql.clear();
        self.directive = None;
        self.answer_scroll = 0;
        self.result_scroll = 0;
    }

    /// Applies the result of a submission to the display slots.
    pub fn apply_submit(&mut self, result: SubmitResult) {
        match result {
            SubmitResult::Rejected(msg) | SubmitResult::Busy(msg) => {
                self.query_status = Some(msg);
                self.transient_until = None;
            }
            SubmitResult::Completed(outcome) => {
                self.has_turn = true;
                self.query_status = outcome.query_status;
                self.transient_until = None;
                self.answer = outcome.answer;
                self.sql = outcome.sql;
                self.directive = outcome.directive;
                self.answer_scroll = 0;
                self.result_scroll = 0;
            }
        }
    }

    /// Shows a status message that self-clears after a short delay.
    pub fn set_transient_status(&mut self, msg: StatusMessage) {
        self.query_status = Some(msg);
        self.transient_until = Some(Instant::now() + TRANSIENT_STATUS_TTL);
    }

    /// Clears an expired transient status. Called every tick.
    pub fn clear_expired_status(&mut self) {
        if let Some(deadline) = self.transient_until {
            if Instant::now() >= deadline {
                self.query_status = None;
                self.transient_until = None;
            }
        }
    }

    /// Replaces the resize handle after a terminal resize.
    pub fn acquire_resize(&mut self, width: u16, height: u16) {
        self.resize = ResizeHandle::acquire(width, height);
    }

    /// Handles an event and updates application state.
    pub fn handle_event(&mut self, event: super::Event) {
        use super::Event;
        use crossterm::event::{KeyCode, KeyModifiers};

        match event {
            Event::Key(key) => match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.running = false;
                }
                KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.running = false;
                }
                KeyCode::Tab => {
                    self.focus = self.focus.next();
                }
                _ if self.focus == Focus::Question => {
                    self.handle_input_key(key);
                }
                KeyCode::Up if self.focus == Focus::Answer => {
                    self.answer_scroll = self.answer_scroll.saturating_add(1);
                }
                KeyCode::Down if self.focus == Focus::Answer => {
                    self.answer_scroll = self.answer_scroll.saturating_sub(1);
                }
                KeyCode::Up if self.focus == Focus::Result => {
                    self.result_scroll = self.result_scroll.saturating_add(1);
                }
                KeyCode::Down if self.focus == Focus::Result => {
                    self.result_scroll = self.result_scroll.saturating_sub(1);
                }
                _ => {}
            },
            Event::Resize(width, height) => {
                self.acquire_resize(width, height);
            }
            Event::Tick => {}
        }
    }

    /// Handles key events when the question input is focused.
    fn handle_input_key(&mut self, key: crossterm::event::KeyEvent) {
        use crossterm::event::KeyCode;

        match key.code {
            KeyCode::Char(c) => self.input.insert(c),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Esc => self.input.clear(),
            _ => {}
        }
    }
}
