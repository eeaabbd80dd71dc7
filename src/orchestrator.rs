//! Query orchestrator.
//!
//! Drives one question through its full lifecycle: validate input, ask the
//! backend, run the generated SQL, and decide what the result panel shows.
//! Every failure is converted to a status message here; nothing downstream
//! of the UI ever sees an error.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::types::{PlotConfig, SqlResult};
use crate::api::ApiBackend;
use crate::plot::{render_plot, RenderDirective};
use crate::status::StatusMessage;

/// Answer text shown when the backend returned none.
pub const NO_ANSWER_FALLBACK: &str = "No answer available.";

/// Everything remembered about the current question.
///
/// Replaced wholesale at the start of each submission, so stale pieces of a
/// previous turn can never leak into the next one.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// The question as submitted (trimmed).
    pub question: String,
    /// Answer text from the backend; empty when absent or failed.
    pub answer: String,
    /// Generated SQL; empty when the backend produced none.
    pub sql: String,
    /// Chart intent from the backend.
    pub plot_config: Option<PlotConfig>,
    /// Result of running the generated SQL.
    pub sql_result: Option<SqlResult>,
}

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitResult {
    /// Input validation failed; no network call was made.
    Rejected(StatusMessage),
    /// A previous submission is still in flight; no network call was made.
    Busy(StatusMessage),
    /// A full turn completed (the ask itself may still have failed).
    Completed(TurnOutcome),
}

/// What the UI should display after a completed turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    /// Query-status text; `None` clears the slot.
    pub query_status: Option<StatusMessage>,
    /// Answer text; empty means "show the fallback placeholder".
    pub answer: String,
    /// Generated SQL, ready for display and copying.
    pub sql: String,
    /// What the result panel shows; `None` leaves it cleared.
    pub directive: Option<RenderDirective>,
}

/// Returns the answer text to display, falling back to the placeholder.
pub fn answer_display(answer: &str) -> &str {
    if answer.is_empty() {
        NO_ANSWER_FALLBACK
    } else {
        answer
    }
}

/// Coordinates the backend calls and rendering decisions for one session.
pub struct Orchestrator {
    backend: Arc<dyn ApiBackend>,
    state: SessionState,
    busy: bool,
}

impl Orchestrator {
    /// Creates an orchestrator over the given backend.
    pub fn new(backend: Arc<dyn ApiBackend>) -> Self {
        Self {
            backend,
            state: SessionState::default(),
            busy: false,
        }
    }

    /// Returns the current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns the SQL of the current turn (for the copy action).
    pub fn sql(&self) -> &str {
        &self.state.sql
    }

    /// Whether a submission is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[cfg(test)]
    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// Submits a question and drives it through ask, SQL execution, and the
    /// rendering decision. Infallible: every failure becomes a status.
    pub async fn submit(&mut self, question: &str) -> SubmitResult {
        if self.busy {
            return SubmitResult::Busy(StatusMessage::info(
                "Still working on the previous question.",
            ));
        }

        let question = question.trim();
        if question.is_empty() {
            return SubmitResult::Rejected(StatusMessage::error(
                "Enter a question to continue.",
            ));
        }

        self.busy = true;
        self.state = SessionState {
            question: question.to_string(),
            ..SessionState::default()
        };

        let outcome = self.run_turn(question).await;
        self.busy = false;
        SubmitResult::Completed(outcome)
    }

    async fn run_turn(&mut self, question: &str) -> TurnOutcome {
        debug!("Asking: {}", question);
        let response = match self.backend.ask(question).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Ask failed: {}", e);
                return TurnOutcome {
                    query_status: Some(StatusMessage::error(format!("Error: {e}"))),
                    answer: String::new(),
                    sql: String::new(),
                    directive: None,
                };
            }
        };

        self.state.answer = response.answer;
        self.state.sql = response.sql;
        self.state.plot_config = response.plot_config;

        self.state.sql_result = self.run_sql_for_chart().await;

        let directive = render_plot(
            self.state.plot_config.as_ref(),
            self.state.sql_result.as_ref(),
        );

        TurnOutcome {
            query_status: None,
            answer: self.state.answer.clone(),
            sql: self.state.sql.clone(),
            directive: Some(directive),
        }
    }

    /// Runs the generated SQL, if there is any.
    ///
    /// Failures degrade to a null result; the rendering decision then
    /// reports the missing data.
    async fn run_sql_for_chart(&self) -> Option<SqlResult> {
        if self.state.sql.is_empty() {
            debug!("No SQL to run");
            return None;
        }

        debug!("Running SQL for chart");
        match self.backend.run_sql(&self.state.sql).await {
            Ok(result) => Some(result),
            Err(e) => {
                warn!("SQL error: {}", e);
                None
            }
        }
    }
}
