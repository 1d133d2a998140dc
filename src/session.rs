use std::time::Instant;

use crate::feedback::{render_feedback, WordFeedback};
use crate::scoring::SessionResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Idle,
    Running,
    Stopped,
}

/// Everything that belongs to one attempt. Owned by the engine; a retry
/// replaces it wholesale.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub state: State,
    /// Snapshot taken at start; empty until then
    pub reference_text: String,
    /// Label shown alongside the snapshot
    pub difficulty_label: String,
    pub started_at: Option<Instant>,
    pub elapsed_secs: Option<f64>,
    /// Last value reported by the input field
    pub typed_text: String,
    pub result: Option<SessionResult>,
    /// Whether typed-text changes produce live feedback
    pub listening: bool,
}

impl Session {
    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn wpm(&self) -> f64 {
        self.result.map_or(0.0, |r| r.wpm)
    }

    /// Live statuses of the snapshot against the current input
    pub fn feedback(&self) -> Vec<WordFeedback> {
        render_feedback(&self.reference_text, &self.typed_text)
    }
}
