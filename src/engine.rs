use tracing::debug;

use crate::clock::{Clock, MonotonicClock};
use crate::display::Display;
use crate::feedback::unstyled;
use crate::runtime::SessionEvent;
use crate::scoring::{score, SessionResult};
use crate::session::{Session, State};

/// Drives one typing session at a time against an injected display and clock.
///
/// The engine keeps two pieces of text apart: the reference currently shown
/// by the front end, and the snapshot frozen into the session at start. Only
/// the snapshot is ever scored.
#[derive(Debug)]
pub struct Engine<D: Display, C: Clock = MonotonicClock> {
    session: Session,
    displayed_reference: String,
    difficulty_label: String,
    display: D,
    clock: C,
}

impl<D: Display> Engine<D, MonotonicClock> {
    pub fn with_display(display: D) -> Self {
        Self::new(display, MonotonicClock)
    }
}

impl<D: Display, C: Clock> Engine<D, C> {
    pub fn new(mut display: D, clock: C) -> Self {
        display.set_controls_enabled(true, false, false);
        display.display_elapsed_seconds(0.0);
        display.display_wpm(0.0);

        Self {
            session: Session::default(),
            displayed_reference: String::new(),
            difficulty_label: String::new(),
            display,
            clock,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> State {
        self.session.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn displayed_reference(&self) -> &str {
        &self.displayed_reference
    }

    pub fn difficulty_label(&self) -> &str {
        &self.difficulty_label
    }

    pub fn dispatch(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Start => self.on_start_requested(),
            SessionEvent::Stop => {
                self.on_stop_requested();
            }
            SessionEvent::Retry => self.on_retry_requested(),
            SessionEvent::TypedTextChanged(text) => self.on_typed_text_changed(&text),
            SessionEvent::ReferenceTextAvailable { text, label } => {
                self.on_reference_text_available(&text, &label)
            }
        }
    }

    /// New sample text from the front end. A running session keeps its
    /// snapshot and label on screen; the new text is picked up by the next start.
    pub fn on_reference_text_available(&mut self, text: &str, label: &str) {
        self.displayed_reference = text.to_string();
        self.difficulty_label = label.to_string();

        if !self.session.is_running() {
            self.display.display_difficulty_label(label);
            self.display.render_word_feedback(&unstyled(text));
        }
        debug!(label, words = text.split_whitespace().count(), "reference text available");
    }

    pub fn on_start_requested(&mut self) {
        if self.session.is_running() {
            debug!("start ignored, session already running");
            return;
        }

        self.session.started_at = Some(self.clock.now());
        self.session.reference_text = self.displayed_reference.clone();
        self.session.difficulty_label = self.difficulty_label.clone();
        self.session.elapsed_secs = None;
        self.session.result = None;
        self.session.state = State::Running;

        self.display.set_controls_enabled(false, true, false);
        self.display
            .display_difficulty_label(&self.session.difficulty_label);
        self.session.listening = true;
        self.display.render_word_feedback(&self.session.feedback());

        debug!(reference = %self.session.reference_text, "session started");
    }

    /// Returns the final score, or `None` when no session was running.
    pub fn on_stop_requested(&mut self) -> Option<SessionResult> {
        if !self.session.is_running() {
            debug!(state = ?self.session.state, "stop ignored, session not running");
            return None;
        }
        let started_at = self.session.started_at?;

        let end = self.clock.now();
        let elapsed_secs = end.saturating_duration_since(started_at).as_secs_f64();
        let result = score(
            &self.session.reference_text,
            &self.session.typed_text,
            elapsed_secs,
        );

        self.session.elapsed_secs = Some(elapsed_secs);
        self.session.result = Some(result);

        self.display.display_elapsed_seconds(elapsed_secs);
        self.display.display_wpm(result.wpm);
        self.display.display_accuracy(result.accuracy);
        self.display
            .display_difficulty_label(&self.session.difficulty_label);

        self.session.state = State::Stopped;
        self.session.listening = false;
        self.display.set_controls_enabled(true, false, true);

        debug!(
            elapsed_secs,
            correct = result.correct_words,
            wpm = result.wpm,
            "session stopped"
        );
        Some(result)
    }

    pub fn on_retry_requested(&mut self) {
        self.session = Session::default();

        self.display.display_elapsed_seconds(0.0);
        self.display.display_wpm(0.0);
        self.display.display_accuracy(0.0);
        self.display.clear_input_field();
        self.display.display_difficulty_label(&self.difficulty_label);
        self.display
            .render_word_feedback(&unstyled(&self.displayed_reference));
        self.display.set_controls_enabled(true, false, false);
        self.display.focus_input_field();

        debug!("session reset");
    }

    /// Records the current input; renders live feedback only while running.
    pub fn on_typed_text_changed(&mut self, text: &str) {
        self.session.typed_text = text.to_string();

        if self.session.listening {
            self.display.render_word_feedback(&self.session.feedback());
        }
    }
}
