use crate::feedback::WordFeedback;

/// Outbound side of the session engine.
///
/// Every method defaults to doing nothing, so a front end without a given
/// sink just leaves that method alone and the engine carries on.
pub trait Display {
    fn set_controls_enabled(&mut self, _start: bool, _stop: bool, _retry: bool) {}

    /// Seconds since start, unformatted. See [`format_elapsed`].
    fn display_elapsed_seconds(&mut self, _value: f64) {}

    /// Raw words per minute. See [`format_wpm`].
    fn display_wpm(&mut self, _value: f64) {}

    fn display_accuracy(&mut self, _value: f64) {}

    fn display_difficulty_label(&mut self, _label: &str) {}

    fn render_word_feedback(&mut self, _feedback: &[WordFeedback]) {}

    fn clear_input_field(&mut self) {}

    fn focus_input_field(&mut self) {}
}

/// Two decimal places, e.g. `10.00`
pub fn format_elapsed(seconds: f64) -> String {
    format!("{seconds:.2}")
}

/// Nearest whole number, e.g. `30`
pub fn format_wpm(wpm: f64) -> String {
    format!("{}", wpm.round() as i64)
}

/// A display that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl Display for NullDisplay {}

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayUpdate {
    Controls { start: bool, stop: bool, retry: bool },
    Elapsed(f64),
    Wpm(f64),
    Accuracy(f64),
    DifficultyLabel(String),
    WordFeedback(Vec<WordFeedback>),
    ClearInput,
    FocusInput,
}

/// Keeps every update in arrival order, for headless use and tests
#[derive(Debug, Default, Clone)]
pub struct RecordingDisplay {
    pub updates: Vec<DisplayUpdate>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DisplayUpdate> {
        std::mem::take(&mut self.updates)
    }

    pub fn last_feedback(&self) -> Option<&[WordFeedback]> {
        self.updates.iter().rev().find_map(|u| match u {
            DisplayUpdate::WordFeedback(f) => Some(f.as_slice()),
            _ => None,
        })
    }

    pub fn last_controls(&self) -> Option<(bool, bool, bool)> {
        self.updates.iter().rev().find_map(|u| match *u {
            DisplayUpdate::Controls { start, stop, retry } => Some((start, stop, retry)),
            _ => None,
        })
    }

    pub fn last_elapsed(&self) -> Option<f64> {
        self.updates.iter().rev().find_map(|u| match *u {
            DisplayUpdate::Elapsed(v) => Some(v),
            _ => None,
        })
    }

    pub fn last_wpm(&self) -> Option<f64> {
        self.updates.iter().rev().find_map(|u| match *u {
            DisplayUpdate::Wpm(v) => Some(v),
            _ => None,
        })
    }
}

impl Display for RecordingDisplay {
    fn set_controls_enabled(&mut self, start: bool, stop: bool, retry: bool) {
        self.updates
            .push(DisplayUpdate::Controls { start, stop, retry });
    }

    fn display_elapsed_seconds(&mut self, value: f64) {
        self.updates.push(DisplayUpdate::Elapsed(value));
    }

    fn display_wpm(&mut self, value: f64) {
        self.updates.push(DisplayUpdate::Wpm(value));
    }

    fn display_accuracy(&mut self, value: f64) {
        self.updates.push(DisplayUpdate::Accuracy(value));
    }

    fn display_difficulty_label(&mut self, label: &str) {
        self.updates
            .push(DisplayUpdate::DifficultyLabel(label.to_string()));
    }

    fn render_word_feedback(&mut self, feedback: &[WordFeedback]) {
        self.updates
            .push(DisplayUpdate::WordFeedback(feedback.to_vec()));
    }

    fn clear_input_field(&mut self) {
        self.updates.push(DisplayUpdate::ClearInput);
    }

    fn focus_input_field(&mut self) {
        self.updates.push(DisplayUpdate::FocusInput);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(10.0), "10.00");
        assert_eq!(format_elapsed(0.0), "0.00");
        assert_eq!(format_elapsed(3.14159), "3.14");
    }

    #[test]
    fn test_format_wpm() {
        assert_eq!(format_wpm(30.0), "30");
        assert_eq!(format_wpm(29.5), "30");
        assert_eq!(format_wpm(8.571428), "9");
        assert_eq!(format_wpm(0.0), "0");
    }

    #[test]
    fn test_partial_display_only_sees_what_it_implements() {
        #[derive(Default)]
        struct WpmOnly(Vec<f64>);
        impl Display for WpmOnly {
            fn display_wpm(&mut self, value: f64) {
                self.0.push(value);
            }
        }

        let mut d = WpmOnly::default();
        d.set_controls_enabled(true, false, false);
        d.display_elapsed_seconds(1.0);
        d.display_wpm(42.0);
        d.clear_input_field();

        assert_eq!(d.0, vec![42.0]);
    }

    #[test]
    fn test_recording_display_take_drains() {
        let mut d = RecordingDisplay::new();
        d.display_wpm(1.0);
        d.focus_input_field();

        assert_eq!(
            d.take(),
            vec![DisplayUpdate::Wpm(1.0), DisplayUpdate::FocusInput]
        );
        assert!(d.updates.is_empty());
    }
}
