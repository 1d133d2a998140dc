use itertools::{EitherOrBoth, Itertools};

use crate::normalize::normalize_word;

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum WordStatus {
    Untyped,
    Correct,
    Incorrect,
}

/// A reference word as it should be displayed, with its live status
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordFeedback {
    pub word: String,
    pub status: WordStatus,
}

impl WordFeedback {
    pub fn new(word: impl Into<String>, status: WordStatus) -> Self {
        Self {
            word: word.into(),
            status,
        }
    }
}

/// Mark every reference word against the typed word in the same slot.
///
/// Words are split on raw whitespace so the reference keeps its casing and
/// punctuation for display; only the equality check is normalized. Typed
/// words past the end of the reference are ignored.
pub fn render_feedback(reference: &str, typed: &str) -> Vec<WordFeedback> {
    reference
        .split_whitespace()
        .zip_longest(typed.split_whitespace())
        .filter_map(|pair| match pair {
            EitherOrBoth::Both(expected, actual) => {
                let status = if normalize_word(expected) == normalize_word(actual) {
                    WordStatus::Correct
                } else {
                    WordStatus::Incorrect
                };
                Some(WordFeedback::new(expected, status))
            }
            EitherOrBoth::Left(expected) => Some(WordFeedback::new(expected, WordStatus::Untyped)),
            EitherOrBoth::Right(_) => None,
        })
        .collect()
}

/// The reference with no highlighting at all
pub fn unstyled(reference: &str) -> Vec<WordFeedback> {
    reference
        .split_whitespace()
        .map(|w| WordFeedback::new(w, WordStatus::Untyped))
        .collect()
}
