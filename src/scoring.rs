use crate::normalize::normalize;

/// Final numbers for a stopped session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionResult {
    pub elapsed_secs: f64,
    pub correct_words: usize,
    pub reference_words: usize,
    pub typed_words: usize,
    pub wpm: f64,
    pub accuracy: f64,
}

/// Number of positions where the normalized typed word equals the normalized sample word.
///
/// Only the first `min(sample, typed)` tokens are compared.
pub fn count_correct(sample: &str, typed: &str) -> usize {
    let sample_tokens = normalize(sample);
    let typed_tokens = normalize(typed);

    sample_tokens
        .iter()
        .zip(typed_tokens.iter())
        .filter(|(expected, actual)| expected == actual)
        .count()
}

pub fn compute_wpm(correct_words: usize, elapsed_secs: f64) -> f64 {
    if elapsed_secs > 0.0 {
        correct_words as f64 / elapsed_secs * 60.0
    } else {
        0.0
    }
}

/// Percentage of the reference's words that were typed correctly.
pub fn compute_accuracy(correct_words: usize, reference_words: usize) -> f64 {
    match reference_words {
        0 => 0.0,
        total => correct_words as f64 / total as f64 * 100.0,
    }
}

pub fn score(sample: &str, typed: &str, elapsed_secs: f64) -> SessionResult {
    let correct_words = count_correct(sample, typed);
    let reference_words = normalize(sample).len();

    SessionResult {
        elapsed_secs,
        correct_words,
        reference_words,
        typed_words: normalize(typed).len(),
        wpm: compute_wpm(correct_words, elapsed_secs),
        accuracy: compute_accuracy(correct_words, reference_words),
    }
}
