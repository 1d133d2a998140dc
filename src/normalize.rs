use std::fmt;

use unicode_general_category::{get_general_category, GeneralCategory};

/// A word reduced to its comparable form: lowercase letters, digits and apostrophes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

// letters are general category L only; combining marks are dropped
fn is_kept(c: char) -> bool {
    is_letter(c) || c.is_numeric() || c == '\''
}

/// Lowercase a single raw word and drop everything but letters, digits and apostrophes.
///
/// Punctuation-only input yields an empty string.
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase().chars().filter(|&c| is_kept(c)).collect()
}

/// Split `text` on whitespace and normalize every word, skipping words that
/// normalize to nothing.
pub fn normalize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .map(normalize_word)
        .filter(|w| !w.is_empty())
        .map(Token)
        .collect()
}
