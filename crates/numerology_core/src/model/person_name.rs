//! Validated full name and Latin letter folding.
//!
//! # Responsibility
//! - Normalize free-text names (whitespace, case, diacritics).
//! - Expose the folded `A..=Z` letter sequence used by letter arithmetic.
//!
//! # Invariants
//! - `letters()` is never empty and only contains ASCII uppercase letters.
//! - Accented Latin letters fold to their base letter (compatibility
//!   decomposition, combining marks dropped); everything else that is not a
//!   letter (digits, punctuation, non-Latin scripts) is skipped.
//! - [`search_key`] uses the same folding, so history search is accent and
//!   case insensitive.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Name validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    /// Input is blank.
    Empty,
    /// Input has no Latin letters once normalized.
    NoLetters,
}

impl Display for NameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "full name is empty"),
            Self::NoLetters => write!(f, "full name contains no letters"),
        }
    }
}

impl Error for NameError {}

/// Full name as typed, plus its folded letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName {
    display: String,
    letters: Vec<char>,
}

impl PersonName {
    /// Normalizes and validates a free-text name.
    ///
    /// # Errors
    /// - [`NameError::Empty`] for blank input.
    /// - [`NameError::NoLetters`] when nothing survives letter folding.
    pub fn parse(input: &str) -> Result<Self, NameError> {
        let display = WHITESPACE_RE.replace_all(input.trim(), " ").into_owned();
        if display.is_empty() {
            return Err(NameError::Empty);
        }

        let mut letters = Vec::with_capacity(display.len());
        for upper in strip_marks(&display).flat_map(char::to_uppercase) {
            push_folded(upper, &mut letters);
        }
        if letters.is_empty() {
            return Err(NameError::NoLetters);
        }

        Ok(Self { display, letters })
    }

    /// Whitespace-collapsed name as entered.
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Folded uppercase letters in input order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}

impl Display for PersonName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display)
    }
}

impl TryFrom<String> for PersonName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.display
    }
}

/// Lowercased, accent-free form of `input` used to match names in history.
///
/// `"João  CONCEIÇÃO"` and `"joao conceicao"` share the key
/// `"joao conceicao"`.
pub fn search_key(input: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(input.trim(), " ");
    let mut key = String::with_capacity(collapsed.len());
    for upper in strip_marks(&collapsed).flat_map(char::to_uppercase) {
        match upper {
            ' ' => key.push(' '),
            _ => {
                let mut folded = Vec::with_capacity(2);
                push_folded(upper, &mut folded);
                key.extend(folded.into_iter().map(|letter| letter.to_ascii_lowercase()));
            }
        }
    }
    key
}

fn strip_marks(input: &str) -> impl Iterator<Item = char> + '_ {
    input.nfkd().filter(|ch| !is_combining_mark(*ch))
}

/// Pushes the ASCII letters for `upper`. Stroke letters and ligatures do not
/// decompose and are listed explicitly.
fn push_folded(upper: char, out: &mut Vec<char>) {
    match upper {
        'A'..='Z' => out.push(upper),
        'Đ' | 'Ð' => out.push('D'),
        'Ø' => out.push('O'),
        'Ł' => out.push('L'),
        'Ħ' => out.push('H'),
        'Ŧ' => out.push('T'),
        'ẞ' => out.extend(['S', 'S']),
        'Æ' => out.extend(['A', 'E']),
        'Œ' => out.extend(['O', 'E']),
        _ => {}
    }
}
