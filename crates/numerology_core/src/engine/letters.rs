//! Pythagorean letter table.
//!
//! ```text
//! 1 2 3 4 5 6 7 8 9
//! A B C D E F G H I
//! J K L M N O P Q R
//! S T U V W X Y Z
//! ```
//!
//! Vowels are A, E, I, O and U; Y and W count as consonants.

use crate::model::person_name::PersonName;

/// Value of one folded uppercase letter, or `None` outside `A..=Z`.
pub fn letter_value(letter: char) -> Option<u32> {
    if letter.is_ascii_uppercase() {
        Some((u32::from(letter) - u32::from('A')) % 9 + 1)
    } else {
        None
    }
}

pub fn is_vowel(letter: char) -> bool {
    matches!(letter, 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Unreduced letter sums of one name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSums {
    pub all: u32,
    pub vowels: u32,
    pub consonants: u32,
}

/// Sums letter values over the whole name and over its vowel/consonant
/// subsets.
pub fn letter_sums(name: &PersonName) -> LetterSums {
    let mut sums = LetterSums::default();
    for &letter in name.letters() {
        let Some(value) = letter_value(letter) else {
            continue;
        };
        sums.all += value;
        if is_vowel(letter) {
            sums.vowels += value;
        } else {
            sums.consonants += value;
        }
    }
    sums
}
