//! Optimal Recognition Point (ORP) anchor calculation
//!
//! The anchor letter is the one the eye should land on. Its index depends on
//! the length of the word with punctuation stripped:
//! - 0-1 chars → position 0
//! - 2-5 chars → position 1
//! - 6-9 chars → position 2
//! - 10-13 chars → position 3
//! - 14+ chars → position 4
//!
//! The index is applied to the *original* token, punctuation included, so a
//! leading quote or bracket shifts the highlighted character.

use crate::reading::token::{strip_non_word, Token};
use unicode_segmentation::UnicodeSegmentation;

pub fn calculate_anchor_position(word: &str) -> usize {
    anchor_for_length(strip_non_word(word).chars().count())
}

pub fn anchor_for_length(len: usize) -> usize {
    match len {
        0..=1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}

/// A token cut into the three pieces the reader renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrpSegments {
    pub before: String,
    pub anchor: String,
    pub after: String,
}

impl OrpSegments {
    pub fn for_token(token: &Token) -> Self {
        split_at_anchor(token.as_str(), anchor_for_length(token.stripped_len()))
    }
}

/// Splits `word` into `[0, anchor)`, `[anchor]` and `(anchor, end)` by grapheme.
///
/// An anchor past the end yields an empty anchor and suffix.
pub fn split_at_anchor(word: &str, anchor: usize) -> OrpSegments {
    let graphemes: Vec<&str> = word.graphemes(true).collect();

    if anchor >= graphemes.len() {
        return OrpSegments {
            before: word.to_string(),
            anchor: String::new(),
            after: String::new(),
        };
    }

    OrpSegments {
        before: graphemes[..anchor].concat(),
        anchor: graphemes[anchor].to_string(),
        after: graphemes[anchor + 1..].concat(),
    }
}
