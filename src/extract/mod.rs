//! Content extraction for pasted text.
//!
//! Text copied out of a browser drags navigation bars, cookie banners, share
//! buttons and footers along with the article. This module strips the common
//! cases with a vocabulary heuristic. It is not a parser: it reduces typical
//! boilerplate and makes no promise about separating content from noise.
//!
//! # Module Structure
//!
//! - `patterns`: stock-site, navigation and boilerplate vocabularies
//! - `lines`: per-line filtering and flattening into words
//! - `boundary`: content start detection and footer cutoff

pub mod boundary;
pub mod lines;
pub mod patterns;

pub use boundary::{detect_content, is_junk};
pub use lines::{classify_line, filter_lines, LineVerdict};

use crate::reading::TokenStream;

/// Cleaned results this short are distrusted in favour of the line-filtered words.
const MIN_CLEANED_WORDS: usize = 20;

/// Turn raw pasted text into the ordered words to display.
///
/// Deterministic and side-effect free. When the word-level pass keeps 20 words
/// or fewer, the line-filtered word list is returned instead so short inputs
/// are never emptied by the heuristic.
pub fn extract(raw: &str) -> TokenStream {
    let all_words = filter_lines(raw);
    let cleaned = detect_content(&all_words);

    if cleaned.len() > MIN_CLEANED_WORDS {
        log::debug!(
            "extracted {} of {} words",
            cleaned.len(),
            all_words.len()
        );
        TokenStream::from_words(cleaned)
    } else {
        log::debug!(
            "content pass kept only {} words, using all {} filtered words",
            cleaned.len(),
            all_words.len()
        );
        TokenStream::from_words(all_words)
    }
}
