//! Second pass over the flattened word list: find where the article starts
//! and, if a long run of boilerplate shows up later, where it ends.

use super::patterns::{
    is_boilerplate_word, is_content_opener, mentions_stock_site, COPYRIGHT_MARK,
};
use crate::reading::strip_non_word;

/// Consecutive junk words tolerated before a footer check runs.
const JUNK_STREAK_LIMIT: usize = 10;

/// Words that must already be kept before a footer can end extraction.
const MIN_KEPT_BEFORE_CUTOFF: usize = 50;

const LOOKAHEAD_WORDS: usize = 20;

/// More junk than this inside the lookahead window ends extraction.
const LOOKAHEAD_JUNK_LIMIT: usize = 10;

/// Words longer than this open content on their own.
const OPENER_MIN_CHARS: usize = 3;

fn clean(word: &str) -> String {
    strip_non_word(word).to_lowercase()
}

/// Boilerplate vocabulary, or a lone character that isn't "a"/"i".
pub fn is_junk(word: &str) -> bool {
    let clean = clean(word);
    is_boilerplate_word(&clean) || (clean.chars().count() <= 1 && clean != "a" && clean != "i")
}

fn never_emitted(word: &str) -> bool {
    mentions_stock_site(word) || word.contains(COPYRIGHT_MARK)
}

fn opens_content(word: &str) -> bool {
    word.chars().count() > OPENER_MIN_CHARS || is_content_opener(word)
}

/// The footer check only counts vocabulary hits, not lone characters.
fn footer_ahead(words: &[String], from: usize) -> bool {
    let end = (from + LOOKAHEAD_WORDS).min(words.len());
    let junk = words[from..end]
        .iter()
        .filter(|w| is_boilerplate_word(&clean(w)))
        .count();
    junk > LOOKAHEAD_JUNK_LIMIT
}

#[derive(Debug, Default)]
struct Scan {
    kept: Vec<String>,
    in_content: bool,
    junk_streak: usize,
}

/// Keeps the words between the first real content word and any trailing footer.
pub fn detect_content(words: &[String]) -> Vec<String> {
    let mut scan = Scan::default();

    for (i, word) in words.iter().enumerate() {
        if never_emitted(word) {
            continue;
        }

        if is_junk(word) {
            scan.junk_streak += 1;
            if !scan.in_content {
                continue;
            }
            if scan.junk_streak > JUNK_STREAK_LIMIT
                && scan.kept.len() > MIN_KEPT_BEFORE_CUTOFF
                && footer_ahead(words, i)
            {
                log::debug!(
                    "footer detected at word {} after {} kept words",
                    i,
                    scan.kept.len()
                );
                break;
            }
        } else {
            scan.junk_streak = 0;
            if !scan.in_content && opens_content(word) {
                log::trace!("content starts at word {}: {:?}", i, word);
                scan.in_content = true;
            }
        }

        if scan.in_content {
            scan.kept.push(word.clone());
        }
    }

    scan.kept
}
