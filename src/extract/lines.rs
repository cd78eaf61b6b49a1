use super::patterns::{is_nav_line, mentions_stock_site, COPYRIGHT_MARK};

/// Lines with this many words or fewer get the navigation checks.
const SHORT_LINE_WORDS: usize = 3;

/// Short lines under this many characters need sentence punctuation to survive.
const MIN_BARE_LINE_CHARS: usize = 20;

const SENTENCE_PUNCTUATION: &[char] = &['.', '?', '!', ',', ';', ':'];

/// Why a line was dropped; only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineVerdict {
    Keep,
    Blank,
    Copyright,
    StockCredit,
    Navigation,
    BareFragment,
}

pub fn classify_line(trimmed: &str) -> LineVerdict {
    if trimmed.is_empty() {
        return LineVerdict::Blank;
    }

    if trimmed.contains(COPYRIGHT_MARK) || trimmed.to_lowercase().contains("copyright") {
        return LineVerdict::Copyright;
    }

    if mentions_stock_site(trimmed) {
        return LineVerdict::StockCredit;
    }

    if trimmed.split_whitespace().count() <= SHORT_LINE_WORDS {
        let collapsed: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
        if is_nav_line(&collapsed) {
            return LineVerdict::Navigation;
        }
        if trimmed.chars().count() < MIN_BARE_LINE_CHARS
            && !trimmed.contains(SENTENCE_PUNCTUATION)
        {
            return LineVerdict::BareFragment;
        }
    }

    LineVerdict::Keep
}

/// Drops chrome lines and flattens the survivors into one word list.
pub fn filter_lines(raw: &str) -> Vec<String> {
    let mut kept: Vec<&str> = Vec::new();
    let mut dropped = 0usize;

    for line in raw.lines() {
        let trimmed = line.trim();
        match classify_line(trimmed) {
            LineVerdict::Keep => kept.push(trimmed),
            LineVerdict::Blank => {}
            verdict => {
                dropped += 1;
                log::trace!("dropping line ({:?}): {:?}", verdict, trimmed);
            }
        }
    }

    log::debug!("line filter kept {} lines, dropped {}", kept.len(), dropped);

    kept.join(" ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_ignored() {
        assert_eq!(classify_line(""), LineVerdict::Blank);
        assert_eq!(filter_lines("\n   \n\t\n"), Vec::<String>::new());
    }

    #[test]
    fn test_copyright_lines_dropped() {
        assert_eq!(
            classify_line("© 2024 Example Media Group. All rights reserved."),
            LineVerdict::Copyright
        );
        assert_eq!(
            classify_line("Content is COPYRIGHT of the original publisher, sadly."),
            LineVerdict::Copyright
        );
    }

    #[test]
    fn test_stock_credit_lines_dropped() {
        assert_eq!(
            classify_line("Image credit: Jane Doe / Shutterstock, used with license."),
            LineVerdict::StockCredit
        );
    }

    #[test]
    fn test_short_navigation_terms_dropped() {
        assert_eq!(classify_line("Subscribe"), LineVerdict::Navigation);
        assert_eq!(classify_line("Sign In"), LineVerdict::Navigation);
        assert_eq!(classify_line("Log out"), LineVerdict::Navigation);
    }

    #[test]
    fn test_short_bare_fragment_dropped() {
        assert_eq!(classify_line("Home About Contact"), LineVerdict::BareFragment);
        assert_eq!(classify_line("Latest stories"), LineVerdict::BareFragment);
    }

    #[test]
    fn test_short_line_with_punctuation_kept() {
        assert_eq!(classify_line("Yes, really."), LineVerdict::Keep);
        assert_eq!(classify_line("Why?"), LineVerdict::Keep);
    }

    #[test]
    fn test_short_line_of_twenty_chars_kept() {
        // 3 words, 20+ chars, no punctuation
        assert_eq!(classify_line("Extraordinary mountain railways"), LineVerdict::Keep);
    }

    #[test]
    fn test_long_line_never_checked_for_nav_terms() {
        assert_eq!(classify_line("home is where the heart is"), LineVerdict::Keep);
    }

    #[test]
    fn test_filter_lines_flattens_words() {
        let words = filter_lines("Menu\nThe first line, here.\n\n  second   line  continues.  ");
        assert_eq!(
            words,
            vec!["The", "first", "line,", "here.", "second", "line", "continues."]
        );
    }

    #[test]
    fn test_filter_lines_handles_crlf() {
        let words = filter_lines("Hello there, friend.\r\nGoodbye now, friend.\r\n");
        assert_eq!(words, vec!["Hello", "there,", "friend.", "Goodbye", "now,", "friend."]);
    }
}
