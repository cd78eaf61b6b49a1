use std::fmt;

/// A single display word for RSVP reading.
///
/// Holds the original text exactly as it appeared in the source, punctuation
/// and case included. Tokens never change once extracted.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Character count of the stripped form; drives both ORP and long-word timing.
    pub fn stripped_len(&self) -> usize {
        self.text.chars().filter(|&c| is_word_char(c)).count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Removes everything except letters, digits and underscores.
pub fn strip_non_word(word: &str) -> String {
    word.chars().filter(|&c| is_word_char(c)).collect()
}

/// Ordered sequence of tokens in reading order, produced once per input text.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: words.into_iter().map(Token::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn last_index(&self) -> Option<usize> {
        self.tokens.len().checked_sub(1)
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Plain word list, mostly useful for comparisons in tests and logging.
    pub fn words(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_keeps_original_text() {
        let token = Token::new("World!");
        assert_eq!(token.as_str(), "World!");
        assert_eq!(token.to_string(), "World!");
    }

    #[test]
    fn test_stripped_removes_punctuation() {
        assert_eq!(strip_non_word("\"hello,\""), "hello");
        assert_eq!(strip_non_word("don't"), "dont");
        assert_eq!(strip_non_word("snake_case"), "snake_case");
    }

    #[test]
    fn test_stripped_len_matches_stripped() {
        let token = Token::new("(extraordinary)");
        assert_eq!(token.stripped_len(), 13);
        assert_eq!(token.stripped_len(), strip_non_word(token.as_str()).chars().count());
    }

    #[test]
    fn test_stripped_len_pure_punctuation() {
        assert_eq!(Token::new("—").stripped_len(), 0);
    }

    #[test]
    fn test_stream_from_words() {
        let stream = TokenStream::from_words(["one", "two", "three"]);
        assert_eq!(stream.len(), 3);
        assert_eq!(stream.get(1).map(Token::as_str), Some("two"));
        assert_eq!(stream.last_index(), Some(2));
        assert_eq!(stream.words(), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_empty_stream() {
        let stream = TokenStream::default();
        assert!(stream.is_empty());
        assert_eq!(stream.last_index(), None);
        assert!(stream.get(0).is_none());
    }
}
