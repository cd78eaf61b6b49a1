use crate::reading::TokenStream;

/// Dimmed neighbours shown around the current word.
///
/// Always holds exactly `width` entries per side; positions that fall outside
/// the stream are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContextWindow {
    pub before: Vec<String>,
    pub after: Vec<String>,
}

impl ContextWindow {
    pub fn around(tokens: &TokenStream, current_index: usize, width: usize) -> Self {
        let slice = tokens.as_slice();
        let current_index = current_index.min(slice.len());

        let start = current_index.saturating_sub(width);
        let mut before: Vec<String> = slice[start..current_index]
            .iter()
            .map(|t| t.text.clone())
            .collect();
        while before.len() < width {
            before.insert(0, String::new());
        }

        let from = (current_index + 1).min(slice.len());
        let end = std::cmp::min(current_index + width + 1, slice.len());
        let mut after: Vec<String> = slice[from..end.max(from)]
            .iter()
            .map(|t| t.text.clone())
            .collect();
        after.resize(width, String::new());

        Self { before, after }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(n: usize) -> TokenStream {
        TokenStream::from_words((0..n).map(|i| format!("w{}", i)))
    }

    #[test]
    fn test_context_middle_of_stream() {
        let window = ContextWindow::around(&stream(10), 5, 3);
        assert_eq!(window.before, vec!["w2", "w3", "w4"]);
        assert_eq!(window.after, vec!["w6", "w7", "w8"]);
    }

    #[test]
    fn test_context_pads_at_start() {
        let window = ContextWindow::around(&stream(10), 1, 3);
        assert_eq!(window.before, vec!["", "", "w0"]);
        assert_eq!(window.after, vec!["w2", "w3", "w4"]);
    }

    #[test]
    fn test_context_pads_at_end() {
        let window = ContextWindow::around(&stream(10), 9, 3);
        assert_eq!(window.before, vec!["w6", "w7", "w8"]);
        assert_eq!(window.after, vec!["", "", ""]);
    }

    #[test]
    fn test_context_empty_stream() {
        let window = ContextWindow::around(&TokenStream::default(), 0, 3);
        assert_eq!(window.before, vec!["", "", ""]);
        assert_eq!(window.after, vec!["", "", ""]);
    }

    #[test]
    fn test_context_single_token() {
        let window = ContextWindow::around(&stream(1), 0, 3);
        assert_eq!(window.before.len(), 3);
        assert_eq!(window.after.len(), 3);
        assert!(window.before.iter().chain(&window.after).all(String::is_empty));
    }
}
