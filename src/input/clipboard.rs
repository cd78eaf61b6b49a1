use super::{LoadError, LoadedText};
use arboard::Clipboard;

/// Load whatever text is currently on the system clipboard.
pub fn load() -> Result<LoadedText, LoadError> {
    let mut clipboard = Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    from_text(text)
}

fn from_text(text: String) -> Result<LoadedText, LoadError> {
    if text.trim().is_empty() {
        return Err(LoadError::Clipboard("clipboard holds no text".to_string()));
    }

    Ok(LoadedText {
        text,
        source: "clipboard".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_rejects_blank() {
        let result = from_text("  \n\t".to_string());
        assert!(matches!(result, Err(LoadError::Clipboard(_))));
    }

    #[test]
    fn test_from_text_keeps_content() {
        let loaded = from_text("copied words".to_string()).unwrap();
        assert_eq!(loaded.text, "copied words");
        assert_eq!(loaded.source, "clipboard");
    }
}
