#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Composing the text to read: paste, type, load files or the clipboard.
    Input,
    Reading,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appmode_enum_exists() {
        let _mode = AppMode::Input;
        let _mode = AppMode::Reading;
        let _mode = AppMode::Quit;
    }
}
