use super::{LoadError, LoadedText};
use std::path::Path;

/// Load a plain text file as raw reading input.
pub fn load(path: impl AsRef<Path>) -> Result<LoadedText, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    Ok(LoadedText {
        text,
        source: format!("file:{}", path.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_error() {
        let file = NamedTempFile::new().unwrap();
        let result = load(file.path());
        assert!(matches!(result, Err(LoadError::EmptyFile(_))));
    }

    #[test]
    fn test_whitespace_file_is_empty() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"  \n\n  ").unwrap();
        assert!(matches!(load(file.path()), Err(LoadError::EmptyFile(_))));
    }

    #[test]
    fn test_nonexistent_file_error() {
        let result = load("nonexistent_file_12345.txt");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_valid_file_loads() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"hello world").unwrap();

        let loaded = load(file.path()).unwrap();
        assert_eq!(loaded.text, "hello world");
        assert!(loaded.source.starts_with("file:"));
    }
}
