use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Raw text handed to the reader, before any extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedText {
    pub text: String,
    pub source: String,
}

pub mod clipboard;
pub mod file;
