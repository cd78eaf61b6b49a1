use crate::input::LoadError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuickreadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Load(#[from] LoadError),
}
