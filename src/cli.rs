//! Command-line interface for quickread
//!
//! Argument parsing with clap derive, plus the config and logging setup
//! that the arguments feed into.

use crate::engine::{Config, QuickreadError};
use crate::input::{self, LoadedText};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "quickread.toml";

/// Filter variable for the log file
pub const LOG_ENV: &str = "QUICKREAD_LOG";

/// Speed reader for the terminal: one word at a time, anchored on its focal letter
#[derive(Parser, Debug, Default)]
#[command(name = "quickread", version, about)]
pub struct Cli {
    /// Text file to read immediately
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Starting speed in words per minute (50-1500)
    #[arg(long, value_name = "WPM")]
    pub wpm: Option<u32>,

    /// Read the clipboard contents immediately
    #[arg(long, conflicts_with = "file")]
    pub clipboard: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Config file, environment, then command-line flags, later wins.
    pub fn resolve_config(&self) -> Result<Config, QuickreadError> {
        let path = self
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        // An explicitly named config must exist
        let config = if self.config.is_some() {
            Config::load(&path)?
        } else {
            Config::load_or_default(&path)?
        };

        Ok(self.apply_overrides(config.with_env_overrides()))
    }

    /// Text named on the command line, if any. Load failures are fatal here.
    pub fn preload(&self) -> Result<Option<LoadedText>, QuickreadError> {
        let loaded = if let Some(path) = &self.file {
            input::file::load(path)?
        } else if self.clipboard {
            input::clipboard::load()?
        } else {
            return Ok(None);
        };

        log::info!("preloaded {} bytes from {}", loaded.text.len(), loaded.source);
        Ok(Some(loaded))
    }

    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(wpm) = self.wpm {
            config.timing.wpm = config.timing.clamp_entry(wpm);
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        config
    }
}

/// Install env_logger writing to `file`; no file means no logger.
pub fn init_logging(file: Option<&Path>, default_level: &str) -> Result<(), QuickreadError> {
    let Some(path) = file else {
        return Ok(());
    };

    let target = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, default_level))
        .target(env_logger::Target::Pipe(Box::new(target)))
        .format_timestamp_millis()
        .init();

    log::info!("logging to {}", path.display());
    Ok(())
}
