// Configuration for the quickread engine and UI components
// Every section falls back to its defaults when missing from the TOML file

use crate::engine::error::QuickreadError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Pacing configuration for the playback engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Words per minute reading speed (default 300)
    pub wpm: u32,

    /// Bounds for direct numeric entry and coarse keyboard steps
    pub min_wpm: u32,
    pub max_wpm: u32,

    /// Lowest speed reachable through fine steps (default 25)
    pub floor_wpm: u32,

    pub coarse_step: u32, // default 50 (arrow keys)
    pub fine_step: u32,   // default 25 (+/- keys)

    /// Stripped length above which a word gets the extra pause (default 8)
    pub long_word_threshold: usize,

    /// Flat extra pause for long words (default 300ms)
    pub long_word_pause_ms: u64,

    /// Auto-acceleration never raises speed beyond this (default 400)
    pub acceleration_ceiling_wpm: u32,
    pub acceleration_step_wpm: u32,    // default 3
    pub acceleration_interval_ms: u64, // default 2000

    /// Re-check interval while paused (default 50ms)
    pub pause_poll_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            wpm: 300,
            min_wpm: 50,
            max_wpm: 1500,
            floor_wpm: 25,
            coarse_step: 50,
            fine_step: 25,
            long_word_threshold: 8,
            long_word_pause_ms: 300,
            acceleration_ceiling_wpm: 400,
            acceleration_step_wpm: 3,
            acceleration_interval_ms: 2000,
            pause_poll_ms: 50,
        }
    }
}

impl TimingConfig {
    /// Clamp a speed typed in by the user.
    pub fn clamp_entry(&self, wpm: u32) -> u32 {
        wpm.clamp(self.min_wpm, self.max_wpm.max(self.min_wpm))
    }

    /// Parse a typed speed from its leading digits, so `"450abc"` is 450 and
    /// `"12.5"` is 12 before clamping. No digits, or zero, gives the default.
    pub fn parse_wpm_entry(&self, raw: &str) -> u32 {
        match leading_integer(raw) {
            Some(value) if value != 0 => {
                let value = value.clamp(0, u32::MAX as i64) as u32;
                self.clamp_entry(value)
            }
            _ => Self::default().wpm,
        }
    }
}

/// Optional sign and the run of digits at the start of `raw`.
fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude = rest[..digits_end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Reading view configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Number of words before/after the current one (default 3)
    pub context_words: usize,

    /// Context words longer than this are cut for display (default 12)
    pub context_truncate: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            context_words: 3,
            context_truncate: 12,
        }
    }
}

/// Theme configuration, colors as `#RRGGBB`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background_color: String,
    pub text_color: String,
    pub anchor_color: String,
    pub dimmed_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_color: "#0A0A0A".to_string(),
            text_color: "#FFFFFF".to_string(),
            anchor_color: "#FF3B3B".to_string(),
            dimmed_color: "#4A4A4A".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file; the terminal belongs to the UI so nothing is logged without one
    pub file: Option<PathBuf>,

    /// Filter used when `QUICKREAD_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

/// Master configuration combining all quickread settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timing: TimingConfig,
    pub reader: ReaderConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, QuickreadError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, QuickreadError> {
        Ok(toml::from_str(contents)?)
    }

    /// Like [`Config::load`], but a missing file just means defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, QuickreadError> {
        match Self::load(path) {
            Err(QuickreadError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Apply environment variable overrides
    ///
    /// - QUICKREAD_WPM → timing.wpm (clamped like typed entry)
    pub fn with_env_overrides(self) -> Self {
        let wpm = std::env::var("QUICKREAD_WPM").ok();
        self.with_wpm_override(wpm.as_deref())
    }

    fn with_wpm_override(mut self, raw: Option<&str>) -> Self {
        if let Some(raw) = raw.filter(|value| !value.trim().is_empty()) {
            self.timing.wpm = self.timing.parse_wpm_entry(raw);
        }
        self
    }
}
