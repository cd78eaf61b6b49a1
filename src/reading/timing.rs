use crate::engine::config::TimingConfig;
use crate::reading::Token;

pub fn wpm_to_milliseconds(wpm: u32) -> u64 {
    (60_000.0 / wpm.max(1) as f64).round() as u64
}

fn get_long_word_pause(token: &Token, config: &TimingConfig) -> u64 {
    if token.stripped_len() > config.long_word_threshold {
        config.long_word_pause_ms
    } else {
        0
    }
}

/// How long `token` stays on screen at `wpm`.
///
/// Base delay is one minute divided by the speed. Words whose stripped length
/// exceeds the long-word threshold get a flat extra pause on top.
pub fn calculate_word_delay(token: &Token, wpm: u32, config: &TimingConfig) -> u64 {
    wpm_to_milliseconds(wpm) + get_long_word_pause(token, config)
}
