/// Application events
///
/// Everything the user can ask for, whether it came from a key, the command
/// deck or a bracketed paste.
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    AppendText(String),
    ClearText,
    Start,
    /// Raw speed entry; parsed with the configured fallback.
    SetWpm(String),
    /// Raw 1-based word number.
    Seek(String),
    TogglePause,
    StepForward,
    StepBackward,
    SpeedUp,
    SpeedDown,
    SpeedFineUp,
    SpeedFineDown,
    ToggleFixed,
    Restart,
    Exit,
    Quit,
    Help,
    InvalidCommand(String),
    None,
}
