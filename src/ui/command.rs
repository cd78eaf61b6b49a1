//! Command parsing for the TUI command deck
//!
//! Parses a submitted command line, supporting:
//! - `:q` or `:quit` → Quit, `:h` or `:help` → Help
//! - `:start` or `:go` → start reading the buffered text
//! - `:wpm N` → speed entry, `:seek N` → jump to word N
//! - `:load PATH` → load a text file, `:paste` → load the clipboard
//! - `:fixed`, `:restart`, `:clear`, `:exit`
//! - anything else, blank lines included → text appended to the buffer

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Start,
    Exit,
    Clear,
    Restart,
    ToggleFixed,
    SetWpm(String),
    Seek(String),
    LoadFile(String),
    LoadClipboard,
    Text(String),
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    // Only ':' lines are commands; everything else is text to read
    if let Some(cmd) = input.strip_prefix(':') {
        let mut parts = cmd.trim().splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or("");
        let arg = parts.next().unwrap_or("").trim().to_string();

        match name {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            "start" | "go" => Command::Start,
            "exit" => Command::Exit,
            "clear" => Command::Clear,
            "restart" => Command::Restart,
            "fixed" | "lock" => Command::ToggleFixed,
            "wpm" => Command::SetWpm(arg),
            "seek" | "goto" => Command::Seek(arg),
            "load" | "open" if !arg.is_empty() => Command::LoadFile(arg),
            "paste" | "clip" => Command::LoadClipboard,
            _ => Command::Unknown(input.to_string()),
        }
    } else {
        Command::Text(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
///
/// This is the translation layer between command deck input and App core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Start => AppEvent::Start,
        Command::Exit => AppEvent::Exit,
        Command::Clear => AppEvent::ClearText,
        Command::Restart => AppEvent::Restart,
        Command::ToggleFixed => AppEvent::ToggleFixed,
        Command::SetWpm(raw) => AppEvent::SetWpm(raw),
        Command::Seek(raw) => AppEvent::Seek(raw),
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Text(text) => AppEvent::AppendText(text),
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
