use crate::app::{AppEvent, AppMode};
use crate::ui::command::{command_to_app_event, parse_command};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Line being typed into the command deck.
///
/// Always live in input mode; in reading mode it opens with `:`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CommandLine {
    buffer: String,
    active: bool,
}

impl CommandLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn open(&mut self, prefix: char) {
        self.active = true;
        self.buffer.clear();
        self.buffer.push(prefix);
    }

    pub fn close(&mut self) {
        self.active = false;
        self.buffer.clear();
    }

    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Take the typed text and reset the line.
    pub fn submit(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.buffer)
    }
}

/// Keys while reading with the command deck closed.
pub fn reading_key_event(code: KeyCode) -> Option<AppEvent> {
    match code {
        KeyCode::Char(' ') => Some(AppEvent::TogglePause),
        KeyCode::Right => Some(AppEvent::StepForward),
        KeyCode::Left => Some(AppEvent::StepBackward),
        KeyCode::Up => Some(AppEvent::SpeedUp),
        KeyCode::Down => Some(AppEvent::SpeedDown),
        KeyCode::Esc => Some(AppEvent::Exit),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(AppEvent::SpeedFineUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(AppEvent::SpeedFineDown),
        KeyCode::Char('r') => Some(AppEvent::Restart),
        KeyCode::Char('f') => Some(AppEvent::ToggleFixed),
        KeyCode::Char('?') => Some(AppEvent::Help),
        _ => None,
    }
}

/// Route one key press. Keys that only edit the command line yield `AppEvent::None`.
pub fn handle_key(mode: AppMode, line: &mut CommandLine, key: KeyEvent) -> AppEvent {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppEvent::Quit;
    }

    match mode {
        AppMode::Input => edit_line(line, key.code, false),
        AppMode::Reading if line.is_active() => edit_line(line, key.code, true),
        AppMode::Reading => match key.code {
            KeyCode::Char(':') => {
                line.open(':');
                AppEvent::None
            }
            code => reading_key_event(code).unwrap_or(AppEvent::None),
        },
        AppMode::Quit => AppEvent::None,
    }
}

fn edit_line(line: &mut CommandLine, code: KeyCode, closes_when_empty: bool) -> AppEvent {
    match code {
        KeyCode::Enter => command_to_app_event(parse_command(&line.submit())),
        KeyCode::Esc => {
            line.close();
            AppEvent::None
        }
        KeyCode::Backspace => {
            line.backspace();
            if closes_when_empty && line.as_str().is_empty() {
                line.close();
            }
            AppEvent::None
        }
        KeyCode::Char(c) => {
            line.push(c);
            AppEvent::None
        }
        _ => AppEvent::None,
    }
}
