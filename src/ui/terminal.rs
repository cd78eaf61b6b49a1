use crate::app::{App, AppEvent, AppMode};
use crate::engine::{Clock, TickOutcome};
use crate::ui::input_view::{render_help, render_input_screen};
use crate::ui::keys::{handle_key, CommandLine};
use crate::ui::reader::view::{render_command_deck, render_reader};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Event wait when no playback timer is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    command_line: CommandLine,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new(theme: Theme) -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            theme,
            command_line: CommandLine::new(),
            _guard: guard,
        })
    }

    /// Drive the app until it quits.
    ///
    /// Waits on terminal input for at most the time left until the
    /// playback deadline, then fires any due timer.
    pub fn run_event_loop(&mut self, app: &mut App, clock: &impl Clock) -> io::Result<()> {
        let mut needs_redraw = true;

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            match app.poll_playback(clock.now_ms()) {
                TickOutcome::Advanced(_) | TickOutcome::Finished => needs_redraw = true,
                _ => {}
            }

            if needs_redraw {
                self.render_frame(app)?;
                needs_redraw = false;
            }

            let timeout = match app.next_deadline() {
                Some(deadline) => {
                    Duration::from_millis(deadline.saturating_sub(clock.now_ms()))
                }
                None => IDLE_POLL,
            };

            if event::poll(timeout)? {
                let terminal_event = event::read()?;
                needs_redraw |= self.handle_terminal_event(app, terminal_event, clock.now_ms());
            }
        }
    }

    /// Returns whether the screen needs redrawing.
    fn handle_terminal_event(&mut self, app: &mut App, terminal_event: Event, now_ms: u64) -> bool {
        match terminal_event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let app_event = handle_key(app.mode(), &mut self.command_line, key);
                if app_event != AppEvent::None {
                    log::debug!("key event: {:?}", app_event);
                    app.handle_event(app_event, now_ms);
                }
                true
            }
            Event::Paste(text) => {
                if app.mode() == AppMode::Input {
                    app.handle_event(AppEvent::AppendText(text), now_ms);
                }
                true
            }
            Event::Resize(_, _) => true,
            _ => false,
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        let theme = self.theme;
        let command_line = &self.command_line;
        let truncate = app.config().reader.context_truncate;

        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(2)])
                .split(area);

            match render_state.mode {
                AppMode::Reading => {
                    render_reader(frame, chunks[0], &render_state, truncate, &theme)
                }
                _ => render_input_screen(frame, chunks[0], app, &theme),
            }

            render_command_deck(frame, chunks[1], command_line, app.message(), &theme);

            if app.show_help() {
                render_help(frame, area, &theme);
            }
        })?;

        Ok(())
    }
}
