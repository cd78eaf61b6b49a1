use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::{Config, PlaybackEngine, TickOutcome};
use crate::extract::extract;
use crate::input::{self, LoadError, LoadedText};

pub struct App {
    mode: AppMode,
    config: Config,
    text: String,
    initial_wpm: u32,
    playback: Option<PlaybackEngine>,
    message: Option<String>,
    show_help: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let initial_wpm = config.timing.clamp_entry(config.timing.wpm);
        Self {
            mode: AppMode::Input,
            config,
            text: String::new(),
            initial_wpm,
            playback: None,
            message: None,
            show_help: false,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The raw text waiting in input mode.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn initial_wpm(&self) -> u32 {
        self.initial_wpm
    }

    pub fn playback(&self) -> Option<&PlaybackEngine> {
        self.playback.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn handle_event(&mut self, event: AppEvent, now_ms: u64) {
        // Any input dismisses the help overlay
        if event != AppEvent::Help && event != AppEvent::None {
            self.show_help = false;
        }

        match self.mode {
            AppMode::Input => self.handle_input_event(event, now_ms),
            AppMode::Reading => self.handle_reading_event(event, now_ms),
            AppMode::Quit => {}
        }
    }

    fn handle_input_event(&mut self, event: AppEvent, now_ms: u64) {
        match event {
            AppEvent::LoadFile(path) => {
                let result = input::file::load(&path);
                self.apply_load(result);
            }
            AppEvent::LoadClipboard => {
                let result = input::clipboard::load();
                self.apply_load(result);
            }
            AppEvent::AppendText(text) => {
                if !self.text.is_empty() && !self.text.ends_with('\n') {
                    self.text.push('\n');
                }
                if text.is_empty() {
                    // Blank line: paragraph break, ignored at the top of the buffer
                    if !self.text.is_empty() {
                        self.text.push('\n');
                    }
                } else {
                    self.text.push_str(&text);
                }
                self.message = None;
            }
            AppEvent::ClearText => {
                self.text.clear();
                self.message = Some("Text cleared".to_string());
            }
            AppEvent::SetWpm(raw) => {
                self.initial_wpm = self.config.timing.parse_wpm_entry(&raw);
                self.message = Some(format!("Starting speed: {} wpm", self.initial_wpm));
            }
            AppEvent::Start => {
                self.start_reading(now_ms);
            }
            AppEvent::Quit | AppEvent::Exit => self.mode = AppMode::Quit,
            AppEvent::Help => self.show_help = !self.show_help,
            AppEvent::InvalidCommand(input) => {
                self.message = Some(format!("Unknown command: {}", input));
            }
            _ => {}
        }
    }

    fn handle_reading_event(&mut self, event: AppEvent, now_ms: u64) {
        match event {
            AppEvent::Exit => {
                self.exit_reading();
                return;
            }
            AppEvent::Quit => {
                self.exit_reading();
                self.mode = AppMode::Quit;
                return;
            }
            AppEvent::Help => {
                self.show_help = !self.show_help;
                return;
            }
            AppEvent::InvalidCommand(input) => {
                self.message = Some(format!("Unknown command: {}", input));
                return;
            }
            _ => {}
        }

        let coarse = self.config.timing.coarse_step as i32;
        let fine = self.config.timing.fine_step as i32;
        let Some(engine) = self.playback.as_mut() else {
            return;
        };

        match event {
            AppEvent::TogglePause => engine.toggle_pause(),
            AppEvent::StepForward => engine.step_forward(),
            AppEvent::StepBackward => engine.step_backward(),
            AppEvent::SpeedUp => engine.adjust_speed(coarse),
            AppEvent::SpeedDown => engine.adjust_speed(-coarse),
            AppEvent::SpeedFineUp => engine.adjust_speed(fine),
            AppEvent::SpeedFineDown => engine.adjust_speed(-fine),
            AppEvent::ToggleFixed => engine.toggle_speed_locked(),
            AppEvent::Restart => engine.restart(now_ms),
            AppEvent::SetWpm(raw) => {
                let wpm = self.config.timing.parse_wpm_entry(&raw);
                engine.set_speed(wpm);
            }
            AppEvent::Seek(raw) => {
                // Non-numeric or out-of-range targets are silently ignored
                if let Ok(n) = raw.trim().parse::<usize>() {
                    engine.seek(n);
                }
            }
            _ => {}
        }
    }

    fn apply_load(&mut self, result: Result<LoadedText, LoadError>) {
        match result {
            Ok(loaded) => {
                log::info!("loaded {} bytes from {}", loaded.text.len(), loaded.source);
                self.message = Some(format!("Loaded {}", loaded.source));
                self.text = loaded.text;
            }
            Err(err) => {
                log::warn!("load failed: {}", err);
                self.message = Some(err.to_string());
            }
        }
    }

    /// Extract the buffered text and begin reading it.
    ///
    /// Refused while the buffer is blank.
    pub fn start_reading(&mut self, now_ms: u64) -> bool {
        if self.text.trim().is_empty() {
            self.message = Some("Nothing to read yet: paste or load some text".to_string());
            return false;
        }

        let tokens = extract(&self.text);
        let mut engine =
            PlaybackEngine::new(tokens, self.initial_wpm, self.config.timing.clone());
        engine.start(now_ms);

        self.playback = Some(engine);
        self.message = None;
        self.mode = AppMode::Reading;
        true
    }

    /// Leave reading and return to input with the text preserved.
    pub fn exit_reading(&mut self) {
        if let Some(mut engine) = self.playback.take() {
            engine.exit();
        }
        self.mode = AppMode::Input;
    }

    pub fn poll_playback(&mut self, now_ms: u64) -> TickOutcome {
        match self.playback.as_mut() {
            Some(engine) if self.mode == AppMode::Reading => engine.poll(now_ms),
            _ => TickOutcome::Idle,
        }
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.playback.as_ref().and_then(PlaybackEngine::next_deadline)
    }

    pub fn get_render_state(&self) -> RenderState {
        let width = self.config.reader.context_words;
        match (&self.playback, self.mode) {
            (Some(engine), AppMode::Reading) => {
                RenderState::from_playback(self.mode, engine, width)
            }
            _ => RenderState::empty(self.mode, width),
        }
    }
}
