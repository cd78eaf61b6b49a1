use crate::app::mode::AppMode;
use crate::engine::{PlaybackEngine, PlaybackPhase};
use crate::reading::{ContextWindow, OrpSegments};

pub const STATUS_PAUSED: &str = "PAUSED • Press SPACE to resume";
pub const STATUS_COMPLETE: &str = "COMPLETE";

/// Render state for UI components
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub position: usize,
    pub total: usize,
    pub percent: f64,
    pub segments: OrpSegments,
    pub context: ContextWindow,
    pub status: &'static str,
    pub speed: u32,
    pub speed_locked: bool,
}

impl RenderState {
    /// Create an empty render state for when nothing is being read
    pub fn empty(mode: AppMode, context_window: usize) -> Self {
        Self {
            mode,
            position: 0,
            total: 0,
            percent: 0.0,
            segments: OrpSegments::default(),
            context: ContextWindow {
                before: vec![String::new(); context_window],
                after: vec![String::new(); context_window],
            },
            status: "",
            speed: 0,
            speed_locked: false,
        }
    }

    /// Snapshot the engine for one frame
    pub fn from_playback(mode: AppMode, engine: &PlaybackEngine, context_window: usize) -> Self {
        let state = engine.state();
        let position = state.position;
        let total = engine.len();
        let percent = if engine.is_empty() {
            0.0
        } else {
            (position + 1) as f64 / total as f64 * 100.0
        };

        Self {
            mode,
            position,
            total,
            percent,
            segments: engine
                .current_token()
                .map(OrpSegments::for_token)
                .unwrap_or_default(),
            context: ContextWindow::around(engine.tokens(), position, context_window),
            status: status_label(engine),
            speed: state.speed,
            speed_locked: state.speed_locked,
        }
    }

    /// `"12 / 340 • 4%"`
    pub fn progress_label(&self) -> String {
        let shown = if self.total == 0 { 0 } else { self.position + 1 };
        format!("{} / {} • {}%", shown, self.total, self.percent.round() as u64)
    }
}

pub fn status_label(engine: &PlaybackEngine) -> &'static str {
    match engine.phase() {
        PlaybackPhase::Finished => STATUS_COMPLETE,
        PlaybackPhase::Paused => STATUS_PAUSED,
        PlaybackPhase::Idle | PlaybackPhase::Running => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TimingConfig;
    use crate::reading::TokenStream;

    fn engine(words: &[&str]) -> PlaybackEngine {
        PlaybackEngine::new(
            TokenStream::from_words(words.iter().copied()),
            300,
            TimingConfig::default(),
        )
    }

    #[test]
    fn test_empty_render_state() {
        let state = RenderState::empty(AppMode::Input, 3);
        assert_eq!(state.total, 0);
        assert_eq!(state.context.before.len(), 3);
        assert_eq!(state.progress_label(), "0 / 0 • 0%");
    }

    #[test]
    fn test_from_playback_segments_and_context() {
        let mut engine = engine(&["one", "two", "extraordinary", "four", "five"]);
        engine.seek(3);
        let state = RenderState::from_playback(AppMode::Reading, &engine, 3);

        assert_eq!(state.position, 2);
        assert_eq!(state.segments.before, "ext");
        assert_eq!(state.segments.anchor, "r");
        assert_eq!(state.context.before, vec!["", "one", "two"]);
        assert_eq!(state.context.after, vec!["four", "five", ""]);
        assert_eq!(state.percent, 60.0);
        assert_eq!(state.progress_label(), "3 / 5 • 60%");
    }

    #[test]
    fn test_status_labels() {
        let mut engine = engine(&["only"]);
        assert_eq!(status_label(&engine), "");
        engine.start(0);
        assert_eq!(status_label(&engine), "");
        engine.pause();
        assert_eq!(status_label(&engine), STATUS_PAUSED);
        engine.resume();
        engine.poll(200);
        assert_eq!(status_label(&engine), STATUS_COMPLETE);
    }

    #[test]
    fn test_complete_wins_over_paused() {
        let mut engine = engine(&["only"]);
        engine.start(0);
        engine.poll(200);
        engine.pause();
        assert_eq!(status_label(&engine), STATUS_COMPLETE);
    }
}
