//! Self-rescheduling playback loop.
//!
//! The engine owns the pacing state and a single outstanding [`Timer`]. The
//! caller asks for the next deadline, waits until then (or until user input
//! arrives), and hands the current time back through [`PlaybackEngine::poll`].
//! Manual navigation mutates the position directly and leaves the pending
//! timer alone, so automatic and manual advancement stay independent.

use crate::engine::config::TimingConfig;
use crate::engine::timer::{Timer, TimerSlot};
use crate::reading::{calculate_word_delay, wpm_to_milliseconds, Token, TokenStream};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    pub position: usize,
    pub speed: u32,
    pub paused: bool,
    pub speed_locked: bool,
    pub finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// Nothing shown yet, or the engine was exited.
    Idle,
    Running,
    Paused,
    /// Terminal until [`PlaybackEngine::restart`].
    Finished,
}

/// What happened when the engine was polled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No timer outstanding.
    Idle,
    /// A timer is outstanding but its deadline has not passed.
    NotDue,
    /// The handle belongs to a cancelled or replaced schedule.
    Stale,
    /// Paused: nothing moved, checked again after the poll interval.
    PausePoll,
    Advanced(usize),
    Finished,
}

pub struct PlaybackEngine {
    tokens: TokenStream,
    state: PlaybackState,
    config: TimingConfig,
    timer: TimerSlot,
    started: bool,
    last_speed_increase_ms: u64,
}

impl PlaybackEngine {
    pub fn new(tokens: TokenStream, wpm: u32, config: TimingConfig) -> Self {
        let speed = wpm.clamp(config.floor_wpm, config.max_wpm.max(config.floor_wpm));
        Self {
            tokens,
            state: PlaybackState {
                position: 0,
                speed,
                paused: false,
                speed_locked: false,
                finished: false,
            },
            config,
            timer: TimerSlot::new(),
            started: false,
            last_speed_increase_ms: 0,
        }
    }

    pub fn tokens(&self) -> &TokenStream {
        &self.tokens
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    pub fn is_finished(&self) -> bool {
        self.state.finished
    }

    pub fn phase(&self) -> PlaybackPhase {
        if self.is_finished() {
            PlaybackPhase::Finished
        } else if !self.started {
            PlaybackPhase::Idle
        } else if self.is_paused() {
            PlaybackPhase::Paused
        } else {
            PlaybackPhase::Running
        }
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.state.position)
    }

    /// Display time of the current token at the current speed.
    pub fn current_token_duration(&self) -> u64 {
        match self.current_token() {
            Some(token) => calculate_word_delay(token, self.state.speed, &self.config),
            None => 0,
        }
    }

    pub fn pending_timer(&self) -> Option<Timer> {
        self.timer.pending()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.pending_timer().map(|timer| timer.deadline_ms)
    }

    /// Begin reading from the first token.
    ///
    /// An empty stream leaves the engine idle with nothing scheduled.
    pub fn start(&mut self, now_ms: u64) {
        log::info!(
            "starting playback of {} words at {} wpm",
            self.tokens.len(),
            self.state.speed
        );
        self.rewind(now_ms);
    }

    /// Back to the first token with a fresh schedule and acceleration baseline.
    pub fn restart(&mut self, now_ms: u64) {
        log::info!("restarting playback");
        self.rewind(now_ms);
    }

    fn rewind(&mut self, now_ms: u64) {
        self.timer.cancel();
        self.state.position = 0;
        self.state.paused = false;
        self.state.finished = false;
        self.last_speed_increase_ms = now_ms;

        if self.tokens.is_empty() {
            self.started = false;
            return;
        }

        self.started = true;
        self.timer
            .schedule(now_ms, wpm_to_milliseconds(self.state.speed));
    }

    /// Stop for good; any handle still held by the caller becomes stale.
    pub fn exit(&mut self) {
        log::info!("exiting playback at word {}", self.state.position);
        self.timer.cancel();
        self.started = false;
    }

    pub fn pause(&mut self) {
        self.state.paused = true;
    }

    pub fn resume(&mut self) {
        self.state.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        if self.state.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    pub fn step_forward(&mut self) {
        if let Some(last) = self.tokens.last_index() {
            self.state.position = (self.state.position + 1).min(last);
        }
    }

    pub fn step_backward(&mut self) {
        self.state.position = self.state.position.saturating_sub(1);
    }

    /// Jump to the 1-based word number `n`; out-of-range targets are ignored.
    pub fn seek(&mut self, n: usize) -> bool {
        match n.checked_sub(1) {
            Some(target) if target < self.tokens.len() => {
                self.state.position = target;
                true
            }
            _ => false,
        }
    }

    /// Direct numeric entry: clamped to the entry range, and locks the speed.
    pub fn set_speed(&mut self, wpm: u32) {
        self.state.speed = self.config.clamp_entry(wpm);
        self.state.speed_locked = true;
    }

    /// Relative speed change. Coarse steps stop at the entry minimum, fine
    /// steps may go down to the floor.
    pub fn adjust_speed(&mut self, delta: i32) {
        let lower = if delta.unsigned_abs() >= self.config.coarse_step {
            self.config.min_wpm
        } else {
            self.config.floor_wpm
        };
        let upper = self.config.max_wpm.max(lower);
        let new_wpm = self.state.speed as i64 + delta as i64;
        self.state.speed = new_wpm.clamp(lower as i64, upper as i64) as u32;
    }

    pub fn set_speed_locked(&mut self, locked: bool) {
        self.state.speed_locked = locked;
    }

    pub fn toggle_speed_locked(&mut self) {
        self.set_speed_locked(!self.state.speed_locked);
    }

    /// Fire the pending timer if it is due at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> TickOutcome {
        match self.timer.pending() {
            Some(timer) => self.fire(timer, now_ms),
            None => TickOutcome::Idle,
        }
    }

    /// Fire a specific timer handle. Handles from a cancelled or replaced
    /// schedule are rejected without touching state.
    pub fn fire(&mut self, timer: Timer, now_ms: u64) -> TickOutcome {
        if !self.timer.is_current(timer) {
            return TickOutcome::Stale;
        }
        if timer.deadline_ms > now_ms {
            return TickOutcome::NotDue;
        }
        self.timer.claim(timer);
        self.tick(now_ms)
    }

    fn tick(&mut self, now_ms: u64) -> TickOutcome {
        if self.state.paused {
            self.timer.schedule(now_ms, self.config.pause_poll_ms);
            return TickOutcome::PausePoll;
        }

        let last = match self.tokens.last_index() {
            Some(last) => last,
            None => return TickOutcome::Idle,
        };

        if self.state.position >= last {
            self.state.finished = true;
            self.timer.cancel();
            log::info!("playback complete after {} words", self.tokens.len());
            return TickOutcome::Finished;
        }

        self.state.position += 1;
        // Delay uses the speed before this tick's acceleration
        let delay = self.current_token_duration();
        self.maybe_accelerate(now_ms);
        self.timer.schedule(now_ms, delay);

        log::trace!(
            "advanced to word {} for {}ms",
            self.state.position,
            delay
        );
        TickOutcome::Advanced(self.state.position)
    }

    fn maybe_accelerate(&mut self, now_ms: u64) {
        let ceiling = self.config.acceleration_ceiling_wpm;
        if self.state.speed_locked || self.state.speed >= ceiling {
            return;
        }
        if now_ms.saturating_sub(self.last_speed_increase_ms) >= self.config.acceleration_interval_ms
        {
            self.state.speed = (self.state.speed + self.config.acceleration_step_wpm).min(ceiling);
            self.last_speed_increase_ms = now_ms;
            log::debug!("auto-accelerated to {} wpm", self.state.speed);
        }
    }
}
