//! Single-slot cancellable timer keyed by a generation counter.
//!
//! At most one timer is outstanding. Every schedule and every cancel bumps the
//! generation, so a handle taken before a restart or a new text can never fire
//! against the replaced state.

/// Handle for one scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub generation: u64,
    pub deadline_ms: u64,
}

#[derive(Debug, Default)]
pub struct TimerSlot {
    generation: u64,
    pending: Option<Timer>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending timer with one firing `delay_ms` after `now_ms`.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64) -> Timer {
        self.generation += 1;
        let timer = Timer {
            generation: self.generation,
            deadline_ms: now_ms.saturating_add(delay_ms),
        };
        self.pending = Some(timer);
        timer
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn pending(&self) -> Option<Timer> {
        self.pending
    }

    pub fn is_current(&self, timer: Timer) -> bool {
        self.pending == Some(timer) && timer.generation == self.generation
    }

    /// Consume `timer` if it is still the outstanding one.
    pub fn claim(&mut self, timer: Timer) -> bool {
        if self.is_current(timer) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_sets_deadline() {
        let mut slot = TimerSlot::new();
        let timer = slot.schedule(1_000, 200);
        assert_eq!(timer.deadline_ms, 1_200);
        assert_eq!(slot.pending(), Some(timer));
    }

    #[test]
    fn test_reschedule_replaces_pending() {
        let mut slot = TimerSlot::new();
        let first = slot.schedule(0, 200);
        let second = slot.schedule(0, 300);
        assert!(second.generation > first.generation);
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
    }

    #[test]
    fn test_cancel_invalidates_handle() {
        let mut slot = TimerSlot::new();
        let timer = slot.schedule(0, 200);
        slot.cancel();
        assert_eq!(slot.pending(), None);
        assert!(!slot.claim(timer));
    }

    #[test]
    fn test_claim_only_once() {
        let mut slot = TimerSlot::new();
        let timer = slot.schedule(0, 10);
        assert!(slot.claim(timer));
        assert!(!slot.claim(timer));
    }

    #[test]
    fn test_cancel_advances_generation() {
        let mut slot = TimerSlot::new();
        let mut last = slot.schedule(0, 1);
        for _ in 0..5 {
            slot.cancel();
            let next = slot.schedule(0, 1);
            // the cancel consumed a generation of its own
            assert!(next.generation > last.generation + 1);
            last = next;
        }
    }
}
