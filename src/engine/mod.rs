pub mod clock;
pub mod config;
pub mod error;
pub mod playback;
pub mod timer;

pub use clock::{Clock, MonotonicClock};
pub use config::{Config, TimingConfig};
pub use error::QuickreadError;
pub use playback::{PlaybackEngine, PlaybackPhase, PlaybackState, TickOutcome};
pub use timer::{Timer, TimerSlot};
