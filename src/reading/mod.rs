pub mod context;
pub mod ovp;
pub mod timing;
pub mod token;

pub use context::ContextWindow;
pub use ovp::{calculate_anchor_position, split_at_anchor, OrpSegments};
pub use timing::{calculate_word_delay, wpm_to_milliseconds};
pub use token::{strip_non_word, Token, TokenStream};
