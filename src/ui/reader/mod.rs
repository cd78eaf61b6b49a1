pub mod view;

pub use view::{render_command_deck, render_reader, render_word_display};
