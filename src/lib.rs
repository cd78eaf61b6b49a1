//! quickread: a terminal RSVP speed reader.
//!
//! Raw text goes through [`extract::extract`] to drop page boilerplate, then
//! [`engine::PlaybackEngine`] flashes the remaining words one at a time.

pub mod app;
pub mod cli;
pub mod engine;
pub mod extract;
pub mod input;
pub mod reading;
pub mod ui;
