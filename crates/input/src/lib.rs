//! Terminal input module (host-facing).
//!
//! Maps `crossterm` key events into [`HostCommand`]s. The animation takes no
//! input besides quitting; resize events are handled by the host loop directly.

pub mod map;

pub use map::{handle_key_event, should_quit, HostCommand};
