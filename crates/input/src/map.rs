//! Key mapping from terminal events to host commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Commands the host loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    Quit,
}

/// Map keyboard input to a host command.
pub fn handle_key_event(key: KeyEvent) -> Option<HostCommand> {
    if should_quit(key) {
        return Some(HostCommand::Quit);
    }
    None
}

/// Check if key should quit the animation.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
