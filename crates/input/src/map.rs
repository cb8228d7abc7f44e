//! Key mapping from terminal events to game key presses.

use crate::types::KeyPress;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a game key press.
pub fn map_key(key: KeyEvent) -> Option<KeyPress> {
    match key.code {
        // Title mode selection / column drops
        KeyCode::Char(ch @ '1'..='9') => Some(KeyPress::Digit(ch as u8 - b'0')),

        // Unambiguous mode aliases
        KeyCode::Char('c') | KeyCode::Char('C') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyPress::ComputerMode)
        }
        KeyCode::Char('t') | KeyCode::Char('T') => Some(KeyPress::TwoPlayerMode),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
