//! Key-code mapping for the tournament loop.

use crate::tournament::Command;
use crossterm::event::{KeyCode, KeyEvent};

/// Translate a raw key event into an abstract command. Everything outside
/// the recognized set maps to `Command::Other`, which the controller ignores
/// during column selection and treats as an acknowledgment after a round.
pub fn map_key(key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Left => Command::MoveLeft,
        KeyCode::Right => Command::MoveRight,
        KeyCode::Enter => Command::Confirm,
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
        _ => Command::Other,
    }
}
