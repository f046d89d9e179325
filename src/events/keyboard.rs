//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Left | KeyCode::Char('h') => Action::PrevSegment,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Action::NextSegment,
        KeyCode::Up | KeyCode::Char('k') => Action::FocusPrev,
        KeyCode::Down | KeyCode::Char('j') => Action::FocusNext,
        _ => Action::None,
    }
}
