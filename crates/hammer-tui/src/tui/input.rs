// Keyboard input handling.
//
// Translates crossterm key events into `UserCommand`s for the app, or into
// local `ViewState` changes (team selection).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::ViewState;
use crate::protocol::UserCommand;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key should be forwarded to the app,
/// `None` when it was handled locally.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Windows emits Release events too
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c') {
        return Some(UserCommand::Quit);
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UserCommand::Quit),
        KeyCode::Down | KeyCode::Char('j') => {
            move_selection(view_state, 1);
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            move_selection(view_state, -1);
            None
        }
        KeyCode::Home | KeyCode::Char('g') => {
            view_state.selected_team = None;
            None
        }
        _ => None,
    }
}

/// Move the team selection by `delta`, wrapping at both ends.
fn move_selection(view_state: &mut ViewState, delta: isize) {
    let count = view_state.team_count();
    let Some(current) = view_state.selected_index() else {
        return;
    };
    let next = (current as isize + delta).rem_euclid(count as isize) as usize;
    view_state.selected_team = Some(next);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
