use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.should_quit = true,

        // Focus the input field
        (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Char('i')) | (_, KeyCode::Tab) => {
            app.mode = Mode::Input;
        }

        // Cursor
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => app.move_cursor(1),
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => app.move_cursor(-1),
        (KeyModifiers::NONE, KeyCode::Char('g') | KeyCode::Home) => app.cursor = 0,
        (_, KeyCode::Char('G')) | (KeyModifiers::NONE, KeyCode::End) => {
            app.cursor = app.store.len().saturating_sub(1);
        }

        // Task actions
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Char('x')) => app.toggle_selected(),
        (KeyModifiers::NONE, KeyCode::Char('e') | KeyCode::Enter) => app.begin_edit(),
        (KeyModifiers::NONE, KeyCode::Char('d') | KeyCode::Delete) => {
            app.request_remove_selected();
        }
        _ => {}
    }
}
