use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::text_buffer::TextBuffer;

/// Editing keys shared by the input field and inline edit.
/// Returns false when the key is not an editing key.
fn edit_buffer(buffer: &mut TextBuffer, key: KeyEvent) -> bool {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => buffer.insert_char(c),
        (_, KeyCode::Backspace) => buffer.backspace(),
        (_, KeyCode::Delete) => buffer.delete(),
        (_, KeyCode::Left) => buffer.move_left(),
        (_, KeyCode::Right) => buffer.move_right(),
        (_, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => buffer.move_home(),
        (_, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => buffer.move_end(),
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => buffer.clear(),
        _ => return false,
    }
    true
}

/// The "add a task" field
pub(super) fn handle_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc | KeyCode::Tab | KeyCode::Down => app.mode = Mode::Navigate,
        _ => {
            edit_buffer(&mut app.input, key);
        }
    }
}

/// Inline edit of the selected row
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        _ => {
            if let Some(draft) = &mut app.edit {
                edit_buffer(&mut draft.buffer, key);
            }
        }
    }
}
