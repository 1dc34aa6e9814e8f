mod confirm;
mod navigate;
mod notice;
mod text;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use confirm::handle_confirm;
use navigate::handle_navigate;
use notice::handle_notice;
use text::{handle_edit, handle_input};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Input => handle_input(app, key),
        Mode::Edit => handle_edit(app, key),
        Mode::Confirm => handle_confirm(app, key),
        Mode::Notice => handle_notice(app, key),
    }
}

/// Handle a bracketed paste event. Only the input field and inline edit accept text.
pub fn handle_paste(app: &mut App, text: &str) {
    match app.mode {
        Mode::Input => app.input.insert_str(text),
        Mode::Edit => {
            if let Some(draft) = &mut app.edit {
                draft.buffer.insert_str(text);
            }
        }
        _ => {}
    }
}
