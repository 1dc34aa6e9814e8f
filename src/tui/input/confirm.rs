use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::task_store::Confirmation;
use crate::tui::app::App;

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('y')) | (_, KeyCode::Char('Y')) => {
            app.answer_removal(Confirmation::Yes);
        }
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Char('N')) | (_, KeyCode::Esc) => {
            app.answer_removal(Confirmation::No);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use crate::tui::app::Mode;
    use crate::tui::input::test_keys::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn other_keys_keep_prompt_open() {
        let mut app = app_in_navigate(&["A"]);
        app.request_remove_selected();
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Confirm);
        assert!(app.confirm.is_some());
        assert!(!app.should_quit);
    }

    #[test]
    fn n_declines() {
        let mut app = app_in_navigate(&["A"]);
        app.request_remove_selected();
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(titles(&app), vec!["A"]);
    }
}
