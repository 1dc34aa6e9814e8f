use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::Config;
use crate::ops::ids::SequentialIds;
use crate::ops::task_store::TaskStore;
use crate::tui::app::{App, Mode};

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 16;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An App (input focused) whose store holds `titles` with ids 1, 2, 3, ...
pub fn app_with_tasks(titles: &[&str]) -> App {
    let mut store = TaskStore::with_ids(Box::new(SequentialIds::new()));
    for title in titles {
        store.add(*title).unwrap();
    }
    App::new(store, &Config::default())
}

/// Same as [`app_with_tasks`], with the list focused
pub fn app_in_navigate(titles: &[&str]) -> App {
    let mut app = app_with_tasks(titles);
    app.mode = Mode::Navigate;
    app
}

pub fn titles(app: &App) -> Vec<String> {
    app.store.iter().map(|t| t.title.clone()).collect()
}

pub fn done_flags(app: &App) -> Vec<bool> {
    app.store.iter().map(|t| t.done).collect()
}
