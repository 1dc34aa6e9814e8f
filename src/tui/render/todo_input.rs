use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};
use crate::util::unicode::skip_cols;

const PLACEHOLDER: &str = "Add a new to-do...";

/// Render the "add a task" input field
pub fn render_todo_input(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Input;
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };

    let block = Block::default()
        .title(Span::styled(
            " New task ",
            Style::default().fg(border_color).bg(bg),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Scroll horizontally so the cursor stays inside the field
    let cursor_col = app.input.cursor_col();
    let scroll = cursor_col.saturating_sub(inner.width as usize - 1);

    let line = if app.input.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from(Span::styled(
            skip_cols(app.input.as_str(), scroll).to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
    };
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), inner);

    if focused {
        let x = inner.x + (cursor_col - scroll) as u16;
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}
