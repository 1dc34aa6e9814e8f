use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, skip_cols, truncate_to_width};

/// Cells taken by the selection marker and the checkbox: "▸ [x] "
const ROW_PREFIX_WIDTH: usize = 6;

/// Render the task rows, keeping the cursor row in view
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.store.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  No tasks yet",
            Style::default().fg(app.theme.dim).bg(bg),
        )))
        .style(Style::default().bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    if visible_height == 0 {
        return;
    }
    app.clamp_cursor();
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }

    let list_focused = app.mode != Mode::Input;
    let title_width = (area.width as usize).saturating_sub(ROW_PREFIX_WIDTH);
    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);
    let mut cursor_pos = None;

    for (idx, task) in app
        .store
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let selected = list_focused && idx == app.cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };
        let marker = if selected { "\u{25b8} " } else { "  " };

        let check_style = if task.done {
            Style::default().fg(app.theme.done).bg(row_bg)
        } else {
            Style::default().fg(app.theme.dim).bg(row_bg)
        };
        let mut title_style = Style::default().fg(app.theme.text).bg(row_bg);
        if task.done {
            title_style = title_style
                .fg(app.theme.done)
                .add_modifier(Modifier::CROSSED_OUT);
        }

        let editing = app
            .edit
            .as_ref()
            .filter(|d| app.mode == Mode::Edit && d.task_id() == task.id);

        let title = match editing {
            Some(draft) => {
                let text = draft.buffer.as_str();
                let cursor_col = draft.buffer.cursor_col();
                let scroll = cursor_col.saturating_sub(title_width.saturating_sub(1));
                let shown = skip_cols(text, scroll);
                // A wide grapheme at the cut is dropped whole, so measure what was skipped
                let skipped = display_width(text) - display_width(shown);
                let col = (ROW_PREFIX_WIDTH + cursor_col.saturating_sub(skipped))
                    .min((area.width as usize).saturating_sub(1));
                let row = (idx - app.scroll_offset) as u16;
                cursor_pos = Some(Position::new(area.x + col as u16, area.y + row));
                title_style = Style::default().fg(app.theme.text_bright).bg(row_bg);
                shown.to_string()
            }
            None => truncate_to_width(&task.title, title_width),
        };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(app.theme.highlight).bg(row_bg)),
            Span::styled(format!("[{}] ", task.checkbox_char()), check_style),
            Span::styled(title, title_style),
        ];
        if selected {
            let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
            let pad = (area.width as usize).saturating_sub(used);
            spans.push(Span::styled(" ".repeat(pad), Style::default().bg(row_bg)));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    if let Some(pos) = cursor_pos {
        frame.set_cursor_position(pos);
    }
}
