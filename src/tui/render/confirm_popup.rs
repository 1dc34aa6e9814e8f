use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

use super::centered_rect_fixed;

/// Render the yes/no prompt for a pending removal
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(prompt) = &app.confirm else {
        return;
    };

    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let popup_w = 46u16.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(4) as usize;

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(app.messages.remove_body.clone(), text_style)),
        Line::from(""),
    ];
    if let Some(title) = prompt.title() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&format!("\"{}\"", title), inner_w),
            bright_style,
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("y", dim_style),
        Span::styled(" yes  ", text_style),
        Span::styled("n", dim_style),
        Span::styled(" no", text_style),
    ]));

    // Body may wrap once in a narrow popup
    let popup_h = (lines.len() as u16 + 3).min(area.height.saturating_sub(2));
    let popup_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", app.messages.remove_title),
            Style::default()
                .fg(app.theme.danger)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.danger).bg(bg))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup_area);
}
