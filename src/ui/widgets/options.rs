// src/ui/widgets/options.rs

use crate::app::{App, Focus};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the context-sensitive parameter form for the selected
/// tool. The field being edited is highlighted and carries the
/// cursor when the options panel has focus.
pub fn render_options(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.focus == Focus::Options {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title(format!("Options — {}", app.selected_tool().label()))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = app.option_fields();
    if fields.is_empty() {
        let hint = Paragraph::new("No specific options for this tool.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, inner);
        return;
    }

    let mut lines = Vec::new();
    for (idx, key) in fields.iter().enumerate() {
        let editing = idx == app.option_index;
        let value_style = if editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<28}", format!("{}:", key.label())),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(app.params.get(*key).to_string(), value_style),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    // Cursor at the end of the edited value, while editable.
    if app.focus == Focus::Options && !app.session.is_running() {
        if let Some(key) = app.edited_field() {
            let value_len = app.params.get(key).chars().count() as u16;
            frame.set_cursor_position((
                inner.x + 28 + value_len,
                inner.y + app.option_index as u16,
            ));
        }
    }
}
