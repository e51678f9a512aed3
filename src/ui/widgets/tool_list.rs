// src/ui/widgets/tool_list.rs

use crate::app::{App, Focus};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the sidebar tool selector: one entry per tool with its
/// label and a dimmed one-line description. The selected entry is
/// highlighted; everything is dimmed while a scan runs since the
/// selection is locked until it finishes.
pub fn render_tool_list(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.focus == Focus::Tools {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title("Tools")
        .borders(Borders::ALL)
        .border_style(border_style);

    let running = app.session.is_running();
    let mut lines = Vec::new();
    for (idx, tool) in app.tools.iter().enumerate() {
        let selected = idx == app.tool_index;
        let label_style = match (selected, running) {
            (true, _) => Style::default().fg(Color::Yellow).bold(),
            (false, true) => Style::default().fg(Color::DarkGray),
            (false, false) => Style::default(),
        };
        let marker = if selected { "> " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", tool.label()),
            label_style,
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", tool.description()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
