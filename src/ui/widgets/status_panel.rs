// src/ui/widgets/status_panel.rs

use crate::app::App;
use crate::core::session::ScanState;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation},
};

/// Renders the tool status panel: current state and the session's
/// log stream, scrollable with PageUp/PageDown.
pub fn render_status_panel(frame: &mut Frame, app: &mut App, area: Rect) {
    let (state_label, state_style) = match app.session.state {
        ScanState::Idle => ("idle", Style::default().fg(Color::DarkGray)),
        ScanState::Running => ("running...", Style::default().fg(Color::Cyan)),
        ScanState::Succeeded => ("succeeded", Style::default().fg(Color::Green)),
        ScanState::Failed => ("failed", Style::default().fg(Color::Red)),
    };

    let mut title = format!("Status — {} [{state_label}]", app.session.tool.label());
    if let Some(started_at) = app.session.started_at {
        title.push_str(&format!(" @ {}", started_at.format("%H:%M:%S")));
    }
    let block = Block::default()
        .title(Span::styled(title, state_style))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.log_scroll_state = app.log_scroll_state.content_length(app.session.log.len());

    let lines: Vec<Line> = app
        .session
        .log
        .iter()
        .map(|line| {
            let style = if line.starts_with("[ERROR]") {
                Style::default().fg(Color::Red)
            } else if line.starts_with('>') {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            Line::from(Span::styled(line.as_str(), style))
        })
        .collect();

    let paragraph = Paragraph::new(lines).scroll((app.log_scroll as u16, 0));
    frame.render_widget(paragraph, inner);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight).thumb_symbol("■");
    frame.render_stateful_widget(scrollbar, area, &mut app.log_scroll_state);
}
