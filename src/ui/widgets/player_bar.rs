// src/ui/widgets/player_bar.rs

use crate::app::App;
use ratatui::{prelude::*, widgets::Paragraph};

/// One-line bar with the stream URL handed to the external player.
/// Playback itself happens outside this panel.
pub fn render_player_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.player_url.is_empty() {
        Line::from(Span::styled(
            " Player: pick a camera with Enter",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled(" Player: ", Style::default().fg(Color::DarkGray)),
            Span::styled(app.player_url.as_str(), Style::default().fg(Color::Green)),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}
