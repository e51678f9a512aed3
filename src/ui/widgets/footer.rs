// src/ui/widgets/footer.rs

use crate::app::{App, Focus};
use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

/// Renders the footer with the key hints for the focused panel.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let key = |text: &'static str| Span::styled(text, Style::new().bold().fg(Color::Yellow));

    let spans = if app.session.is_running() {
        Line::from("Scanning... Esc to quit.")
    } else {
        match app.focus {
            Focus::Tools => Line::from(vec![
                key("↑↓"),
                Span::raw(" select tool, "),
                key("Enter"),
                Span::raw(" run, "),
                key("Tab"),
                Span::raw(" focus, "),
                key("Q"),
                Span::raw(" quit"),
            ]),
            Focus::Options => Line::from(vec![
                key("↑↓"),
                Span::raw(" field, type to edit, "),
                key("Enter"),
                Span::raw(" run, "),
                key("Tab"),
                Span::raw(" focus, "),
                key("Esc"),
                Span::raw(" quit"),
            ]),
            Focus::Cameras => Line::from(vec![
                key("↑↓"),
                Span::raw(" select camera, "),
                key("Enter"),
                Span::raw(" play, "),
                key("Tab"),
                Span::raw(" focus, "),
                key("Q"),
                Span::raw(" quit"),
            ]),
        }
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
