// src/ui/widgets/camera_list.rs

use crate::app::{App, Focus};
use crate::core::models::CameraStatus;
use crate::core::session::ScanState;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the main results area: the discovered-camera list, or the
/// raw result document when the last run produced one, or a state
/// hint when there is nothing to show yet.
pub fn render_camera_list(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.focus == Focus::Cameras {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(document) = &app.session.document {
        // Raw markup, deliberately unrendered.
        let doc = Paragraph::new(document.as_str())
            .block(block.title("Result Document"))
            .wrap(Wrap { trim: false });
        frame.render_widget(doc, area);
        return;
    }

    if app.session.cameras.is_empty() {
        let hint = match app.session.state {
            ScanState::Running => "Scanning... please wait.",
            ScanState::Failed => "Scan failed — see the status panel.",
            _ => "No cameras yet. Pick a tool and press Enter to scan.",
        };
        let paragraph = Paragraph::new(hint)
            .block(block.title("Discovered Cameras"))
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let lines: Vec<Line> = app
        .session
        .cameras
        .iter()
        .enumerate()
        .map(|(idx, camera)| {
            let selected = idx == app.camera_index && app.focus == Focus::Cameras;
            let marker = if selected { "> " } else { "  " };
            let name_style = if selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default()
            };
            let status_style = match camera.status {
                CameraStatus::Live => Style::default().fg(Color::Green),
                CameraStatus::Offline => Style::default().fg(Color::Red),
                CameraStatus::Unknown => Style::default().fg(Color::DarkGray),
            };
            Line::from(vec![
                Span::styled(format!("{marker}{:<24}", camera.name), name_style),
                Span::styled(format!("[{}] ", camera.status), status_style),
                Span::styled(camera.url.clone(), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(block.title("Discovered Cameras")),
        area,
    );
}
