// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// The panel areas of the control panel, computed once per frame.
pub struct AppLayout {
    pub sidebar: Rect,
    pub cameras: Rect,
    pub options: Rect,
    pub status: Rect,
    pub player: Rect,
    pub footer: Rect,
}

/// Splits the frame into the sidebar (tool list), a center column
/// (camera results over the options form), the status/log panel on
/// the right, and the player and footer bars at the bottom.
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(34),
            Constraint::Min(0),
            Constraint::Percentage(34),
        ])
        .split(main_chunks[0]);

    let center_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(8)])
        .split(content_chunks[1]);

    AppLayout {
        sidebar: content_chunks[0],
        cameras: center_chunks[0],
        options: center_chunks[1],
        status: content_chunks[2],
        player: main_chunks[1],
        footer: main_chunks[2],
    }
}
