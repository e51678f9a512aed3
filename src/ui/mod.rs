// src/ui/mod.rs

use crate::app::App;
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area());

    widgets::tool_list::render_tool_list(frame, app, layout.sidebar);
    widgets::camera_list::render_camera_list(frame, app, layout.cameras);
    widgets::options::render_options(frame, app, layout.options);
    widgets::status_panel::render_status_panel(frame, app, layout.status);
    widgets::player_bar::render_player_bar(frame, app, layout.player);
    widgets::footer::render_footer(frame, app, layout.footer);
}
