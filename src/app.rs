// src/app.rs

use ratatui::widgets::ScrollbarState;
use strum::IntoEnumIterator;

use crate::core::models::{ParamKey, ToolId};
use crate::core::params::ParameterSet;
use crate::core::session::ScanSession;

/// Which panel keyboard input currently lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tools,
    Options,
    Cameras,
}

pub struct App {
    pub should_quit: bool,
    pub focus: Focus,
    pub tools: Vec<ToolId>,
    pub tool_index: usize,
    pub params: ParameterSet,
    pub session: ScanSession,
    pub option_index: usize,
    pub camera_index: usize,
    /// Stream URL handed to the external player when a camera is picked.
    pub player_url: String,
    pub log_scroll: usize,
    pub log_scroll_state: ScrollbarState,
}

impl App {
    pub fn new(params: ParameterSet) -> Self {
        let tools: Vec<ToolId> = ToolId::iter().collect();
        let session = ScanSession::new(tools[0]);
        Self {
            should_quit: false,
            focus: Focus::Tools,
            tools,
            tool_index: 0,
            params,
            session,
            option_index: 0,
            camera_index: 0,
            player_url: String::new(),
            log_scroll: 0,
            log_scroll_state: ScrollbarState::default(),
        }
    }

    pub fn selected_tool(&self) -> ToolId {
        self.tools[self.tool_index]
    }

    /// Parameter fields the options panel shows for the current tool.
    pub fn option_fields(&self) -> &'static [ParamKey] {
        self.selected_tool().relevant_params()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Tools => Focus::Options,
            Focus::Options => Focus::Cameras,
            Focus::Cameras => Focus::Tools,
        };
    }

    // --- Tool selection ---

    pub fn next_tool(&mut self) {
        self.move_tool(1);
    }

    pub fn prev_tool(&mut self) {
        self.move_tool(-1);
    }

    /// Tool switching is locked while a scan runs, matching the
    /// single-flight semantics of the session.
    fn move_tool(&mut self, delta: isize) {
        if self.session.is_running() {
            return;
        }
        let len = self.tools.len() as isize;
        self.tool_index = ((self.tool_index as isize + delta).rem_euclid(len)) as usize;
        self.session.select_tool(self.selected_tool());
        self.option_index = 0;
        self.camera_index = 0;
    }

    // --- Options editing ---

    pub fn next_option(&mut self) {
        let len = self.option_fields().len();
        if len > 0 {
            self.option_index = (self.option_index + 1) % len;
        }
    }

    pub fn prev_option(&mut self) {
        let len = self.option_fields().len();
        if len > 0 {
            self.option_index = (self.option_index + len - 1) % len;
        }
    }

    pub fn edited_field(&self) -> Option<ParamKey> {
        self.option_fields().get(self.option_index).copied()
    }

    /// All edits funnel through `ParameterSet::set` so the
    /// network/country exclusivity and credential mirroring apply
    /// keystroke by keystroke.
    pub fn edit_push(&mut self, c: char) {
        if self.session.is_running() {
            return;
        }
        if let Some(key) = self.edited_field() {
            let mut value = self.params.get(key).to_string();
            value.push(c);
            self.params.set(key, value);
        }
    }

    pub fn edit_pop(&mut self) {
        if self.session.is_running() {
            return;
        }
        if let Some(key) = self.edited_field() {
            let mut value = self.params.get(key).to_string();
            value.pop();
            self.params.set(key, value);
        }
    }

    // --- Camera list ---

    pub fn next_camera(&mut self) {
        if !self.session.cameras.is_empty() {
            self.camera_index = (self.camera_index + 1) % self.session.cameras.len();
        }
    }

    pub fn prev_camera(&mut self) {
        let len = self.session.cameras.len();
        if len > 0 {
            self.camera_index = (self.camera_index + len - 1) % len;
        }
    }

    /// Hands the selected camera's stream URL to the player bar.
    pub fn pick_camera(&mut self) {
        if let Some(camera) = self.session.cameras.get(self.camera_index) {
            self.player_url = camera.url.clone();
        }
    }

    // --- Log panel ---

    pub fn scroll_log_up(&mut self) {
        self.log_scroll = self.log_scroll.saturating_sub(1);
        self.log_scroll_state = self.log_scroll_state.position(self.log_scroll);
    }

    pub fn scroll_log_down(&mut self) {
        self.log_scroll = self.log_scroll.saturating_add(1);
        self.log_scroll_state = self.log_scroll_state.position(self.log_scroll);
    }
}
