// src/ui/widgets/mod.rs

pub mod camera_list; // Discovered cameras / result document view.
pub mod footer; // Key hints per focus and scan state.
pub mod options; // Context-sensitive parameter form.
pub mod player_bar; // One-line bar with the picked stream URL.
pub mod status_panel; // Tool status and the session log stream.
pub mod tool_list; // The sidebar tool selector.
