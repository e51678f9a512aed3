// src/main.rs

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;

mod app;
mod core;
mod logging;
mod ui;

use crate::app::{App, Focus};
use crate::core::client::ToolClient;
use crate::core::models::ParamKey;
use crate::core::params::{FileStore, ParameterSet};
use crate::core::session::ScanOutcome;

const DEFAULT_BACKEND: &str = "http://localhost:5000";
const DEFAULT_NETWORK: &str = "192.168.1.0/24";

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;

    let backend = std::env::var("CAMWATCH_BACKEND").unwrap_or_else(|_| DEFAULT_BACKEND.to_string());
    let client = ToolClient::new(&backend)?;

    let store = FileStore::open(logging::get_data_dir().join("credentials.json"));
    let mut params = ParameterSet::new(Box::new(store));
    params.set(ParamKey::Network, DEFAULT_NETWORK);

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut app = App::new(params);
    let (tx, mut rx) = mpsc::channel::<ScanOutcome>(1);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, &client, &tx)?;
        }

        // Scan results are committed to the session only here, on the
        // event-loop thread; the session id check inside `apply` drops
        // anything issued under a superseded session.
        if let Ok(outcome) = rx.try_recv() {
            app.session.apply(outcome);
        }
    }

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

fn handle_events(
    app: &mut App,
    client: &ToolClient,
    tx: &mpsc::Sender<ScanOutcome>,
) -> std::io::Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            match key.code {
                KeyCode::Esc => app.quit(),
                KeyCode::Tab => app.cycle_focus(),
                KeyCode::F(5) => start_scan(app, client, tx),
                _ => match app.focus {
                    Focus::Tools => handle_tools_input(app, key.code, client, tx),
                    Focus::Options => handle_options_input(app, key.code, client, tx),
                    Focus::Cameras => handle_cameras_input(app, key.code),
                },
            }
        }
    }
    Ok(())
}

fn handle_tools_input(
    app: &mut App,
    key_code: KeyCode,
    client: &ToolClient,
    tx: &mpsc::Sender<ScanOutcome>,
) {
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Up => app.prev_tool(),
        KeyCode::Down => app.next_tool(),
        KeyCode::Enter => start_scan(app, client, tx),
        KeyCode::PageUp => app.scroll_log_up(),
        KeyCode::PageDown => app.scroll_log_down(),
        _ => {}
    }
}

fn handle_options_input(
    app: &mut App,
    key_code: KeyCode,
    client: &ToolClient,
    tx: &mpsc::Sender<ScanOutcome>,
) {
    match key_code {
        KeyCode::Up => app.prev_option(),
        KeyCode::Down => app.next_option(),
        KeyCode::Char(c) => app.edit_push(c),
        KeyCode::Backspace => app.edit_pop(),
        KeyCode::Enter => start_scan(app, client, tx),
        _ => {}
    }
}

fn handle_cameras_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Up => app.prev_camera(),
        KeyCode::Down => app.next_camera(),
        KeyCode::Enter => app.pick_camera(),
        _ => {}
    }
}

/// Kicks off a tool invocation. The session hands back the resolved
/// request tagged with its id (or nothing, when refused or invalid);
/// the HTTP call runs on a spawned task and reports back through the
/// channel so the event loop never blocks.
fn start_scan(app: &mut App, client: &ToolClient, tx: &mpsc::Sender<ScanOutcome>) {
    let Some((session_id, spec)) = app.session.start(&app.params) else {
        return;
    };
    app.camera_index = 0;
    app.log_scroll = 0;

    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.execute(&spec).await.map_err(|e| e.to_string());
        let _ = tx.send(ScanOutcome { session_id, result }).await;
    });
}
