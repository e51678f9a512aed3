// src/core/session.rs

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::core::dispatch;
use crate::core::models::{CameraRecord, NormalizedResult, RequestSpec, ToolId};
use crate::core::normalize::normalize;
use crate::core::params::ParameterSet;

/// Lifecycle of one tool invocation. `Succeeded` and `Failed` are
/// re-entrant: a new `start` is allowed from either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Running,
    Succeeded,
    Failed,
}

/// Outcome of an issued request, tagged with the session id it was
/// issued under so a stale reply can be told apart from the live one.
#[derive(Debug)]
pub struct ScanOutcome {
    pub session_id: u64,
    /// The decoded JSON body, or the transport error message.
    pub result: Result<Value, String>,
}

/// The single live scan session: one tool, its lifecycle state, the
/// log stream, and the displayed artifacts. There is exactly one of
/// these for the lifetime of the process.
pub struct ScanSession {
    id: u64,
    pub tool: ToolId,
    pub state: ScanState,
    pub log: Vec<String>,
    pub cameras: Vec<CameraRecord>,
    pub document: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
}

impl ScanSession {
    pub fn new(tool: ToolId) -> Self {
        Self {
            id: 0,
            tool,
            state: ScanState::Idle,
            log: Vec::new(),
            cameras: Vec::new(),
            document: None,
            started_at: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_running(&self) -> bool {
        self.state == ScanState::Running
    }

    /// Changes the selected tool. Previous artifacts (cameras and the
    /// result document) are cleared so nothing stale is presented
    /// under the new tool's context; log lines stay until the next
    /// `start`. The session id is bumped so a reply still in flight
    /// for the old tool can never be committed here.
    pub fn select_tool(&mut self, tool: ToolId) {
        if tool == self.tool {
            return;
        }
        self.tool = tool;
        self.cameras.clear();
        self.document = None;
        self.id += 1;
        self.state = ScanState::Idle;
    }

    /// Begins a new invocation: clears the log and artifacts, emits
    /// the initial log line and validates via the dispatch table.
    ///
    /// Returns the resolved request tagged with the new session id,
    /// or `None` when nothing was issued — either because a scan is
    /// already running (single-flight: the call is a no-op) or
    /// because validation failed (logged, state `Failed`).
    pub fn start(&mut self, params: &ParameterSet) -> Option<(u64, RequestSpec)> {
        if self.is_running() {
            warn!(tool = %self.tool, "Start refused: a scan is already running.");
            return None;
        }

        self.id += 1;
        self.log.clear();
        self.cameras.clear();
        self.document = None;
        self.started_at = Some(Utc::now());
        self.state = ScanState::Running;
        self.log.push(format!(
            "> Running {}... ({})",
            dispatch::endpoint(self.tool),
            dispatch::target_label(self.tool, params)
        ));

        match dispatch::resolve(self.tool, params) {
            Ok(spec) => {
                info!(tool = %self.tool, session_id = self.id, "Scan started.");
                Some((self.id, spec))
            }
            Err(e) => {
                error!(tool = %self.tool, error = %e, "Validation failed; no request issued.");
                self.log.push(format!("[ERROR] {e}"));
                self.state = ScanState::Failed;
                None
            }
        }
    }

    /// Commits the outcome of an issued request. An outcome tagged
    /// with a superseded session id is discarded wholesale; otherwise
    /// the session always leaves `Running` here.
    pub fn apply(&mut self, outcome: ScanOutcome) {
        if outcome.session_id != self.id {
            warn!(
                stale = outcome.session_id,
                live = self.id,
                "Discarding result for a superseded session."
            );
            return;
        }

        match outcome.result {
            Err(message) => {
                error!(tool = %self.tool, error = %message, "Transport failure.");
                self.log.push(format!("[ERROR] {message}"));
                self.cameras.clear();
                self.state = ScanState::Failed;
            }
            Ok(payload) => self.commit(normalize(&payload)),
        }
    }

    fn commit(&mut self, result: NormalizedResult) {
        match result {
            NormalizedResult::Error { message } => {
                error!(tool = %self.tool, error = %message, "Tool reported an error.");
                self.log.push(format!("[ERROR] {message}"));
                self.cameras.clear();
                self.state = ScanState::Failed;
            }
            NormalizedResult::Document { html, output } => {
                info!(tool = %self.tool, lines = output.len(), "Document result.");
                self.document = Some(html);
                self.log.extend(output);
                self.state = ScanState::Succeeded;
            }
            NormalizedResult::Cameras { cameras, log } => {
                info!(tool = %self.tool, found = cameras.len(), "Camera list result.");
                self.cameras = cameras;
                self.log.extend(log);
                self.state = ScanState::Succeeded;
            }
            NormalizedResult::Unrecognized { log } => {
                warn!(tool = %self.tool, "Unrecognized result shape.");
                self.log.extend(log);
                self.state = ScanState::Succeeded;
            }
        }
    }
}
