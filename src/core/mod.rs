// src/core/mod.rs

// The `core` module is the tool dispatch and response-normalization
// heart of the panel; everything user-facing lives in `ui` and `app`.

/// Shared data models: tool identities, parameter keys, request
/// specs, camera records and normalization results.
pub mod models;

/// Current parameter values plus the durable credential mirror.
pub mod params;

/// The per-tool request table: method, path, required parameters and
/// validation.
pub mod dispatch;

/// Pure normalization of heterogeneous backend payloads into the
/// canonical camera-record shape.
pub mod normalize;

/// The scan session lifecycle: single-flight start, outcome commit,
/// stale-result guarding.
pub mod session;

/// HTTP execution of resolved requests against the tool service.
pub mod client;
