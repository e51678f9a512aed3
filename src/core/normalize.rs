// src/core/normalize.rs

use serde_json::Value;
use tracing::debug;

use crate::core::models::{CameraRecord, CameraStatus, NormalizedResult};

/// Fields tried in order when extracting a stream URL from a raw
/// device entry. First non-empty string wins.
const URL_FIELDS: [&str; 3] = ["rtsp_url", "url", "address"];

/// Marker prefix for raw textual output surfaced from an otherwise
/// unrecognized payload.
const OUTPUT_MARKER: &str = "[output]";

/// Turns an arbitrary backend payload into one canonical result.
///
/// The shapes are probed in a fixed order: a top-level `error` field,
/// then an embeddable `html_content` document, then a device list
/// (bare array or `results` field), and finally the unrecognized
/// fallback. The first match decides the variant.
pub fn normalize(payload: &Value) -> NormalizedResult {
    if let Some(message) = error_message(payload) {
        debug!("Payload carried an error field.");
        return NormalizedResult::Error { message };
    }

    if let Some(html) = payload.get("html_content").and_then(Value::as_str) {
        let output = payload
            .get("output")
            .and_then(Value::as_str)
            .map(|text| text.lines().map(str::to_string).collect())
            .unwrap_or_default();
        return NormalizedResult::Document {
            html: html.to_string(),
            output,
        };
    }

    if let Some(items) = payload.as_array() {
        return camera_list(items);
    }
    if let Some(items) = payload.get("results").and_then(Value::as_array) {
        return camera_list(items);
    }

    debug!("Payload matched no recognized shape.");
    let log = match payload.get("output").and_then(Value::as_str) {
        Some(raw) => raw
            .lines()
            .map(|line| format!("{OUTPUT_MARKER} {line}"))
            .collect(),
        None => vec!["Tool did not return a recognized devices list.".to_string()],
    };
    NormalizedResult::Unrecognized { log }
}

fn error_message(payload: &Value) -> Option<String> {
    match payload.get("error")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Maps a raw device list to camera records plus one log line per raw
/// entry. Entries with no extractable URL are excluded from the
/// camera list but still logged under their original position.
fn camera_list(items: &[Value]) -> NormalizedResult {
    let mut cameras = Vec::new();
    let mut log = Vec::new();

    for (idx, entry) in items.iter().enumerate() {
        let url = extract_url(entry);
        log.push(format!(
            "Device {}: {}",
            idx + 1,
            url.map(str::to_string).unwrap_or_else(|| entry.to_string())
        ));
        if let Some(url) = url {
            cameras.push(CameraRecord {
                name: extract_name(entry, idx),
                url: url.to_string(),
                // No liveness signal exists in any backend payload, so
                // a found camera is reported live.
                status: CameraStatus::Live,
            });
        }
    }

    NormalizedResult::Cameras { cameras, log }
}

fn field_str<'a>(entry: &'a Value, name: &str) -> Option<&'a str> {
    entry
        .get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn extract_url(entry: &Value) -> Option<&str> {
    URL_FIELDS.iter().find_map(|field| field_str(entry, field))
}

/// Name fallback chain: explicit `name`, then whichever field supplied
/// the URL, then the positional default. `idx` is zero-based; the
/// default is one-based. A `name` field holding a non-string goes
/// straight to the positional default.
fn extract_name(entry: &Value, idx: usize) -> String {
    match entry.get("name") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Null) | Some(Value::String(_)) | None => extract_url(entry)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Camera {}", idx + 1)),
        Some(_) => format!("Camera {}", idx + 1),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn error_field_wins_over_everything_else() {
        let payload = json!({ "error": "boom", "results": [{ "url": "rtsp://x" }] });
        assert_eq!(
            normalize(&payload),
            NormalizedResult::Error {
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn non_string_error_is_serialized() {
        let payload = json!({ "error": { "code": 7 } });
        match normalize(&payload) {
            NormalizedResult::Error { message } => assert_eq!(message, r#"{"code":7}"#),
            other => panic!("expected error result, got {other:?}"),
        }
    }

    #[test]
    fn null_error_field_is_not_an_error() {
        let payload = json!({ "error": null, "results": [] });
        assert!(matches!(
            normalize(&payload),
            NormalizedResult::Cameras { .. }
        ));
    }

    #[test]
    fn document_payload_splits_output_into_lines() {
        let payload = json!({ "html_content": "<b>x</b>", "output": "l1\nl2" });
        assert_eq!(
            normalize(&payload),
            NormalizedResult::Document {
                html: "<b>x</b>".to_string(),
                output: vec!["l1".to_string(), "l2".to_string()],
            }
        );
    }

    #[test]
    fn document_without_output_has_no_lines() {
        let payload = json!({ "html_content": "<i>r</i>" });
        assert_eq!(
            normalize(&payload),
            NormalizedResult::Document {
                html: "<i>r</i>".to_string(),
                output: Vec::new(),
            }
        );
    }

    #[test]
    fn url_fields_are_tried_in_precedence_order() {
        let payload = json!([
            { "rtsp_url": "rtsp://a", "url": "http://b", "address": "1.1.1.1" },
            { "url": "http://b", "address": "2.2.2.2" },
            { "address": "3.3.3.3" },
        ]);
        match normalize(&payload) {
            NormalizedResult::Cameras { cameras, .. } => {
                let urls: Vec<&str> = cameras.iter().map(|c| c.url.as_str()).collect();
                assert_eq!(urls, vec!["rtsp://a", "http://b", "3.3.3.3"]);
            }
            other => panic!("expected camera list, got {other:?}"),
        }
    }

    #[test]
    fn urlless_entries_are_logged_but_not_listed() {
        let payload = json!([{ "rtsp_url": "rtsp://a" }, { "address": "1.2.3.4" }, {}]);
        match normalize(&payload) {
            NormalizedResult::Cameras { cameras, log } => {
                assert_eq!(cameras.len(), 2);
                assert_eq!(cameras[0].url, "rtsp://a");
                assert_eq!(cameras[1].url, "1.2.3.4");
                assert!(cameras.iter().all(|c| c.status == CameraStatus::Live));
                // The empty entry keeps its positional log line.
                assert_eq!(log.len(), 3);
                assert_eq!(log[2], "Device 3: {}");
            }
            other => panic!("expected camera list, got {other:?}"),
        }
    }

    #[test]
    fn positional_names_use_the_prefilter_index() {
        let payload = json!([{}, { "url": "http://cam" , "name": "" }]);
        match normalize(&payload) {
            NormalizedResult::Cameras { cameras, .. } => {
                assert_eq!(cameras.len(), 1);
                // The URL-bearing field outranks the positional default.
                assert_eq!(cameras[0].name, "http://cam");
            }
            other => panic!("expected camera list, got {other:?}"),
        }

        let payload = json!([{}, { "address": "9.9.9.9" }]);
        match normalize(&payload) {
            NormalizedResult::Cameras { cameras, .. } => {
                assert_eq!(cameras[0].name, "9.9.9.9");
            }
            other => panic!("expected camera list, got {other:?}"),
        }

        // A non-string name is unusable and falls back to the
        // positional default, counted over the pre-filter list.
        let payload = json!([{}, { "name": 42, "url": "rtsp://n" }]);
        match normalize(&payload) {
            NormalizedResult::Cameras { cameras, .. } => {
                assert_eq!(cameras[0].name, "Camera 2");
                assert_eq!(cameras[0].url, "rtsp://n");
            }
            other => panic!("expected camera list, got {other:?}"),
        }
    }

    #[test]
    fn wrapped_results_field_is_treated_as_a_list() {
        let payload = json!({ "results": [{ "name": "Lobby", "url": "rtsp://lobby" }] });
        match normalize(&payload) {
            NormalizedResult::Cameras { cameras, log } => {
                assert_eq!(cameras[0].name, "Lobby");
                assert_eq!(log, vec!["Device 1: rtsp://lobby".to_string()]);
            }
            other => panic!("expected camera list, got {other:?}"),
        }
    }

    #[test]
    fn normalization_is_idempotent_for_plain_url_arrays() {
        let payload = json!([{ "url": "rtsp://a" }, { "url": "rtsp://b" }]);
        let first = normalize(&payload);
        let NormalizedResult::Cameras { cameras, .. } = &first else {
            panic!("expected camera list");
        };

        // Re-normalizing the serialized camera list yields the same
        // ordered records.
        let round_trip = serde_json::to_value(cameras).unwrap();
        let second = normalize(&round_trip);
        match second {
            NormalizedResult::Cameras {
                cameras: again, ..
            } => assert_eq!(&again, cameras),
            other => panic!("expected camera list, got {other:?}"),
        }
    }

    #[test]
    fn unknown_object_with_output_surfaces_marked_lines() {
        let payload = json!({ "status": "done", "output": "line one\nline two" });
        assert_eq!(
            normalize(&payload),
            NormalizedResult::Unrecognized {
                log: vec![
                    "[output] line one".to_string(),
                    "[output] line two".to_string(),
                ]
            }
        );
    }

    #[test]
    fn unknown_object_without_output_gets_a_single_line() {
        let payload = json!({ "status": "done" });
        assert_eq!(
            normalize(&payload),
            NormalizedResult::Unrecognized {
                log: vec!["Tool did not return a recognized devices list.".to_string()]
            }
        );
    }
}
