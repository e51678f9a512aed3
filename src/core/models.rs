// src/core/models.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString};

// --- Tool Identity ---

/// Every remote tool the panel can trigger. The `Display` form
/// (snake_case) is the stable identifier used in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ToolId {
    Discovery,
    NetworkScan,
    XrayScan,
    RtspAttack,
    Exploit,
    Kamerka,
    Shinobi,
    SearchViewer,
    DdnsScan,
    SearchProtocol,
}

impl ToolId {
    /// Human-readable label for the sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            ToolId::Discovery => "Camera Discovery",
            ToolId::NetworkScan => "CCTV Network Scan",
            ToolId::XrayScan => "X-Ray Deep Scan",
            ToolId::RtspAttack => "RTSP Attack",
            ToolId::Exploit => "Camera Exploitation",
            ToolId::Kamerka => "Kamerka OSINT",
            ToolId::Shinobi => "Shinobi NVR",
            ToolId::SearchViewer => "Search Viewer",
            ToolId::DdnsScan => "DDNS Hostname Scan",
            ToolId::SearchProtocol => "IPCam Search Protocol",
        }
    }

    /// One-line description shown under the label.
    pub fn description(&self) -> &'static str {
        match self {
            ToolId::Discovery => "Find IP cameras and RTSP endpoints on a network",
            ToolId::NetworkScan => "Scan for vulnerable CCTV devices",
            ToolId::XrayScan => "Deep port/service scan of camera subnets",
            ToolId::RtspAttack => "RTSP route and credential brute-force (Cameradar)",
            ToolId::Exploit => "Run known exploits against a single camera",
            ToolId::Kamerka => "Geolocate internet-exposed cameras via Shodan",
            ToolId::Shinobi => "Shinobi NVR configuration and monitoring",
            ToolId::SearchViewer => "Browse public camera directories by query",
            ToolId::DdnsScan => "Probe DDNS hostnames for camera services",
            ToolId::SearchProtocol => "LAN discovery via the IPCam search protocol",
        }
    }

    /// Which parameters the options panel offers for this tool.
    pub fn relevant_params(&self) -> &'static [ParamKey] {
        match self {
            ToolId::Exploit => &[ParamKey::ExploitTarget],
            ToolId::Kamerka => &[ParamKey::ShodanKey, ParamKey::Network, ParamKey::Country],
            ToolId::SearchViewer => &[ParamKey::SearchQuery],
            ToolId::DdnsScan => &[
                ParamKey::Hostnames,
                ParamKey::ShodanKey,
                ParamKey::CensysId,
                ParamKey::CensysSecret,
            ],
            _ => &[ParamKey::Network, ParamKey::Country],
        }
    }
}

// --- Parameters ---

/// Recognized parameter names. The `Display` form (camelCase) is the
/// key used for durable storage of the credential entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum ParamKey {
    Network,
    Country,
    ExploitTarget,
    ShodanKey,
    CensysId,
    CensysSecret,
    SearchQuery,
    Hostnames,
}

impl ParamKey {
    /// Credential keys are mirrored to durable storage on every change.
    pub fn is_credential(&self) -> bool {
        matches!(
            self,
            ParamKey::ShodanKey | ParamKey::CensysId | ParamKey::CensysSecret
        )
    }

    /// Field label for the options panel.
    pub fn label(&self) -> &'static str {
        match self {
            ParamKey::Network => "Network/Subnet",
            ParamKey::Country => "Country Code",
            ParamKey::ExploitTarget => "Target URL or IP",
            ParamKey::ShodanKey => "Shodan API Key",
            ParamKey::CensysId => "Censys API ID",
            ParamKey::CensysSecret => "Censys Secret",
            ParamKey::SearchQuery => "Search Query",
            ParamKey::Hostnames => "Hostnames (comma separated)",
        }
    }
}

// --- Requests ---

/// HTTP method of a tool invocation. Only these two occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully resolved tool invocation: built fresh per run by the
/// dispatch table, never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub tool: ToolId,
    pub method: Method,
    pub path: &'static str,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

// --- Cameras ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    Live,
    Offline,
    Unknown,
}

/// The canonical shape every backend camera payload is normalized
/// into. Records published to the session always carry a stream URL;
/// entries without one never become records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraRecord {
    pub name: String,
    pub url: String,
    pub status: CameraStatus,
}

// --- Normalization ---

/// What the normalizer made of a backend payload. Exactly one variant
/// per payload, chosen by a fixed precedence (error, document, camera
/// list, unrecognized).
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedResult {
    /// The payload carried a top-level `error` field.
    Error { message: String },
    /// The payload carried an embeddable `html_content` document,
    /// optionally with multi-line textual `output`.
    Document { html: String, output: Vec<String> },
    /// The payload was a device list (bare array or `results` field).
    /// One log line per raw entry, including entries that yielded no
    /// camera record.
    Cameras {
        cameras: Vec<CameraRecord>,
        log: Vec<String>,
    },
    /// None of the recognized shapes matched.
    Unrecognized { log: Vec<String> },
}
