// src/core/dispatch.rs

use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::core::models::{Method, ParamKey, RequestSpec, ToolId};
use crate::core::params::ParameterSet;

/// A required parameter was missing for the selected tool. This is a
/// local, non-retryable failure: it must prevent any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("exploit requires a target camera URL or IP")]
    MissingExploitTarget,
    #[error("kamerka requires a Shodan API key")]
    MissingShodanKey,
    #[error("search-viewer requires a search query")]
    MissingSearchQuery,
    #[error("ddns-scan requires at least one hostname")]
    MissingHostnames,
}

/// Endpoint path on the tool service for each tool.
pub fn endpoint(tool: ToolId) -> &'static str {
    match tool {
        ToolId::Discovery => "discover",
        ToolId::NetworkScan => "scan",
        ToolId::XrayScan => "xray",
        ToolId::RtspAttack => "cameradar",
        ToolId::Exploit => "exploit",
        ToolId::Kamerka => "kamerka",
        ToolId::Shinobi => "shinobi",
        ToolId::SearchViewer => "search-viewer",
        ToolId::DdnsScan => "ddns-scan",
        ToolId::SearchProtocol => "search-protocol",
    }
}

/// Builds the concrete request for `tool` from the current parameter
/// values, or reports which required parameter is missing.
pub fn resolve(tool: ToolId, params: &ParameterSet) -> Result<RequestSpec, ValidationError> {
    let spec = match tool {
        ToolId::Exploit => {
            let target = params.get(ParamKey::ExploitTarget);
            if target.is_empty() {
                return Err(ValidationError::MissingExploitTarget);
            }
            post(tool, json!({ "target": target }))
        }
        ToolId::Kamerka => {
            let key = params.get(ParamKey::ShodanKey);
            if key.is_empty() {
                return Err(ValidationError::MissingShodanKey);
            }
            let mut query = scope_query(params);
            query.push(("shodan_key", key.to_string()));
            get(tool, query)
        }
        ToolId::SearchViewer => {
            let q = params.get(ParamKey::SearchQuery);
            if q.is_empty() {
                return Err(ValidationError::MissingSearchQuery);
            }
            let mut query = scope_query(params);
            query.push(("query", q.to_string()));
            get(tool, query)
        }
        ToolId::DdnsScan => {
            let hostnames = split_hostnames(params.get(ParamKey::Hostnames));
            if hostnames.is_empty() {
                return Err(ValidationError::MissingHostnames);
            }
            let mut body = json!({ "hostnames": hostnames.join("\n") });
            // Credential fields ride along only when actually set.
            for (field, key) in [
                ("shodan_key", ParamKey::ShodanKey),
                ("censys_id", ParamKey::CensysId),
                ("censys_secret", ParamKey::CensysSecret),
            ] {
                let value = params.get(key);
                if !value.is_empty() {
                    body[field] = json!(value);
                }
            }
            post(tool, body)
        }
        // The remaining tools take only the network/country scope.
        _ => get(tool, scope_query(params)),
    };
    debug!(tool = %tool, path = spec.path, "Resolved request spec.");
    Ok(spec)
}

/// Scope half of a GET query: country wins over network when both
/// could apply, and neither is sent when unset.
fn scope_query(params: &ParameterSet) -> Vec<(&'static str, String)> {
    let country = params.get(ParamKey::Country);
    if !country.is_empty() {
        return vec![("country", country.to_string())];
    }
    let network = params.get(ParamKey::Network);
    if !network.is_empty() {
        return vec![("network", network.to_string())];
    }
    Vec::new()
}

/// Hostname lists arrive newline-delimited; the options form also
/// accepts commas. Blank segments are dropped.
pub fn split_hostnames(raw: &str) -> Vec<&str> {
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .collect()
}

/// What the initial "Running..." log line names as the target:
/// country if set, else network, else something tool-specific.
pub fn target_label(tool: ToolId, params: &ParameterSet) -> String {
    let country = params.get(ParamKey::Country);
    if !country.is_empty() {
        return country.to_string();
    }
    let network = params.get(ParamKey::Network);
    if !network.is_empty() {
        return network.to_string();
    }
    match tool {
        ToolId::Exploit => {
            let target = params.get(ParamKey::ExploitTarget);
            if target.is_empty() {
                "no target".to_string()
            } else {
                target.to_string()
            }
        }
        ToolId::SearchViewer => {
            let q = params.get(ParamKey::SearchQuery);
            if q.is_empty() {
                "no query".to_string()
            } else {
                q.to_string()
            }
        }
        ToolId::Kamerka => "shodan".to_string(),
        ToolId::DdnsScan => {
            let n = split_hostnames(params.get(ParamKey::Hostnames)).len();
            format!("{} hostname(s)", n)
        }
        _ => "no target".to_string(),
    }
}

fn get(tool: ToolId, query: Vec<(&'static str, String)>) -> RequestSpec {
    RequestSpec {
        tool,
        method: Method::Get,
        path: endpoint(tool),
        query,
        body: None,
    }
}

fn post(tool: ToolId, body: serde_json::Value) -> RequestSpec {
    RequestSpec {
        tool,
        method: Method::Post,
        path: endpoint(tool),
        query: Vec::new(),
        body: Some(body),
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::core::params::{MemoryStore, ParameterSet};

    fn params() -> ParameterSet {
        ParameterSet::new(Box::new(MemoryStore::default()))
    }

    #[test]
    fn every_tool_with_a_required_param_fails_cleanly_when_unset() {
        let empty = params();
        for (tool, expected) in [
            (ToolId::Exploit, ValidationError::MissingExploitTarget),
            (ToolId::Kamerka, ValidationError::MissingShodanKey),
            (ToolId::SearchViewer, ValidationError::MissingSearchQuery),
            (ToolId::DdnsScan, ValidationError::MissingHostnames),
        ] {
            assert_eq!(resolve(tool, &empty), Err(expected), "tool {tool}");
        }
    }

    #[test]
    fn scope_tools_resolve_even_with_nothing_set() {
        let empty = params();
        for tool in ToolId::iter() {
            if matches!(
                tool,
                ToolId::Exploit | ToolId::Kamerka | ToolId::SearchViewer | ToolId::DdnsScan
            ) {
                continue;
            }
            let spec = resolve(tool, &empty).expect("scope tools have no required params");
            assert_eq!(spec.method, Method::Get);
            assert!(spec.query.is_empty());
            assert!(spec.body.is_none());
        }
    }

    #[test]
    fn country_wins_over_network_in_the_query() {
        let mut p = params();
        p.set(ParamKey::Network, "192.168.1.0/24");
        let spec = resolve(ToolId::Discovery, &p).unwrap();
        assert_eq!(spec.query, vec![("network", "192.168.1.0/24".to_string())]);

        // Setting country clears network at the store boundary, so
        // only the country scope can ever be sent.
        p.set(ParamKey::Country, "IT");
        let spec = resolve(ToolId::Discovery, &p).unwrap();
        assert_eq!(spec.path, "discover");
        assert_eq!(spec.query, vec![("country", "IT".to_string())]);
    }

    #[test]
    fn exploit_posts_its_target() {
        let mut p = params();
        p.set(ParamKey::ExploitTarget, "rtsp://10.0.0.9:554");
        let spec = resolve(ToolId::Exploit, &p).unwrap();
        assert_eq!(spec.method, Method::Post);
        assert_eq!(spec.path, "exploit");
        assert_eq!(
            spec.body,
            Some(serde_json::json!({ "target": "rtsp://10.0.0.9:554" }))
        );
    }

    #[test]
    fn kamerka_query_carries_the_shodan_key() {
        let mut p = params();
        p.set(ParamKey::ShodanKey, "k-123");
        p.set(ParamKey::Country, "FR");
        let spec = resolve(ToolId::Kamerka, &p).unwrap();
        assert_eq!(spec.path, "kamerka");
        assert_eq!(
            spec.query,
            vec![
                ("country", "FR".to_string()),
                ("shodan_key", "k-123".to_string())
            ]
        );
    }

    #[test]
    fn ddns_scan_includes_credentials_only_when_set() {
        let mut p = params();
        p.set(ParamKey::Hostnames, "cam1.example.org, cam2.example.org");
        p.set(ParamKey::CensysId, "cid");
        let spec = resolve(ToolId::DdnsScan, &p).unwrap();
        let body = spec.body.unwrap();
        assert_eq!(body["hostnames"], "cam1.example.org\ncam2.example.org");
        assert_eq!(body["censys_id"], "cid");
        assert!(body.get("shodan_key").is_none());
        assert!(body.get("censys_secret").is_none());
    }

    #[test]
    fn whitespace_only_hostnames_are_still_missing() {
        let mut p = params();
        p.set(ParamKey::Hostnames, " ,\n ");
        assert_eq!(
            resolve(ToolId::DdnsScan, &p),
            Err(ValidationError::MissingHostnames)
        );
    }

    #[test]
    fn target_label_prefers_country_then_network() {
        let mut p = params();
        assert_eq!(target_label(ToolId::Discovery, &p), "no target");
        p.set(ParamKey::Network, "172.16.0.0/12");
        assert_eq!(target_label(ToolId::Discovery, &p), "172.16.0.0/12");
        p.set(ParamKey::Country, "NL");
        assert_eq!(target_label(ToolId::Discovery, &p), "NL");
    }

    #[test]
    fn target_label_falls_back_per_tool() {
        let mut p = params();
        p.set(ParamKey::ExploitTarget, "1.2.3.4");
        assert_eq!(target_label(ToolId::Exploit, &p), "1.2.3.4");
        p.set(ParamKey::Hostnames, "a.org\nb.org");
        assert_eq!(target_label(ToolId::DdnsScan, &p), "2 hostname(s)");
        assert_eq!(target_label(ToolId::Kamerka, &p), "shodan");
    }
}
