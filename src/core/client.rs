// src/core/client.rs

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::core::models::{Method, RequestSpec};

/// Anything that kept a structurally valid JSON reply from arriving:
/// connection failures, HTTP-level errors and non-JSON bodies all
/// collapse into the transport-error leg of the session.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid backend URL: {0}")]
    BadUrl(#[from] url::ParseError),
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

/// Thin HTTP client for the local tool service. One request per
/// invocation, no retries; clones share the underlying connection
/// pool and are handed to the spawned scan task.
#[derive(Clone)]
pub struct ToolClient {
    http: reqwest::Client,
    base: Url,
}

impl ToolClient {
    pub fn new(base: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("camwatch/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base: Url::parse(base)?,
        })
    }

    /// Executes a resolved request and decodes the JSON reply.
    /// GET parameters are URL-encoded into the query string; POST
    /// bodies go out as `application/json`.
    pub async fn execute(&self, spec: &RequestSpec) -> Result<Value, ClientError> {
        let url = self.base.join(spec.path)?;
        debug!(tool = %spec.tool, url = %url, "Issuing tool request.");

        let request = match spec.method {
            Method::Get => self.http.get(url).query(&spec.query),
            Method::Post => self
                .http
                .post(url)
                .json(spec.body.as_ref().unwrap_or(&Value::Null)),
        };

        let response = request.send().await?;
        info!(tool = %spec.tool, status = %response.status(), "Tool responded.");
        Ok(response.json::<Value>().await?)
    }
}
