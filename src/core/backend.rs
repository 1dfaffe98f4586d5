//! HTTP transport for completion requests.
//!
//! Two deployments are supported. In proxy mode the request goes to a small
//! local relay that wraps the payload in a [`PredictRequest`] envelope; in
//! hosted mode the payload is posted straight to the inference endpoint. Both
//! answer with a JSON object whose `data` field carries the model output, so
//! the backend returns the raw JSON and leaves interpretation to
//! [`crate::core::completion`].

use std::error::Error as StdError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::{ChatPayload, PredictRequest};
use crate::utils::url::construct_api_url;

pub const DEFAULT_PROXY_URL: &str = "http://localhost:3001/predict";
pub const DEFAULT_HOSTED_URL: &str =
    "https://nymbo-qwen2-5-coder-32b-instruct-serverless.hf.space";
pub const DEFAULT_TOKEN_ENV: &str = "HF_TOKEN";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointMode {
    #[default]
    Proxy,
    Hosted,
}

impl EndpointMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EndpointMode::Proxy => "proxy",
            EndpointMode::Hosted => "hosted",
        }
    }

    /// Human wording for "where the model lives", used in failure messages.
    pub fn route_description(self) -> &'static str {
        match self {
            EndpointMode::Proxy => "the proxy",
            EndpointMode::Hosted => "the inference endpoint",
        }
    }
}

impl fmt::Display for EndpointMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EndpointMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "proxy" => Ok(EndpointMode::Proxy),
            "hosted" => Ok(EndpointMode::Hosted),
            other => Err(format!(
                "unknown endpoint mode '{other}' (expected 'proxy' or 'hosted')"
            )),
        }
    }
}

/// Failures while talking to the completion endpoint.
#[derive(Debug)]
pub enum BackendError {
    /// The request never produced a response (connection refused, timeout, ...).
    Request(reqwest::Error),

    /// The endpoint answered with a non-success status.
    Status {
        mode: EndpointMode,
        status: reqwest::StatusCode,
    },

    /// The response body was not valid JSON.
    Decode(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Request(err) => write!(f, "{err}"),
            BackendError::Status { mode, status } => match mode {
                EndpointMode::Proxy => write!(f, "Proxy server error: {}", status.as_u16()),
                EndpointMode::Hosted => {
                    write!(f, "Inference endpoint error: {}", status.as_u16())
                }
            },
            BackendError::Decode(detail) => write!(f, "Invalid JSON response: {detail}"),
        }
    }
}

impl StdError for BackendError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            BackendError::Request(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        BackendError::Request(err)
    }
}

#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Which deployment this backend talks to.
    fn mode(&self) -> EndpointMode;

    /// Send one chat payload and return the decoded JSON body.
    async fn predict(&self, payload: &ChatPayload) -> Result<Value, BackendError>;
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    mode: EndpointMode,
    url: String,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(
        mode: EndpointMode,
        url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, mode, url, token))
    }

    pub fn with_client(
        client: reqwest::Client,
        mode: EndpointMode,
        url: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            client,
            mode,
            url: url.into(),
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Full URL a request is posted to.
    pub fn request_url(&self) -> String {
        match self.mode {
            EndpointMode::Proxy => self.url.clone(),
            EndpointMode::Hosted => construct_api_url(&self.url, "chat"),
        }
    }
}

#[async_trait]
impl CompletionBackend for HttpBackend {
    fn mode(&self) -> EndpointMode {
        self.mode
    }

    async fn predict(&self, payload: &ChatPayload) -> Result<Value, BackendError> {
        let url = self.request_url();
        debug!(mode = %self.mode, %url, "sending completion request");

        let request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json");

        let request = match self.mode {
            EndpointMode::Proxy => request.json(&PredictRequest::chat(payload.clone())),
            EndpointMode::Hosted => {
                let request = request.json(payload);
                match &self.token {
                    Some(token) => request.header("Authorization", format!("Bearer {token}")),
                    None => request,
                }
            }
        };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(mode = %self.mode, status = status.as_u16(), "completion endpoint rejected request");
            return Err(BackendError::Status {
                mode: self.mode,
                status,
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<Value>(&body).map_err(|err| BackendError::Decode(err.to_string()))
    }
}
