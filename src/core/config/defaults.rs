//! Resolution of effective settings: CLI overrides beat environment, which
//! beats the config file, which beats the built-in defaults.

use std::time::Duration;

use crate::core::backend::{
    BackendError, EndpointMode, HttpBackend, DEFAULT_HOSTED_URL, DEFAULT_PROXY_URL,
    DEFAULT_TIMEOUT, DEFAULT_TOKEN_ENV,
};
use crate::core::completion::{Completer, SamplingSettings};
use crate::core::config::data::Config;
use crate::core::countdown::{self, Countdown};

pub const PROXY_URL_ENV: &str = "SOLACE_PROXY_URL";
pub const HOSTED_URL_ENV: &str = "SOLACE_HOSTED_URL";

/// Per-run settings supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuntimeOverrides {
    pub mode: Option<EndpointMode>,
    /// URL for whichever mode ends up selected.
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEndpoint {
    pub mode: EndpointMode,
    pub url: String,
    pub token_env: String,
    pub timeout: Duration,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn effective_mode(&self, overrides: &RuntimeOverrides) -> EndpointMode {
        overrides.mode.or(self.mode).unwrap_or_default()
    }

    pub fn resolve_endpoint(&self, overrides: &RuntimeOverrides) -> ResolvedEndpoint {
        self.resolve_endpoint_with(overrides, |name| std::env::var(name).ok())
    }

    pub(crate) fn resolve_endpoint_with<F>(
        &self,
        overrides: &RuntimeOverrides,
        env: F,
    ) -> ResolvedEndpoint
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = self.effective_mode(overrides);
        let (env_name, from_file, fallback) = match mode {
            EndpointMode::Proxy => (PROXY_URL_ENV, &self.proxy_url, DEFAULT_PROXY_URL),
            EndpointMode::Hosted => (HOSTED_URL_ENV, &self.hosted_url, DEFAULT_HOSTED_URL),
        };

        let url = non_blank(overrides.endpoint.clone())
            .or_else(|| non_blank(env(env_name)))
            .or_else(|| non_blank(from_file.clone()))
            .unwrap_or_else(|| fallback.to_string());

        ResolvedEndpoint {
            mode,
            url,
            token_env: non_blank(self.token_env.clone())
                .unwrap_or_else(|| DEFAULT_TOKEN_ENV.to_string()),
            timeout: self.request_timeout(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        self.timeout
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn sampling_settings(&self) -> SamplingSettings {
        let defaults = SamplingSettings::default();
        SamplingSettings {
            system_prompt: non_blank(self.system_prompt.clone()).unwrap_or(defaults.system_prompt),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            temperature: self.temperature.unwrap_or(defaults.temperature),
            top_p: self.top_p.unwrap_or(defaults.top_p),
        }
    }

    pub fn countdown(&self) -> Countdown {
        Countdown::new(
            self.launch_start.unwrap_or_else(countdown::default_start),
            self.launch_date.unwrap_or_else(countdown::default_target),
        )
    }

    /// Build the HTTP-backed completer for this configuration.
    pub fn completer(
        &self,
        overrides: &RuntimeOverrides,
    ) -> Result<Completer<HttpBackend>, BackendError> {
        let endpoint = self.resolve_endpoint(overrides);
        let token = match endpoint.mode {
            EndpointMode::Hosted => std::env::var(&endpoint.token_env).ok(),
            EndpointMode::Proxy => None,
        };
        let backend = HttpBackend::new(endpoint.mode, endpoint.url, token, endpoint.timeout)?;
        Ok(Completer::new(backend, self.sampling_settings()))
    }
}
