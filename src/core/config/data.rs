use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::backend::EndpointMode;

/// On-disk configuration. Every field is optional; unset values fall back to
/// built-in defaults when resolved.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    /// Where completion requests go ("proxy" or "hosted")
    pub mode: Option<EndpointMode>,
    /// Local relay URL used in proxy mode
    pub proxy_url: Option<String>,
    /// Base URL of the hosted inference endpoint
    pub hosted_url: Option<String>,
    /// Name of the environment variable holding the hosted endpoint token
    pub token_env: Option<String>,
    pub system_prompt: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    /// Request timeout in seconds
    pub timeout: Option<u64>,
    /// Countdown start for placeholder screens (e.g. "2024-05-20T00:00:00")
    pub launch_start: Option<NaiveDateTime>,
    /// Countdown target for placeholder screens
    pub launch_date: Option<NaiveDateTime>,
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
