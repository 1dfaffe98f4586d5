//! Keys accepted by `solace set` / `solace unset`.

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

use crate::core::config::data::Config;

pub const SETTABLE_KEYS: &[&str] = &[
    "mode",
    "proxy-url",
    "hosted-url",
    "token-env",
    "system-prompt",
    "max-tokens",
    "temperature",
    "top-p",
    "timeout",
    "launch-start",
    "launch-date",
];

#[derive(Debug, Clone, PartialEq)]
pub enum KeyError {
    Unknown(String),
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::Unknown(key) => write!(
                f,
                "Unknown config key: {key} (expected one of: {})",
                SETTABLE_KEYS.join(", ")
            ),
            KeyError::Invalid { key, value, reason } => {
                write!(f, "Invalid value '{value}' for {key}: {reason}")
            }
        }
    }
}

impl std::error::Error for KeyError {}

fn invalid(key: &str, value: &str, reason: impl Into<String>) -> KeyError {
    KeyError::Invalid {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn parse_in_range(key: &str, value: &str, min: f64, max: f64) -> Result<f64, KeyError> {
    let parsed: f64 = value
        .parse()
        .map_err(|_| invalid(key, value, "expected a number"))?;
    if !(min..=max).contains(&parsed) {
        return Err(invalid(
            key,
            value,
            format!("must be between {min} and {max}"),
        ));
    }
    Ok(parsed)
}

fn parse_positive<T>(key: &str, value: &str) -> Result<T, KeyError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match value.parse::<T>() {
        Ok(parsed) if parsed > T::default() => Ok(parsed),
        _ => Err(invalid(key, value, "expected a positive whole number")),
    }
}

/// Accepts either a full `YYYY-MM-DDTHH:MM:SS` timestamp or a bare date
/// (midnight).
pub fn parse_launch_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn parse_url(key: &str, value: &str) -> Result<String, KeyError> {
    let trimmed = value.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(invalid(key, value, "expected an http:// or https:// URL"))
    }
}

impl Config {
    pub fn set_key(&mut self, key: &str, value: &str) -> Result<(), KeyError> {
        match key {
            "mode" => {
                self.mode = Some(value.parse().map_err(|err: String| invalid(key, value, err))?)
            }
            "proxy-url" => self.proxy_url = Some(parse_url(key, value)?),
            "hosted-url" => self.hosted_url = Some(parse_url(key, value)?),
            "token-env" => {
                if value.trim().is_empty() {
                    return Err(invalid(key, value, "variable name cannot be empty"));
                }
                self.token_env = Some(value.trim().to_string());
            }
            "system-prompt" => {
                if value.trim().is_empty() {
                    return Err(invalid(key, value, "prompt cannot be empty"));
                }
                self.system_prompt = Some(value.to_string());
            }
            "max-tokens" => self.max_tokens = Some(parse_positive(key, value)?),
            "temperature" => self.temperature = Some(parse_in_range(key, value, 0.0, 2.0)?),
            "top-p" => self.top_p = Some(parse_in_range(key, value, 0.0, 1.0)?),
            "timeout" => self.timeout = Some(parse_positive(key, value)?),
            "launch-start" => {
                self.launch_start = Some(
                    parse_launch_time(value)
                        .ok_or_else(|| invalid(key, value, "expected YYYY-MM-DD[THH:MM:SS]"))?,
                )
            }
            "launch-date" => {
                self.launch_date = Some(
                    parse_launch_time(value)
                        .ok_or_else(|| invalid(key, value, "expected YYYY-MM-DD[THH:MM:SS]"))?,
                )
            }
            _ => return Err(KeyError::Unknown(key.to_string())),
        }
        Ok(())
    }

    pub fn unset_key(&mut self, key: &str) -> Result<(), KeyError> {
        match key {
            "mode" => self.mode = None,
            "proxy-url" => self.proxy_url = None,
            "hosted-url" => self.hosted_url = None,
            "token-env" => self.token_env = None,
            "system-prompt" => self.system_prompt = None,
            "max-tokens" => self.max_tokens = None,
            "temperature" => self.temperature = None,
            "top-p" => self.top_p = None,
            "timeout" => self.timeout = None,
            "launch-start" => self.launch_start = None,
            "launch-date" => self.launch_date = None,
            _ => return Err(KeyError::Unknown(key.to_string())),
        }
        Ok(())
    }
}
