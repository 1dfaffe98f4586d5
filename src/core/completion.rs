//! Turns a user prompt into the assistant's reply.
//!
//! Whatever happens on the wire, the caller always gets an assistant
//! [`Message`] back: usable model output when there is some, a canned notice
//! when the endpoint answered without usable text, and an apology carrying the
//! technical detail when the request failed outright.

use serde_json::Value;
use tracing::{error, info, warn};

use crate::api::ChatPayload;
use crate::core::backend::{CompletionBackend, EndpointMode};
use crate::core::message::{Conversation, Message};

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a compassionate and friendly therapist.";
pub const DEFAULT_MAX_TOKENS: u32 = 200;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TOP_P: f64 = 0.95;

pub const EMPTY_RESPONSE_MESSAGE: &str =
    "The model returned an empty response. Please try again.";
pub const NO_RESPONSE_MESSAGE: &str =
    "Could not get a response from the model. The API may be experiencing issues.";

/// System prompt and sampling parameters sent with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingSettings {
    pub system_prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
        }
    }
}

impl SamplingSettings {
    pub fn payload_for(&self, prompt: &str) -> ChatPayload {
        ChatPayload {
            message: prompt.to_string(),
            system_message: self.system_prompt.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
        }
    }
}

/// Pick the text to show for a decoded response body.
///
/// A non-blank string `data` passes through untouched. Any other `data` value
/// is stringified, and blank results become [`EMPTY_RESPONSE_MESSAGE`]. A body
/// with no `data` at all yields [`NO_RESPONSE_MESSAGE`].
pub fn normalize_response(response: &Value) -> String {
    match response.get("data") {
        Some(Value::String(text)) if !text.trim().is_empty() => text.clone(),
        Some(data) => {
            let text = stringify(data);
            if text.trim().is_empty() {
                EMPTY_RESPONSE_MESSAGE.to_string()
            } else {
                text
            }
        }
        None => NO_RESPONSE_MESSAGE.to_string(),
    }
}

/// Loose string conversion for arbitrary JSON.
///
/// Arrays flatten to comma-joined elements with `null` entries left blank, so
/// the common `["reply"]` shape reads as `reply`. Objects render as compact
/// JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => stringify_number(number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => stringify(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

fn stringify_number(number: &serde_json::Number) -> String {
    match number.as_f64() {
        Some(float) => format_js_number(float),
        None => number.to_string(),
    }
}

/// Render a finite double the way JavaScript's `Number#toString` does:
/// plain decimals for exponents in `[-7, 21)`, exponent form otherwise, and
/// no sign on negative zero.
fn format_js_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.2345e-7`.
    let sci = format!("{:e}", value.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let k = digits.len() as i32;
    // Position of the decimal point relative to the start of `digits`.
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        let mantissa = if rest.is_empty() {
            first.to_string()
        } else {
            format!("{first}.{rest}")
        };
        format!("{mantissa}e{sign}{}", (n - 1).abs())
    };

    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

/// User-facing text for a failed request.
pub fn format_failure(mode: EndpointMode, detail: &str) -> String {
    format!(
        "I couldn't connect to the model via {}.\nTechnical details: {detail}",
        mode.route_description()
    )
}

/// Completion front-end: a backend plus the settings it is driven with.
pub struct Completer<B> {
    backend: B,
    settings: SamplingSettings,
}

impl<B: CompletionBackend> Completer<B> {
    pub fn new(backend: B, settings: SamplingSettings) -> Self {
        Self { backend, settings }
    }

    pub fn mode(&self) -> EndpointMode {
        self.backend.mode()
    }

    /// Ask the model to answer `prompt`. Never fails.
    pub async fn reply_to(&self, prompt: &str) -> Message {
        let payload = self.settings.payload_for(prompt);
        match self.backend.predict(&payload).await {
            Ok(response) => {
                if response.get("data").is_none() {
                    error!(%response, "completion response had no data");
                } else {
                    info!(
                        shape = data_shape(&response["data"]),
                        "received completion response"
                    );
                }
                Message::assistant(normalize_response(&response))
            }
            Err(err) => {
                warn!(error = %err, "completion request failed");
                Message::assistant(format_failure(self.backend.mode(), &err.to_string()))
            }
        }
    }
}

fn data_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Conversation {
    /// Append `prompt` as a user turn, ask the model, and append its reply.
    pub async fn get_completion<B: CompletionBackend>(
        &mut self,
        completer: &Completer<B>,
        prompt: &str,
    ) {
        self.push(Message::user(prompt));
        let reply = completer.reply_to(prompt).await;
        self.push(reply);
    }
}
