use serde::{Deserialize, Serialize};

/// Path the local proxy forwards chat requests to on the hosted side.
pub const PROXY_CHAT_ENDPOINT: &str = "/chat";

/// Prompt plus the fixed system prompt and sampling parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPayload {
    pub message: String,
    pub system_message: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
}

/// Envelope understood by the local proxy: it relays `payload` to `endpoint`
/// on the hosted model and wraps the result as `{ "data": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub endpoint: String,
    pub payload: ChatPayload,
}

impl PredictRequest {
    pub fn chat(payload: ChatPayload) -> Self {
        Self {
            endpoint: PROXY_CHAT_ENDPOINT.to_string(),
            payload,
        }
    }
}
