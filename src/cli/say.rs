//! TUI-less "say" command

use std::error::Error;
use std::io::{self, Write};

use tracing::debug;

use crate::core::backend::CompletionBackend;
use crate::core::completion::Completer;
use crate::core::config::{data::Config, defaults::RuntimeOverrides};
use crate::core::message::Conversation;

pub async fn run_say(
    prompt: Vec<String>,
    config: &Config,
    overrides: &RuntimeOverrides,
) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.join(" ");
    if prompt.trim().is_empty() {
        return Err("Usage: solace say <prompt>".into());
    }

    let completer = config.completer(overrides)?;
    let mut stdout = io::stdout().lock();
    say_to(&completer, &prompt, &mut stdout).await
}

/// Ask once and write the reply, whatever it turned out to be, to `out`.
pub async fn say_to<B, W>(
    completer: &Completer<B>,
    prompt: &str,
    out: &mut W,
) -> Result<(), Box<dyn Error>>
where
    B: CompletionBackend,
    W: Write,
{
    debug!(mode = %completer.mode(), "one-shot prompt");
    let mut conversation = Conversation::new();
    conversation.get_completion(completer, prompt.trim()).await;
    if let Some(reply) = conversation.last() {
        writeln!(out, "{}", reply.content)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ChatPayload;
    use crate::core::backend::{BackendError, EndpointMode, HttpBackend};
    use crate::core::completion::SamplingSettings;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use serde_json::{json, Value};

    struct Canned(Result<Value, StatusCode>);

    #[async_trait]
    impl CompletionBackend for Canned {
        fn mode(&self) -> EndpointMode {
            EndpointMode::Proxy
        }

        async fn predict(&self, _payload: &ChatPayload) -> Result<Value, BackendError> {
            self.0.clone().map_err(|status| BackendError::Status {
                mode: EndpointMode::Proxy,
                status,
            })
        }
    }

    async fn say(backend: Canned) -> String {
        let completer = Completer::new(backend, SamplingSettings::default());
        let mut out = Vec::new();
        say_to(&completer, "  hi  ", &mut out).await.expect("say");
        String::from_utf8(out).expect("utf8")
    }

    #[tokio::test]
    async fn prints_model_text() {
        assert_eq!(say(Canned(Ok(json!({ "data": "Hello!" })))).await, "Hello!\n");
    }

    #[tokio::test]
    async fn prints_failure_text_instead_of_erroring() {
        let out = say(Canned(Err(StatusCode::BAD_GATEWAY))).await;
        assert!(out.starts_with("I couldn't connect to the model via the proxy."));
        assert!(out.contains("Proxy server error: 502"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_prints_transport_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("addr").port()
        };
        let backend = HttpBackend::with_client(
            reqwest::Client::builder().no_proxy().build().expect("client"),
            EndpointMode::Hosted,
            format!("http://127.0.0.1:{port}"),
            None,
        );
        let completer = Completer::new(backend, SamplingSettings::default());
        let mut out = Vec::new();

        say_to(&completer, "hi", &mut out).await.expect("say");

        let out = String::from_utf8(out).expect("utf8");
        assert!(out.starts_with("I couldn't connect to the model via the inference endpoint."));
        assert!(out.contains("error sending request"));
    }

    #[tokio::test]
    async fn blank_prompt_is_rejected_before_any_request() {
        let err = run_say(vec!["   ".to_string()], &Config::default(), &RuntimeOverrides::default())
            .await
            .expect_err("blank prompt");
        assert!(err.to_string().starts_with("Usage:"));
    }
}
